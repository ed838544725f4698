// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Data about a single activity as sent by the enrollment service
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ActivityRecord {
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub schedule: Option<String>,
	#[serde(default)]
	pub participants: Option<Vec<String>>,
}

impl ActivityRecord {
	pub fn description(&self) -> &str {
		self.description.as_deref().unwrap_or_default()
	}

	pub fn schedule(&self) -> &str {
		self.schedule.as_deref().unwrap_or_default()
	}

	/// The registered emails in the order the service sent them. Absent participant lists are empty.
	pub fn participants(&self) -> &[String] {
		self.participants.as_deref().unwrap_or_default()
	}
}

/// All activities offered by the service, keyed by activity name.
///
/// Entries keep the order in which the service sent them. That order is used both for the activity cards and for
/// the options in the signup selector, so the directory never sorts or hashes its keys.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ActivityDirectory {
	entries: Vec<(String, ActivityRecord)>,
}

impl ActivityDirectory {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &ActivityRecord)> {
		self.entries.iter().map(|(name, record)| (name.as_str(), record))
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(name, _)| name.as_str())
	}

	pub fn get(&self, name: &str) -> Option<&ActivityRecord> {
		self.entries
			.iter()
			.find(|(entry_name, _)| entry_name == name)
			.map(|(_, record)| record)
	}

	/// Adds an activity at the end of the directory. An activity that already exists has its record replaced in
	/// place, keeping its original position.
	pub fn insert(&mut self, name: String, record: ActivityRecord) {
		match self.entries.iter_mut().find(|(entry_name, _)| *entry_name == name) {
			Some((_, existing)) => *existing = record,
			None => self.entries.push((name, record)),
		}
	}
}

impl FromIterator<(String, ActivityRecord)> for ActivityDirectory {
	fn from_iter<T: IntoIterator<Item = (String, ActivityRecord)>>(iter: T) -> Self {
		let mut directory = Self::new();
		for (name, record) in iter {
			directory.insert(name, record);
		}
		directory
	}
}

impl Serialize for ActivityDirectory {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for (name, record) in self.entries.iter() {
			map.serialize_entry(name, record)?;
		}
		map.end()
	}
}

struct ActivityDirectoryVisitor;

impl<'de> Visitor<'de> for ActivityDirectoryVisitor {
	type Value = ActivityDirectory;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("a map of activity names to activity data")
	}

	fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
		let mut directory = ActivityDirectory {
			entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
		};
		while let Some((name, record)) = access.next_entry::<String, ActivityRecord>()? {
			directory.insert(name, record);
		}
		Ok(directory)
	}
}

impl<'de> Deserialize<'de> for ActivityDirectory {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_map(ActivityDirectoryVisitor)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keeps_service_order() {
		let json = r#"{
			"Programming Class": {"description": "p", "schedule": "Tue", "participants": []},
			"Chess Club": {"description": "c", "schedule": "Fri", "participants": ["a@x.com"]},
			"Art Studio": {}
		}"#;
		let directory: ActivityDirectory = serde_json::from_str(json).unwrap();
		let names: Vec<&str> = directory.names().collect();
		assert_eq!(names, vec!["Programming Class", "Chess Club", "Art Studio"]);
	}

	#[test]
	fn missing_and_null_fields_read_as_absent() {
		let json = r#"{"Chess Club": {"description": null, "max_participants": 12}}"#;
		let directory: ActivityDirectory = serde_json::from_str(json).unwrap();
		let record = directory.get("Chess Club").unwrap();
		assert_eq!(record.description(), "");
		assert_eq!(record.schedule(), "");
		assert!(record.participants().is_empty());
	}

	#[test]
	fn participants_are_not_deduplicated() {
		let json = r#"{"Chess Club": {"participants": ["b@x.com", "a@x.com", "b@x.com"]}}"#;
		let directory: ActivityDirectory = serde_json::from_str(json).unwrap();
		assert_eq!(
			directory.get("Chess Club").unwrap().participants(),
			["b@x.com", "a@x.com", "b@x.com"]
		);
	}

	#[test]
	fn repeated_key_replaces_in_place() {
		let json = r#"{"A": {"schedule": "first"}, "B": {}, "A": {"schedule": "second"}}"#;
		let directory: ActivityDirectory = serde_json::from_str(json).unwrap();
		assert_eq!(directory.len(), 2);
		assert_eq!(directory.names().collect::<Vec<_>>(), vec!["A", "B"]);
		assert_eq!(directory.get("A").unwrap().schedule(), "second");
	}

	#[test]
	fn rejects_non_object_payloads() {
		assert!(serde_json::from_str::<ActivityDirectory>("[]").is_err());
		assert!(serde_json::from_str::<ActivityDirectory>(r#"{"A": {"participants": [1]}}"#).is_err());
	}

	#[test]
	fn serializes_in_order() {
		let directory: ActivityDirectory = [
			(String::from("Zebra Club"), ActivityRecord::default()),
			(String::from("Art Studio"), ActivityRecord::default()),
		]
		.into_iter()
		.collect();
		let json = serde_json::to_string(&directory).unwrap();
		let zebra = json.find("Zebra Club").unwrap();
		let art = json.find("Art Studio").unwrap();
		assert!(zebra < art);
	}
}
