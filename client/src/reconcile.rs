// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Describes what the page shows for a directory snapshot. The description is rebuilt from scratch for every
//! snapshot and handed to the components, which replace their content with it wholesale.

use enrollment_shared::messages::activities::{ActivityDirectory, ActivityRecord};

pub const SELECT_PLACEHOLDER_LABEL: &str = "-- Select an activity --";
pub const NO_ACTIVITIES_TEXT: &str = "No activities available.";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectOption {
	pub value: String,
	pub label: String,
	pub selectable: bool,
}

impl SelectOption {
	fn placeholder() -> Self {
		Self {
			value: String::new(),
			label: String::from(SELECT_PLACEHOLDER_LABEL),
			selectable: false,
		}
	}

	fn activity(name: &str) -> Self {
		Self {
			value: name.to_string(),
			label: name.to_string(),
			selectable: true,
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Roster {
	Empty,
	Participants(Vec<String>),
}

impl Roster {
	fn from_participants(participants: &[String]) -> Self {
		if participants.is_empty() {
			Self::Empty
		} else {
			Self::Participants(participants.to_vec())
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActivityCard {
	pub name: String,
	pub description: String,
	pub schedule: String,
	pub roster: Roster,
}

impl ActivityCard {
	fn new(name: &str, record: &ActivityRecord) -> Self {
		Self {
			name: name.to_string(),
			description: record.description().to_string(),
			schedule: record.schedule().to_string(),
			roster: Roster::from_participants(record.participants()),
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CardList {
	NoActivities,
	Cards(Vec<ActivityCard>),
}

/// Everything the page shows for one directory snapshot: the options in the signup selector and the activity cards
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirectoryView {
	pub options: Vec<SelectOption>,
	pub cards: CardList,
}

impl DirectoryView {
	pub fn from_directory(directory: &ActivityDirectory) -> Self {
		let options = std::iter::once(SelectOption::placeholder())
			.chain(directory.names().map(SelectOption::activity))
			.collect();
		let cards = if directory.is_empty() {
			CardList::NoActivities
		} else {
			CardList::Cards(
				directory
					.iter()
					.map(|(name, record)| ActivityCard::new(name, record))
					.collect(),
			)
		};
		Self { options, cards }
	}
}

impl Default for DirectoryView {
	fn default() -> Self {
		Self::from_directory(&ActivityDirectory::new())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn directory(json: &str) -> ActivityDirectory {
		serde_json::from_str(json).unwrap()
	}

	#[test]
	fn empty_directory_has_only_placeholder_and_notice() {
		let view = DirectoryView::from_directory(&ActivityDirectory::new());
		assert_eq!(view.options, vec![SelectOption::placeholder()]);
		assert_eq!(view.cards, CardList::NoActivities);
	}

	#[test]
	fn single_activity_gives_placeholder_then_activity() {
		let view = DirectoryView::from_directory(&directory(
			r#"{"Chess Club":{"description":"d","schedule":"s","participants":[]}}"#,
		));
		let labels: Vec<&str> = view.options.iter().map(|option| option.label.as_str()).collect();
		assert_eq!(labels, vec![SELECT_PLACEHOLDER_LABEL, "Chess Club"]);
		assert!(!view.options[0].selectable);
		assert!(view.options[1].selectable);
		assert_eq!(view.options[1].value, "Chess Club");
	}

	#[test]
	fn empty_and_absent_participants_both_show_placeholder_roster() {
		let view = DirectoryView::from_directory(&directory(r#"{"A":{"participants":[]},"B":{}}"#));
		let CardList::Cards(cards) = view.cards else {
			panic!("expected cards");
		};
		assert_eq!(cards[0].roster, Roster::Empty);
		assert_eq!(cards[1].roster, Roster::Empty);
	}

	#[test]
	fn participants_are_shown_verbatim_in_order() {
		let view = DirectoryView::from_directory(&directory(
			r#"{"Chess Club":{"participants":["a@x.com","b@x.com"]}}"#,
		));
		let CardList::Cards(cards) = view.cards else {
			panic!("expected cards");
		};
		assert_eq!(
			cards[0].roster,
			Roster::Participants(vec![String::from("a@x.com"), String::from("b@x.com")])
		);
	}

	#[test]
	fn absent_text_fields_become_empty() {
		let view = DirectoryView::from_directory(&directory(r#"{"Chess Club":{}}"#));
		let CardList::Cards(cards) = view.cards else {
			panic!("expected cards");
		};
		assert_eq!(cards[0].description, "");
		assert_eq!(cards[0].schedule, "");
	}

	#[test]
	fn cards_and_options_follow_directory_order() {
		let view = DirectoryView::from_directory(&directory(r#"{"Zebra":{},"Art":{},"Math":{}}"#));
		let option_values: Vec<&str> = view.options.iter().skip(1).map(|option| option.value.as_str()).collect();
		assert_eq!(option_values, vec!["Zebra", "Art", "Math"]);
		let CardList::Cards(cards) = view.cards else {
			panic!("expected cards");
		};
		let card_names: Vec<&str> = cards.iter().map(|card| card.name.as_str()).collect();
		assert_eq!(card_names, option_values);
	}

	#[test]
	fn rebuilding_from_the_same_directory_is_identical() {
		let snapshot = directory(r#"{"A":{"description":"x","participants":["p@x.com","p@x.com"]},"B":{}}"#);
		assert_eq!(
			DirectoryView::from_directory(&snapshot),
			DirectoryView::from_directory(&snapshot)
		);
	}
}
