// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dom::app_root;
use crate::error::ConfigError;
use crate::transport::ActivityEndpoints;
use url::Url;

pub const DEFAULT_ACTIVITIES_PATH: &str = "/activities";
pub const DEFAULT_NOTICE_DURATION_MS: u32 = 4000;

const API_BASE_ATTRIBUTE: &str = "data-api-base";
const NOTICE_DURATION_ATTRIBUTE: &str = "data-notice-duration-ms";
const DISCARD_STALE_ATTRIBUTE: &str = "data-discard-stale-refreshes";
const REPORT_FAILURES_ATTRIBUTE: &str = "data-report-directory-failures";

/// Settings for the client, read from the hosting page at startup
#[derive(Clone, Debug)]
pub struct ClientConfig {
	pub endpoints: ActivityEndpoints,
	/// How long a notice stays visible before hiding itself
	pub notice_duration_ms: u32,
	/// Drop directory responses that resolve after a newer one has already been shown
	pub discard_stale_refreshes: bool,
	/// Show an error notice when the directory can't be loaded, in addition to showing an empty directory
	pub report_directory_failures: bool,
}

impl ClientConfig {
	/// Creates a configuration with default settings for the activities collection at the given address.
	///
	/// # Errors
	///
	/// Fails when the address can't have activity paths appended to it.
	pub fn new(activities_url: Url) -> Result<Self, ConfigError> {
		Ok(Self {
			endpoints: ActivityEndpoints::new(activities_url)?,
			notice_duration_ms: DEFAULT_NOTICE_DURATION_MS,
			discard_stale_refreshes: false,
			report_directory_failures: false,
		})
	}

	/// Reads the configuration for the current page. The activities collection defaults to `/activities` on the
	/// page's origin; `data-*` attributes on the mount element override the defaults.
	///
	/// # Errors
	///
	/// Fails when the browser context is unavailable or an override attribute has an unusable value.
	pub fn from_page() -> Result<Self, ConfigError> {
		let window = web_sys::window().ok_or(ConfigError::NoWindow)?;
		let page_address = window.location().href().map_err(|_| ConfigError::NoLocation)?;
		let page_url = Url::parse(&page_address)?;

		let root = app_root();
		let attribute = |name: &str| root.as_ref().and_then(|element| element.get_attribute(name));

		let api_base = attribute(API_BASE_ATTRIBUTE);
		let activities_url = resolve_api_base(&page_url, api_base.as_deref())?;
		let mut config = Self::new(activities_url)?;

		if let Some(duration) = attribute(NOTICE_DURATION_ATTRIBUTE) {
			config.notice_duration_ms = parse_duration(&duration)?;
		}
		if let Some(flag) = attribute(DISCARD_STALE_ATTRIBUTE) {
			config.discard_stale_refreshes = parse_flag(&flag);
		}
		if let Some(flag) = attribute(REPORT_FAILURES_ATTRIBUTE) {
			config.report_directory_failures = parse_flag(&flag);
		}

		Ok(config)
	}
}

/// Resolves the configured activities address against the page address. Relative addresses are relative to the page.
fn resolve_api_base(page_url: &Url, api_base: Option<&str>) -> Result<Url, ConfigError> {
	let api_base = api_base.map(str::trim).filter(|base| !base.is_empty());
	Ok(page_url.join(api_base.unwrap_or(DEFAULT_ACTIVITIES_PATH))?)
}

fn parse_duration(value: &str) -> Result<u32, ConfigError> {
	value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
		attribute: NOTICE_DURATION_ATTRIBUTE,
		value: value.to_string(),
	})
}

fn parse_flag(value: &str) -> bool {
	matches!(value.trim(), "" | "true" | "1" | "yes")
}

#[cfg(test)]
mod tests {
	use super::*;

	fn page() -> Url {
		Url::parse("https://school.example/portal/index.html?tab=2").unwrap()
	}

	#[test]
	fn defaults_to_activities_on_origin() {
		let url = resolve_api_base(&page(), None).unwrap();
		assert_eq!(url.as_str(), "https://school.example/activities");
	}

	#[test]
	fn blank_override_uses_default() {
		let url = resolve_api_base(&page(), Some("  ")).unwrap();
		assert_eq!(url.as_str(), "https://school.example/activities");
	}

	#[test]
	fn relative_override_resolves_against_page() {
		let url = resolve_api_base(&page(), Some("api/activities")).unwrap();
		assert_eq!(url.as_str(), "https://school.example/portal/api/activities");
	}

	#[test]
	fn absolute_override_is_used_as_is() {
		let url = resolve_api_base(&page(), Some("http://localhost:8000/activities")).unwrap();
		assert_eq!(url.as_str(), "http://localhost:8000/activities");
	}

	#[test]
	fn new_config_has_defaults() {
		let config = ClientConfig::new(Url::parse("http://localhost/activities").unwrap()).unwrap();
		assert_eq!(config.notice_duration_ms, DEFAULT_NOTICE_DURATION_MS);
		assert!(!config.discard_stale_refreshes);
		assert!(!config.report_directory_failures);
	}

	#[test]
	fn duration_must_be_a_number() {
		assert_eq!(parse_duration(" 2500 ").unwrap(), 2500);
		assert!(matches!(
			parse_duration("soon"),
			Err(ConfigError::InvalidNumber { .. })
		));
	}

	#[test]
	fn flags_accept_presence_and_true() {
		assert!(parse_flag(""));
		assert!(parse_flag("true"));
		assert!(!parse_flag("false"));
	}
}
