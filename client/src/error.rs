// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// Errors that can occur when reading the activity directory from the service. Any of these means the directory is
/// unavailable; the page shows an empty directory in its place.
#[derive(Debug)]
pub enum FetchError {
	Network(gloo_net::Error),
	Status(u16),
	Body(serde_json::Error),
}

impl From<gloo_net::Error> for FetchError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Network(error)
	}
}

impl From<serde_json::Error> for FetchError {
	fn from(error: serde_json::Error) -> Self {
		Self::Body(error)
	}
}

impl fmt::Display for FetchError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Network(error) => write!(f, "Failed to reach the activity service: {}", error),
			Self::Status(status) => write!(f, "The activity service responded with status {}", status),
			Self::Body(error) => write!(f, "The activity list couldn't be read: {}", error),
		}
	}
}

/// Problems with the signup form that are caught before anything is sent
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationError {
	MissingEmail,
	MissingActivity,
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Please enter your email and select an activity.")
	}
}

/// Errors in the page-provided client configuration
#[derive(Debug)]
pub enum ConfigError {
	NoWindow,
	NoLocation,
	InvalidBase(url::ParseError),
	CannotBeBase(String),
	InvalidNumber { attribute: &'static str, value: String },
}

impl From<url::ParseError> for ConfigError {
	fn from(error: url::ParseError) -> Self {
		Self::InvalidBase(error)
	}
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoWindow => write!(f, "The browser window context is unavailable"),
			Self::NoLocation => write!(f, "The current page address couldn't be read"),
			Self::InvalidBase(error) => write!(f, "The activity service address is invalid: {}", error),
			Self::CannotBeBase(address) => write!(f, "The activity service address {} can't hold a path", address),
			Self::InvalidNumber { attribute, value } => {
				write!(f, "The value \"{}\" of {} is not a valid number", value, attribute)
			}
		}
	}
}
