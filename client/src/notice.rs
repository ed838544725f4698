// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Severity {
	Info,
	Success,
	Error,
}

impl Severity {
	/// The class used to style notices of this severity
	pub fn css_class(&self) -> &'static str {
		match self {
			Self::Info => "info",
			Self::Success => "success",
			Self::Error => "error",
		}
	}
}

/// A status message shown to the user until it expires or another notice replaces it.
///
/// The generation identifies which showing of the notice region this notice belongs to. A hide scheduled for an
/// older generation leaves a newer notice alone.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice {
	pub text: String,
	pub severity: Severity,
	pub generation: u64,
}

impl Notice {
	pub fn class(&self) -> String {
		format!("message {}", self.severity.css_class())
	}
}

pub const HIDDEN_NOTICE_CLASS: &str = "message hidden";
