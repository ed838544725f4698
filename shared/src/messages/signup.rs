// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Response body from the service for a signup request. Successful responses carry a message; rejections usually
/// carry a detail and sometimes only a message.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SignupResponseBody {
	#[serde(default)]
	pub message: Option<String>,
	#[serde(default)]
	pub detail: Option<String>,
}

impl SignupResponseBody {
	pub fn message(&self) -> Option<&str> {
		non_empty(self.message.as_deref())
	}

	pub fn detail(&self) -> Option<&str> {
		non_empty(self.detail.as_deref())
	}
}

fn non_empty(text: Option<&str>) -> Option<&str> {
	text.filter(|text| !text.is_empty())
}

/// The outcome of a signup attempt
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SignupResult {
	Success { message: String },
	Failure { detail: String },
}
