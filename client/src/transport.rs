// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::{ConfigError, FetchError};
use async_trait::async_trait;
use enrollment_shared::messages::activities::ActivityDirectory;
use enrollment_shared::messages::signup::{SignupResponseBody, SignupResult};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use url::Url;

pub const DEFAULT_SIGNUP_SUCCESS: &str = "Signed up successfully!";
pub const DEFAULT_SIGNUP_FAILURE: &str = "Signup failed";
pub const SIGNUP_REQUEST_FAILED: &str = "Signup request failed.";

/// The two operations the page performs against the enrollment service
#[async_trait(?Send)]
pub trait EnrollmentService {
	/// Reads the full activity directory.
	async fn list_activities(&self) -> Result<ActivityDirectory, FetchError>;

	/// Registers an email for an activity. Every kind of failure is reported in the result; this never fails on its
	/// own.
	async fn register_participant(&self, activity_name: &str, email: &str) -> SignupResult;
}

/// Addresses of the service endpoints, all derived from the activities collection address
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActivityEndpoints {
	base: Url,
}

impl ActivityEndpoints {
	/// # Errors
	///
	/// Fails for addresses that can't have path segments appended (e.g. `mailto:` or `data:` URLs).
	pub fn new(base: Url) -> Result<Self, ConfigError> {
		if base.cannot_be_a_base() {
			return Err(ConfigError::CannotBeBase(base.to_string()));
		}
		Ok(Self { base })
	}

	pub fn list(&self) -> Url {
		self.base.clone()
	}

	/// The signup action for an activity. The activity name becomes a single encoded path segment and the email an
	/// encoded query value.
	pub fn signup(&self, activity_name: &str, email: &str) -> Url {
		let mut url = self.base.clone();
		url.set_query(None);
		if let Ok(mut segments) = url.path_segments_mut() {
			segments.pop_if_empty().push(activity_name).push("signup");
		}
		url.query_pairs_mut().append_pair("email", email);
		url
	}
}

fn is_success_status(status: u16) -> bool {
	(200..300).contains(&status)
}

fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, serde_json::Error> {
	serde_json::from_str(body)
}

/// Turns a response to the activity list request into a directory.
///
/// # Errors
///
/// Fails on a non-success status or a body that isn't an activity map.
pub fn parse_directory_response(status: u16, body: &str) -> Result<ActivityDirectory, FetchError> {
	if !is_success_status(status) {
		return Err(FetchError::Status(status));
	}
	Ok(decode_json(body)?)
}

/// Turns a response to a signup request into a signup result. Bodies that can't be read as a signup response fall
/// back to the generic message for the status.
pub fn interpret_signup_response(status: u16, body: &str) -> SignupResult {
	let body: SignupResponseBody = decode_json(body).unwrap_or_default();
	if is_success_status(status) {
		let message = body.message().unwrap_or(DEFAULT_SIGNUP_SUCCESS);
		SignupResult::Success {
			message: message.to_string(),
		}
	} else {
		let detail = body.detail().or(body.message()).unwrap_or(DEFAULT_SIGNUP_FAILURE);
		SignupResult::Failure {
			detail: detail.to_string(),
		}
	}
}

/// The enrollment service as reached over HTTP from the browser
pub struct HttpEnrollmentService {
	endpoints: ActivityEndpoints,
}

impl HttpEnrollmentService {
	pub fn new(endpoints: ActivityEndpoints) -> Self {
		Self { endpoints }
	}
}

#[async_trait(?Send)]
impl EnrollmentService for HttpEnrollmentService {
	async fn list_activities(&self) -> Result<ActivityDirectory, FetchError> {
		let url = self.endpoints.list();
		log::debug!("Requesting activity list from {}", url);
		let response = Request::get(url.as_str()).send().await?;
		let status = response.status();
		if !response.ok() {
			return Err(FetchError::Status(status));
		}
		let body = response.text().await?;
		parse_directory_response(status, &body)
	}

	async fn register_participant(&self, activity_name: &str, email: &str) -> SignupResult {
		let url = self.endpoints.signup(activity_name, email);
		log::debug!("Sending signup request to {}", url);
		let response = match Request::post(url.as_str()).send().await {
			Ok(response) => response,
			Err(error) => {
				log::warn!("Signup request for {} failed: {}", activity_name, error);
				return SignupResult::Failure {
					detail: String::from(SIGNUP_REQUEST_FAILED),
				};
			}
		};
		let status = response.status();
		let body = match response.text().await {
			Ok(body) => body,
			Err(error) => {
				log::warn!("Couldn't read signup response body: {}", error);
				String::new()
			}
		};
		interpret_signup_response(status, &body)
	}
}
