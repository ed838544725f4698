// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::ClientConfig;
use crate::error::ValidationError;
use crate::notice::Severity;
use crate::state::AppState;
use crate::transport::EnrollmentService;
use enrollment_shared::messages::activities::ActivityDirectory;
use enrollment_shared::messages::signup::SignupResult;

pub const DIRECTORY_UNAVAILABLE_TEXT: &str = "Could not load activities.";

/// A validated signup form submission
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignupRequest {
	pub email: String,
	pub activity: String,
}

impl SignupRequest {
	/// Checks the raw form values. The email is trimmed; the activity is used exactly as selected.
	///
	/// # Errors
	///
	/// Fails when either value is empty.
	pub fn from_form(email: &str, activity: &str) -> Result<Self, ValidationError> {
		let email = email.trim();
		if email.is_empty() {
			return Err(ValidationError::MissingEmail);
		}
		if activity.is_empty() {
			return Err(ValidationError::MissingActivity);
		}
		Ok(Self {
			email: email.to_string(),
			activity: activity.to_string(),
		})
	}

	/// Text of the notice shown while the request is in flight
	pub fn pending_text(&self) -> String {
		format!("Signing up for {}...", self.activity)
	}
}

/// Loads the directory and runs signups, keeping the page state in step with the service
pub struct SignupFlow<'a> {
	pub state: AppState<'a>,
	service: &'a dyn EnrollmentService,
	config: &'a ClientConfig,
}

impl<'a> SignupFlow<'a> {
	pub fn new(state: AppState<'a>, service: &'a dyn EnrollmentService, config: &'a ClientConfig) -> Self {
		Self { state, service, config }
	}

	/// Loads the directory from the service and shows it. A directory that can't be loaded is shown as empty.
	pub async fn refresh(&self) {
		let ticket = self.state.begin_refresh();
		log::debug!("Starting directory refresh {:?}", ticket);
		let directory = match self.service.list_activities().await {
			Ok(directory) => directory,
			Err(error) => {
				log::warn!("Activity directory unavailable: {}", error);
				if self.config.report_directory_failures {
					self.state.notify(Severity::Error, DIRECTORY_UNAVAILABLE_TEXT);
				}
				ActivityDirectory::new()
			}
		};
		if !self
			.state
			.apply_directory(ticket, &directory, self.config.discard_stale_refreshes)
		{
			log::debug!("Dropped directory from stale refresh {:?}", ticket);
		}
	}

	/// Handles a submission of the signup form.
	pub async fn submit(&self) {
		let email = (*self.state.email.get()).clone();
		let activity = (*self.state.selected_activity.get()).clone();
		let request = match SignupRequest::from_form(&email, &activity) {
			Ok(request) => request,
			Err(error) => {
				log::debug!("Signup form invalid: {:?}", error);
				self.state.notify(Severity::Error, error.to_string());
				return;
			}
		};

		self.state.notify(Severity::Info, request.pending_text());
		match self
			.service
			.register_participant(&request.activity, &request.email)
			.await
		{
			SignupResult::Failure { detail } => {
				log::warn!("Signup for {} was not accepted: {}", request.activity, detail);
				self.state.notify(Severity::Error, detail);
			}
			SignupResult::Success { message } => {
				log::info!("Signup for {} accepted", request.activity);
				self.state.notify(Severity::Success, message);
				self.state.reset_form();
				self.refresh().await;
			}
		}
	}
}
