// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::activity_list::ActivityCards;
use crate::components::notice_bar::NoticeBar;
use crate::components::signup_form::SignupForm;
use crate::config::ClientConfig;
use crate::flow::SignupFlow;
use crate::state::AppState;
use crate::transport::{EnrollmentService, HttpEnrollmentService};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct AppProps {
	config: ClientConfig,
}

#[component]
pub fn App<'a, G: Html>(ctx: Scope<'a>, props: AppProps) -> View<G> {
	let config = create_ref(ctx, props.config);
	let service: &dyn EnrollmentService = create_ref(ctx, HttpEnrollmentService::new(config.endpoints.clone()));
	let state = AppState::new(ctx);
	let flow = create_ref(ctx, SignupFlow::new(state, service, config));

	spawn_local_scoped(ctx, async move {
		flow.refresh().await;
	});

	view! {
		ctx,
		header {
			h1 { "Mergington High School" }
			h2 { "Extracurricular Activities" }
		}
		main {
			section(id="activities-container") {
				h3 { "Available Activities" }
				ActivityCards(directory=state.directory)
			}
			section(id="signup-container") {
				h3 { "Sign Up for an Activity" }
				SignupForm(flow=flow)
				NoticeBar(state=state, duration_ms=config.notice_duration_ms)
			}
		}
	}
}
