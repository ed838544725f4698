// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::flow::SignupFlow;
use crate::reconcile::{DirectoryView, SelectOption};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Prop)]
pub struct SignupFormProps<'a> {
	flow: &'a SignupFlow<'a>,
}

#[component]
pub fn SignupForm<'a, G: Html>(ctx: Scope<'a>, props: SignupFormProps<'a>) -> View<G> {
	let flow = props.flow;
	let state = flow.state;

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();
		spawn_local_scoped(ctx, async move {
			flow.submit().await;
		});
	};

	view! {
		ctx,
		form(id="signup-form", on:submit=form_submission_handler) {
			div(class="form-group") {
				label(for="email") { "Student Email:" }
				input(id="email", type="email", placeholder="your-email@mergington.edu", bind:value=state.email)
			}
			div(class="form-group") {
				label(for="activity") { "Select Activity:" }
				select(id="activity", bind:value=state.selected_activity) {
					(activity_options_view(ctx, &state.directory.get()))
				}
			}
			button(type="submit") { "Sign Up" }
		}
	}
}

fn activity_options_view<G: Html>(ctx: Scope<'_>, directory: &DirectoryView) -> View<G> {
	View::new_fragment(
		directory
			.options
			.iter()
			.cloned()
			.map(|entry| select_option_view(ctx, entry))
			.collect(),
	)
}

fn select_option_view<G: Html>(ctx: Scope<'_>, entry: SelectOption) -> View<G> {
	if entry.selectable {
		view! { ctx, option(value=entry.value) { (entry.label) } }
	} else {
		view! { ctx, option(value=entry.value, disabled=true) { (entry.label) } }
	}
}
