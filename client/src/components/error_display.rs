// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;

#[derive(Prop)]
pub struct StartupErrorProps {
	message: &'static str,
	error_display: Option<String>,
}

/// Shown in place of the page when the client can't start
#[component]
pub fn StartupErrorView<G: Html>(ctx: Scope, props: StartupErrorProps) -> View<G> {
	if let Some(error_display) = props.error_display {
		return view! {
			ctx,
			div(id="app_error") {
				(props.message)
				br {}
				(error_display)
			}
		};
	}

	view! {
		ctx,
		div(id="app_error") { (props.message) }
	}
}
