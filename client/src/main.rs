// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use app::App;
use components::error_display::StartupErrorView;
use config::ClientConfig;
use dom::mount_point;
use sycamore::prelude::*;

mod app;
mod components;
mod config;
mod dom;
mod error;
mod flow;
mod notice;
mod reconcile;
mod state;
mod transport;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	let Some(mount_node) = mount_point() else {
		log::error!("No element is available to mount the page in");
		return;
	};

	match ClientConfig::from_page() {
		Ok(config) => {
			log::debug!("Starting with activity service at {}", config.endpoints.list());
			sycamore::render_to(|ctx| view! { ctx, App(config=config) }, &mount_node);
		}
		Err(error) => {
			log::error!("Failed to read client configuration: {}", error);
			let error_display = Some(error.to_string());
			sycamore::render_to(
				|ctx| {
					view! {
						ctx,
						StartupErrorView(message="Unable to load activities: the page is misconfigured.", error_display=error_display)
					}
				},
				&mount_node,
			);
		}
	}
}
