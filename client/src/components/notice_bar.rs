// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::notice::HIDDEN_NOTICE_CLASS;
use crate::state::AppState;
use gloo_timers::future::TimeoutFuture;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct NoticeBarProps<'a> {
	state: AppState<'a>,
	duration_ms: u32,
}

/// The status region. Each notice hides itself after the configured delay unless a newer notice has replaced it.
#[component]
pub fn NoticeBar<'a, G: Html>(ctx: Scope<'a>, props: NoticeBarProps<'a>) -> View<G> {
	let state = props.state;
	let duration_ms = props.duration_ms;

	create_effect(ctx, move || {
		let Some(generation) = state.notice.get().as_ref().as_ref().map(|notice| notice.generation) else {
			return;
		};
		spawn_local_scoped(ctx, state.expire_notice_after(generation, TimeoutFuture::new(duration_ms)));
	});

	let notice_class = create_memo(ctx, move || match state.notice.get().as_ref() {
		Some(notice) => notice.class(),
		None => String::from(HIDDEN_NOTICE_CLASS),
	});
	let notice_text = create_memo(ctx, move || match state.notice.get().as_ref() {
		Some(notice) => notice.text.clone(),
		None => String::new(),
	});

	view! {
		ctx,
		div(id="message", class=(*notice_class.get()).clone()) {
			(*notice_text.get())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn region_starts_hidden() {
		let html = sycamore::render_to_string(|ctx| {
			let state = AppState::new(ctx);
			view! { ctx, NoticeBar(state=state, duration_ms=4000) }
		});
		assert!(html.contains(r#"id="message""#));
		assert!(html.contains(r#"class="message hidden""#));
	}
}
