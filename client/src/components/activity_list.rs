// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::reconcile::{ActivityCard, CardList, DirectoryView, Roster, NO_ACTIVITIES_TEXT, NO_PARTICIPANTS_TEXT};
use sycamore::prelude::*;

const EMPTY_ROSTER_STYLE: &str = "list-style: none; opacity: 0.7; background: transparent; padding: 0; border: none;";

#[derive(Prop)]
pub struct ActivityCardsProps<'a> {
	directory: &'a ReadSignal<DirectoryView>,
}

/// The list of activity cards. Its whole content is discarded and built again every time the directory changes.
#[component]
pub fn ActivityCards<'a, G: Html>(ctx: Scope<'a>, props: ActivityCardsProps<'a>) -> View<G> {
	let directory = props.directory;

	view! {
		ctx,
		div(id="activities-list") {
			(match &directory.get().cards {
				CardList::NoActivities => view! { ctx, p(class="no-activities") { (NO_ACTIVITIES_TEXT) } },
				CardList::Cards(cards) => View::new_fragment(
					cards.iter().cloned().map(|card| activity_card_view(ctx, card)).collect()
				),
			})
		}
	}
}

fn activity_card_view<G: Html>(ctx: Scope<'_>, card: ActivityCard) -> View<G> {
	let roster = roster_view(ctx, card.roster);

	view! {
		ctx,
		div(class="activity-card") {
			h4(class="activity-name") { (card.name) }
			p(class="activity-desc") { (card.description) }
			p(class="activity-schedule") {
				strong { "Schedule:" }
				" "
				(card.schedule)
			}
			div(class="participants") {
				h5 { "Participants" }
				ul(class="participants-list") { (roster) }
			}
		}
	}
}

fn roster_view<G: Html>(ctx: Scope<'_>, roster: Roster) -> View<G> {
	match roster {
		Roster::Empty => view! {
			ctx,
			li(class="participants-empty", style=EMPTY_ROSTER_STYLE) { (NO_PARTICIPANTS_TEXT) }
		},
		Roster::Participants(participants) => View::new_fragment(
			participants
				.into_iter()
				.map(|participant| view! { ctx, li(class="participant") { (participant) } })
				.collect(),
		),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use enrollment_shared::messages::activities::ActivityDirectory;

	fn render(json: &str) -> String {
		let directory: ActivityDirectory = serde_json::from_str(json).unwrap();
		let view = DirectoryView::from_directory(&directory);
		sycamore::render_to_string(|ctx| {
			let directory = create_signal(ctx, view);
			view! { ctx, ActivityCards(directory=directory) }
		})
	}

	#[test]
	fn empty_directory_shows_one_notice_and_no_cards() {
		let html = render("{}");
		assert_eq!(html.matches(NO_ACTIVITIES_TEXT).count(), 1);
		assert!(!html.contains("activity-card"));
	}

	#[test]
	fn empty_roster_shows_one_unbulleted_placeholder() {
		let html = render(r#"{"Chess Club":{"participants":[]}}"#);
		assert_eq!(html.matches(NO_PARTICIPANTS_TEXT).count(), 1);
		assert!(html.contains("list-style: none"));
		assert_eq!(html.matches("class=\"participant\"").count(), 0);
	}

	#[test]
	fn participants_render_in_order() {
		let html = render(r#"{"Chess Club":{"participants":["a@x.com","b@x.com"]}}"#);
		assert_eq!(html.matches("class=\"participant\"").count(), 2);
		let first = html.find("a@x.com").unwrap();
		let second = html.find("b@x.com").unwrap();
		assert!(first < second);
		assert!(!html.contains(NO_PARTICIPANTS_TEXT));
	}

	#[test]
	fn card_shows_name_description_and_schedule() {
		let html = render(r#"{"Chess Club":{"description":"Learn chess","schedule":"Fridays"}}"#);
		assert_eq!(html.matches("class=\"activity-card\"").count(), 1);
		assert!(html.contains("Chess Club"));
		assert!(html.contains("Learn chess"));
		assert!(html.contains("Schedule:"));
		assert!(html.contains("Fridays"));
	}

	#[test]
	fn rendering_twice_gives_identical_markup() {
		let json = r#"{"Chess Club":{"participants":["a@x.com"]},"Drama":{}}"#;
		assert_eq!(render(json), render(json));
	}
}
