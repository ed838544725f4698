// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::notice::{Notice, Severity};
use crate::reconcile::DirectoryView;
use enrollment_shared::messages::activities::ActivityDirectory;
use std::cell::Cell;
use std::future::Future;
use sycamore::prelude::*;

/// Identifies one directory refresh. Later refreshes get larger tickets.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct RefreshTicket(u64);

/// All of the page's mutable state. Every reader and writer gets it explicitly from the root component.
#[derive(Clone, Copy)]
pub struct AppState<'a> {
	/// What the activity list and selector currently show
	pub directory: &'a Signal<DirectoryView>,
	/// The notice in the status region, if one is showing
	pub notice: &'a Signal<Option<Notice>>,
	pub email: &'a Signal<String>,
	pub selected_activity: &'a Signal<String>,
	notice_generation: &'a Cell<u64>,
	refreshes_issued: &'a Cell<u64>,
	newest_applied: &'a Cell<Option<RefreshTicket>>,
}

impl<'a> AppState<'a> {
	pub fn new(ctx: Scope<'a>) -> Self {
		Self {
			directory: create_signal(ctx, DirectoryView::default()),
			notice: create_signal(ctx, None),
			email: create_signal(ctx, String::new()),
			selected_activity: create_signal(ctx, String::new()),
			notice_generation: create_ref(ctx, Cell::new(0)),
			refreshes_issued: create_ref(ctx, Cell::new(0)),
			newest_applied: create_ref(ctx, Cell::new(None)),
		}
	}

	/// Shows a notice, replacing whatever was in the status region.
	pub fn notify(&self, severity: Severity, text: impl Into<String>) {
		let generation = self.notice_generation.get() + 1;
		self.notice_generation.set(generation);
		self.notice.set(Some(Notice {
			text: text.into(),
			severity,
			generation,
		}));
	}

	/// Hides the notice of the given generation. Does nothing if a newer notice has been shown since.
	pub fn expire_notice(&self, generation: u64) {
		let is_current = matches!(self.notice.get().as_ref(), Some(notice) if notice.generation == generation);
		if is_current {
			self.notice.set(None);
		}
	}

	/// Waits for `delay` to finish, then hides the notice of the given generation unless it has been replaced.
	pub async fn expire_notice_after(self, generation: u64, delay: impl Future<Output = ()>) {
		delay.await;
		self.expire_notice(generation);
	}

	pub fn reset_form(&self) {
		self.email.set(String::new());
		self.selected_activity.set(String::new());
	}

	pub fn begin_refresh(&self) -> RefreshTicket {
		let number = self.refreshes_issued.get() + 1;
		self.refreshes_issued.set(number);
		RefreshTicket(number)
	}

	/// Replaces everything shown for the directory with a fresh rendering of the given snapshot. The selector goes
	/// back to its placeholder.
	///
	/// When `discard_stale` is set, a snapshot from a refresh older than one already shown is dropped and `false` is
	/// returned. Otherwise the last snapshot to arrive is what remains visible.
	pub fn apply_directory(&self, ticket: RefreshTicket, directory: &ActivityDirectory, discard_stale: bool) -> bool {
		if discard_stale && matches!(self.newest_applied.get(), Some(newest) if newest > ticket) {
			return false;
		}
		if self.newest_applied.get().map_or(true, |newest| ticket > newest) {
			self.newest_applied.set(Some(ticket));
		}

		self.directory.set(DirectoryView::from_directory(directory));
		// Set after the options are rebuilt so the select element shows the placeholder again.
		self.selected_activity.set(String::new());
		true
	}
}
