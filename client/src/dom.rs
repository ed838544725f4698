// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use web_sys::{Element, Node};

const ROOT_ELEMENT_ID: &str = "root";

/// The element the application is mounted in, if the page provides one
pub fn app_root() -> Option<Element> {
	web_sys::window()?.document()?.get_element_by_id(ROOT_ELEMENT_ID)
}

/// The node to mount the application in: the root element, or the page body when there isn't one
pub fn mount_point() -> Option<Node> {
	if let Some(root) = app_root() {
		return Some(root.into());
	}
	let body = web_sys::window()?.document()?.body()?;
	Some(body.into())
}
