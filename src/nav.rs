//! The collapsible site menu.
//!
//! Two states, toggled by the menu control. The router may close the menu after navigating, but this type
//! knows nothing about routes beyond highlighting the matching anchor.

use tracing::{instrument, trace, warn};
use wasm_bindgen::JsCast;

pub const MENU_ID: &str = "site-nav";
pub const TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const OPEN_CLASS: &str = "open";
pub const HIGHLIGHT_CLASS: &str = "active";

/// Handles to the menu control and the menu. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct NavMenu {
	toggle: Option<web_sys::Element>,
	menu: Option<web_sys::Element>,
}

impl NavMenu {
	/// Finds the menu control and the menu. Either may be absent, which turns the respective operations into no-ops.
	#[must_use]
	#[instrument(skip(document))]
	pub fn bind(document: &web_sys::Document) -> Self {
		let toggle = document.query_selector(TOGGLE_SELECTOR).ok().flatten();
		let menu = document.get_element_by_id(MENU_ID);
		trace!(toggle = toggle.is_some(), menu = menu.is_some(), "Bound navigation menu.");
		Self { toggle, menu }
	}

	/// The menu control, for attaching the click listener.
	#[must_use]
	pub fn toggle_element(&self) -> Option<&web_sys::Element> {
		self.toggle.as_ref()
	}

	/// Reads the state from the control's `aria-expanded` attribute.
	#[must_use]
	pub fn is_open(&self) -> bool {
		self.toggle.as_ref().and_then(|toggle| toggle.get_attribute("aria-expanded")).map_or(false, |expanded| expanded == "true")
	}

	/// Flips the menu state and returns the new one.
	///
	/// Without a menu control there is no state to flip, and the menu stays closed.
	#[instrument(skip(self))]
	pub fn toggle(&self) -> bool {
		self.set_open(!self.is_open());
		self.is_open()
	}

	pub fn close(&self) {
		self.set_open(false);
	}

	fn set_open(&self, open: bool) {
		if let Some(toggle) = &self.toggle {
			if let Err(error) = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" }) {
				warn!("Could not set `aria-expanded`: {:?}", error);
			}
		}
		if let Some(menu) = &self.menu {
			if let Err(error) = menu.class_list().toggle_with_force(OPEN_CLASS, open) {
				warn!("Could not toggle menu class: {:?}", error);
			}
		}
	}

	/// Marks the menu anchors pointing at `#route`, and unmarks all others.
	#[instrument(skip(self))]
	pub fn highlight(&self, route: &str) {
		let menu = match &self.menu {
			Some(menu) => menu,
			None => return,
		};
		let anchors = match menu.query_selector_all("a") {
			Ok(anchors) => anchors,
			Err(error) => return warn!("Could not query menu anchors: {:?}", error),
		};
		for i in 0..anchors.length() {
			let anchor = match anchors.item(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
				Some(anchor) => anchor,
				None => continue,
			};
			let href = anchor.get_attribute("href").unwrap_or_default();
			let target = href.strip_prefix('#').unwrap_or(&href);
			if let Err(error) = anchor.class_list().toggle_with_force(HIGHLIGHT_CLASS, target == route) {
				warn!("Could not toggle anchor highlight: {:?}", error);
			}
		}
	}
}
