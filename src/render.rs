//! Projects a [`Portfolio`] onto the page shell.
//!
//! List sections are emptied and refilled on every pass, one element per item in input order.
//! Sections whose container is missing from the markup are skipped.

use crate::{
	fragment::{self, Fragment, STAGGER_PROPERTY},
	portfolio::{Contacts, Portfolio, Profile, Skills},
	reveal::{RevealController, REVEALED_CLASS, REVEAL_SELECTOR},
};
use std::rc::Rc;
use tracing::{debug, error, info, instrument, trace_span, warn};
use wasm_bindgen::JsCast;

pub const HERO_HEADING: &str = "#home h1";
pub const HERO_LEAD: &str = "#home .lead";
pub const CONTACT_LIST: &str = "#contact .contact-list";
pub const SKILL_LIST: &str = "#skills .chip-list";
pub const WORK_GRID: &str = "#projects .grid, #works .grid";
pub const CAREER_LIST: &str = "#career .timeline";
pub const LINK_GRID: &str = "#links .grid";
pub const HOBBY_LIST: &str = "#hobbies .chip-list";

/// Sections waiting for data carry this attribute; failures set their `data-state` to `error`.
pub const AWAITS_ATTRIBUTE: &str = "data-awaits";

/// Fragment counts per section after a render pass. `None` means the section was left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderReport {
	pub contacts: Option<usize>,
	pub skills: Option<usize>,
	pub works: Option<usize>,
	pub careers: Option<usize>,
	pub links: Option<usize>,
	pub hobbies: Option<usize>,
}

#[derive(Debug)]
pub struct Renderer {
	document: web_sys::Document,
	reveal: Option<Rc<RevealController>>,
}

impl Renderer {
	/// Without a reveal controller, fragments are inserted already revealed.
	#[must_use]
	pub fn new(document: web_sys::Document, reveal: Option<Rc<RevealController>>) -> Self {
		Self { document, reveal }
	}

	/// Renders every section of `portfolio`. Rendering the same portfolio again produces the same DOM.
	#[instrument(skip(self, portfolio))]
	pub fn render(&self, portfolio: &Portfolio) -> RenderReport {
		#[cfg(feature = "dangerous-logging")]
		tracing::trace!(?portfolio, "Rendering portfolio.");

		let mut report = RenderReport::default();
		if let Some(profile) = &portfolio.profile {
			self.render_hero(profile);
			report.contacts = self.render_contacts(&profile.contacts);
		} else {
			debug!("No profile. Leaving hero and contacts as they are.");
		}

		report.skills = match &portfolio.skills {
			Skills::Flat(items) => self.render_list("skills", SKILL_LIST, items.iter().map(|skill| fragment::skill_chip(skill))),
			Skills::Categorized(groups) => self.render_list("skills", SKILL_LIST, groups.iter().map(fragment::skill_group)),
		};
		report.works = self.render_list("works", WORK_GRID, portfolio.works.iter().map(fragment::work_card));
		report.careers = self.render_list("careers", CAREER_LIST, portfolio.careers.iter().map(fragment::career_entry));
		report.links = self.render_list("links", LINK_GRID, portfolio.links.iter().map(fragment::link_card));
		report.hobbies = self.render_list("hobbies", HOBBY_LIST, portfolio.hobbies.iter().map(fragment::hobby_item));

		info!(?report, "Rendered portfolio.");
		report
	}

	fn render_hero(&self, profile: &Profile) {
		let span = trace_span!("render_hero");
		let _enter = span.enter();

		if let Some(heading) = self.find(HERO_HEADING) {
			heading.set_inner_html(&fragment::hero_heading(&profile.name));
		}
		if let Some(lead) = self.find(HERO_LEAD) {
			lead.set_text_content(Some(&fragment::hero_lead(&profile.title, &profile.summary)));
		}
	}

	fn render_contacts(&self, contacts: &Contacts) -> Option<usize> {
		let span = trace_span!("render_contacts");
		let _enter = span.enter();

		let list = self.find(CONTACT_LIST)?;
		list.set_inner_html("");

		let entries = [
			(contacts.email.as_str(), "mailto:", contacts.email.as_str()),
			(contacts.github.as_str(), "", "GitHub"),
			(contacts.linkedin.as_str(), "", "LinkedIn"),
		];
		let mut count = 0;
		for &(value, scheme, label) in &entries {
			if value.is_empty() {
				continue;
			}
			match self.contact_item(&format!("{}{}", scheme, value), label, scheme.is_empty()) {
				Ok(item) => {
					if let Err(error) = list.append_child(&item) {
						error!("Failed to insert contact: {:?}", error);
						continue;
					}
					count += 1;
				}
				Err(error) => error!("Failed to create contact: {:?}", error),
			}
		}
		Some(count)
	}

	fn contact_item(&self, href: &str, label: &str, external: bool) -> Result<web_sys::Element, wasm_bindgen::JsValue> {
		let anchor = self.document.create_element("a")?;
		anchor.set_attribute("href", href)?;
		anchor.set_text_content(Some(label));
		if external {
			anchor.set_attribute("target", "_blank")?;
			anchor.set_attribute("rel", "noopener")?;
		}
		let item = self.document.create_element("li")?;
		item.append_child(&anchor)?;
		Ok(item)
	}

	/// Replaces the children of the first element matching `selector` with `fragments`.
	///
	/// Each inserted element gets its stagger delay and is registered for reveal before the next one is built.
	fn render_list(&self, section: &'static str, selector: &str, fragments: impl Iterator<Item = Fragment>) -> Option<usize> {
		let span = trace_span!("render_list", section);
		let _enter = span.enter();

		let container = match self.find(selector) {
			Some(container) => container,
			None => {
				debug!("No container for {} ({:?}). Skipping.", section, selector);
				return None;
			}
		};
		if let Some(reveal) = &self.reveal {
			release(reveal, &container);
		}
		container.set_inner_html("");
		if let Err(error) = container.remove_attribute("data-state") {
			warn!("Could not clear the state of {}: {:?}", section, error);
		}

		let mut count = 0;
		for (i, fragment) in fragments.enumerate() {
			let element = match self.create_fragment(&fragment, i) {
				Ok(element) => element,
				Err(error) => {
					error!("Failed to create <{}> for {}: {:?}", fragment.tag, section, error);
					continue;
				}
			};
			if let Err(error) = container.append_child(&element) {
				error!("Failed to insert <{}> for {}: {:?}", fragment.tag, section, error);
				continue;
			}
			match &self.reveal {
				Some(reveal) => reveal.observe(&element),
				None => {
					if let Err(error) = element.class_list().add_1(REVEALED_CLASS) {
						warn!("Could not reveal <{}> for {}: {:?}", fragment.tag, section, error);
					}
				}
			}
			count += 1;
		}
		Some(count)
	}

	fn create_fragment(&self, fragment: &Fragment, index: usize) -> Result<web_sys::Element, wasm_bindgen::JsValue> {
		let element = self.document.create_element(fragment.tag)?;
		element.set_class_name(fragment.class);
		element.set_inner_html(&fragment.html);
		if let Some(html_element) = element.dyn_ref::<web_sys::HtmlElement>() {
			html_element.style().set_property(STAGGER_PROPERTY, &fragment::stagger(index))?;
		}
		Ok(element)
	}

	fn find(&self, selector: &str) -> Option<web_sys::Element> {
		match self.document.query_selector(selector) {
			Ok(element) => element,
			Err(error) => {
				warn!("Invalid selector {:?}: {:?}", selector, error);
				None
			}
		}
	}

	/// Flags every section still waiting for data as failed. Returns how many were flagged.
	#[instrument(skip(self))]
	pub fn mark_failed(&self) -> usize {
		let nodes = match self.document.query_selector_all(&format!("[{}]", AWAITS_ATTRIBUTE)) {
			Ok(nodes) => nodes,
			Err(error) => {
				warn!("Could not query awaiting sections: {:?}", error);
				return 0;
			}
		};
		let mut count = 0;
		for i in 0..nodes.length() {
			if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
				if element.set_attribute("data-state", "error").is_ok() {
					count += 1;
				}
			}
		}
		count
	}
}

/// Stops watching the reveal targets below `container` ahead of replacing its content.
fn release(reveal: &RevealController, container: &web_sys::Element) {
	let nodes = match container.query_selector_all(REVEAL_SELECTOR) {
		Ok(nodes) => nodes,
		Err(error) => {
			warn!("Could not query old reveal targets: {:?}", error);
			return;
		}
	};
	for i in 0..nodes.length() {
		if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
			reveal.unobserve(&element);
		}
	}
}
