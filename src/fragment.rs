//! Markup for the per-item fragments of list sections.
//!
//! Each function returns the inner HTML of one fragment element. Interpolated strings are escaped with
//! [`escape_html`] in body context and [`escape_attr`] inside attribute values.

use crate::{
	escape::{escape_attr, escape_html},
	portfolio::{Career, Hobby, Link, SkillGroup, Work},
};
use std::fmt::Write as _;

/// Delay between the entrance animations of consecutive fragments.
pub const STAGGER_STEP_MS: usize = 50;

/// CSS custom property carrying the entrance animation delay.
pub const STAGGER_PROPERTY: &str = "--d";

pub const PLACEHOLDER_NAME: &str = "Your Name";
pub const PLACEHOLDER_TITLE: &str = "Software Developer";

/// Describes one element to create for a list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
	pub tag: &'static str,
	pub class: &'static str,
	pub html: String,
}

/// Value of [`STAGGER_PROPERTY`] for the fragment at zero-based `index`.
#[must_use]
pub fn stagger(index: usize) -> String {
	format!("{}ms", index * STAGGER_STEP_MS)
}

/// Inner HTML of the hero heading.
#[must_use]
pub fn hero_heading(name: &str) -> String {
	let name = if name.is_empty() { PLACEHOLDER_NAME } else { name };
	format!("Hello, I’m <span class=\"accent\">{}</span>", escape_html(name))
}

/// Plain text of the hero lead paragraph.
#[must_use]
pub fn hero_lead(title: &str, summary: &str) -> String {
	let title = if title.is_empty() { PLACEHOLDER_TITLE } else { title };
	if summary.is_empty() {
		title.to_owned()
	} else {
		format!("{} — {}", title, summary)
	}
}

#[must_use]
pub fn skill_chip(skill: &str) -> Fragment {
	Fragment {
		tag: "li",
		class: "chip reveal-on-scroll",
		html: escape_html(skill).into_owned(),
	}
}

#[must_use]
pub fn skill_group(group: &SkillGroup) -> Fragment {
	let mut html = String::new();
	if !group.category.is_empty() {
		let _ = write!(html, "<h3 class=\"chip-group-title\">{}</h3>", escape_html(&group.category));
	}
	html.push_str("<ul class=\"chip-list\">");
	for item in &group.items {
		let _ = write!(html, "<li class=\"chip\">{}</li>", escape_html(item));
	}
	html.push_str("</ul>");
	Fragment { tag: "li", class: "chip-group reveal-on-scroll", html }
}

#[must_use]
pub fn work_card(work: &Work) -> Fragment {
	let mut html = format!(
		"<div class=\"card-body\"><h3 class=\"card-title\">{}</h3><p class=\"card-text\">{}</p></div><div class=\"card-actions\">",
		escape_html(&work.title),
		escape_html(&work.desc),
	);
	if !work.live.is_empty() {
		let _ = write!(html, "<a class=\"btn small\" href=\"{}\" target=\"_blank\" rel=\"noopener\">Live</a>", escape_attr(&work.live));
	}
	if !work.code.is_empty() {
		let _ = write!(html, "<a class=\"btn small ghost\" href=\"{}\" target=\"_blank\" rel=\"noopener\">Code</a>", escape_attr(&work.code));
	}
	html.push_str("</div>");
	Fragment { tag: "article", class: "card reveal-on-scroll", html }
}

#[must_use]
pub fn career_entry(career: &Career) -> Fragment {
	let mut html = String::new();
	if !career.period.is_empty() {
		let _ = write!(html, "<p class=\"timeline-period\">{}</p>", escape_html(&career.period));
	}
	let _ = write!(html, "<h3 class=\"timeline-title\">{}</h3>", escape_html(&career.title));
	if !career.industry.is_empty() {
		let _ = write!(html, "<p class=\"timeline-industry\">{}</p>", escape_html(&career.industry));
	}
	if !career.description.is_empty() {
		let _ = write!(html, "<p class=\"timeline-text\">{}</p>", escape_html(&career.description));
	}
	tag_list(&mut html, "languages", &career.languages);
	tag_list(&mut html, "tools", &career.tools);
	Fragment { tag: "li", class: "timeline-item reveal-on-scroll", html }
}

fn tag_list(html: &mut String, kind: &str, tags: &[String]) {
	if tags.is_empty() {
		return;
	}
	let _ = write!(html, "<ul class=\"chip-list {}\">", kind);
	for tag in tags {
		let _ = write!(html, "<li class=\"chip small\">{}</li>", escape_html(tag));
	}
	html.push_str("</ul>");
}

#[must_use]
pub fn link_card(link: &Link) -> Fragment {
	let mut html = String::new();
	if !link.image.is_empty() {
		let _ = write!(html, "<img class=\"card-image\" src=\"{}\" alt=\"\" loading=\"lazy\">", escape_attr(&link.image));
	}
	html.push_str("<div class=\"card-body\"><h3 class=\"card-title\">");
	let title = if link.title.is_empty() { &link.href } else { &link.title };
	if link.href.is_empty() {
		html.push_str(&escape_html(title));
	} else {
		let _ = write!(html, "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>", escape_attr(&link.href), escape_html(title));
	}
	html.push_str("</h3>");
	if !link.desc.is_empty() {
		let _ = write!(html, "<p class=\"card-text\">{}</p>", escape_html(&link.desc));
	}
	html.push_str("</div>");
	Fragment { tag: "article", class: "card reveal-on-scroll", html }
}

#[must_use]
pub fn hobby_item(hobby: &Hobby) -> Fragment {
	let mut html = String::new();
	if !hobby.image.is_empty() {
		let _ = write!(html, "<img src=\"{}\" alt=\"\" loading=\"lazy\">", escape_attr(&hobby.image));
	}
	let _ = write!(html, "<span class=\"hobby-title\">{}</span>", escape_html(&hobby.title));
	if !hobby.desc.is_empty() {
		let _ = write!(html, "<span class=\"hobby-text\">{}</span>", escape_html(&hobby.desc));
	}
	Fragment { tag: "li", class: "chip hobby reveal-on-scroll", html }
}
