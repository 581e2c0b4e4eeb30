use folio_dom::{
	portfolio::{Contacts, Link, Portfolio, Profile, Skills},
	render::Renderer,
	reveal::RevealController,
};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

mod web_fixture_;
use web_fixture_::{find, has_class, shell};

fn link(title: &str) -> Link {
	Link {
		title: title.to_owned(),
		href: format!("https://example.com/{}", title.len()),
		desc: "A link.".to_owned(),
		image: String::new(),
	}
}

fn links(count: usize) -> Portfolio {
	Portfolio {
		links: (0..count).map(|i| link(&format!("Link {}", i))).collect(),
		..Portfolio::default()
	}
}

#[wasm_bindgen_test]
fn empty_links() {
	let document = shell();
	let renderer = Renderer::new(document.clone(), None);
	let report = renderer.render(&Portfolio::default());
	assert_eq!(report.links, Some(0));
	assert_eq!(find(&document, "#links .grid").child_element_count(), 0);
}

#[wasm_bindgen_test]
fn missing_sections_are_skipped() {
	let document = shell();
	let report = Renderer::new(document, None).render(&links(2));
	assert_eq!(report.works, None);
	assert_eq!(report.hobbies, None);
	assert_eq!(report.links, Some(2));
}

#[wasm_bindgen_test]
fn titles_are_escaped() {
	let document = shell();
	let renderer = Renderer::new(document.clone(), None);
	renderer.render(&Portfolio {
		links: vec![link("<script>alert(1)</script>")],
		..Portfolio::default()
	});

	let grid = find(&document, "#links .grid");
	assert!(grid.inner_html().contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
	assert!(grid.query_selector("script").unwrap().is_none());
	assert_eq!(find(&document, "#links .grid .card-title a").text_content().unwrap(), "<script>alert(1)</script>");
}

#[wasm_bindgen_test]
fn rerender_replaces() {
	let document = shell();
	let renderer = Renderer::new(document.clone(), None);
	renderer.render(&links(3));
	assert_eq!(find(&document, "#links .grid").child_element_count(), 3);

	renderer.render(&links(1));
	assert_eq!(find(&document, "#links .grid").child_element_count(), 1);
}

#[wasm_bindgen_test]
fn rerender_is_idempotent() {
	let document = shell();
	let renderer = Renderer::new(document.clone(), None);
	let portfolio = Portfolio {
		skills: Skills::Flat(vec!["Rust".to_owned(), "TypeScript".to_owned()]),
		..links(2)
	};

	renderer.render(&portfolio);
	let first = document.body().unwrap().inner_html();
	renderer.render(&portfolio);
	assert_eq!(document.body().unwrap().inner_html(), first);
}

#[wasm_bindgen_test]
fn staggered_in_input_order() {
	let document = shell();
	Renderer::new(document.clone(), None).render(&links(3));

	let cards = find(&document, "#links .grid").children();
	for i in 0..3 {
		let card: HtmlElement = cards.item(i).unwrap().dyn_into().unwrap();
		assert_eq!(card.style().get_property_value("--d").unwrap().trim(), format!("{}ms", i * 50));
		assert!(card.inner_html().contains(&format!("Link {}", i)));
	}
}

#[wasm_bindgen_test]
fn fragments_are_registered_for_reveal() {
	let document = shell();
	let reveal = Rc::new(RevealController::new().unwrap());
	let renderer = Renderer::new(document.clone(), Some(Rc::clone(&reveal)));

	let before = reveal.registered();
	renderer.render(&Portfolio {
		skills: Skills::Flat(vec!["Rust".to_owned()]),
		..links(4)
	});
	assert_eq!(reveal.registered() - before, 5);
	assert!(has_class(&find(&document, "#links .grid .card"), "reveal-on-scroll"));
}

#[wasm_bindgen_test]
fn rerendering_releases_replaced_fragments() {
	let document = shell();
	let reveal = Rc::new(RevealController::new().unwrap());
	let renderer = Renderer::new(document.clone(), Some(Rc::clone(&reveal)));

	let portfolio = Portfolio {
		skills: Skills::Flat(vec!["Rust".to_owned()]),
		..links(4)
	};
	renderer.render(&portfolio);
	assert_eq!(reveal.observed(), 5);

	renderer.render(&portfolio);
	renderer.render(&links(2));
	assert_eq!(reveal.observed(), 2);
	assert_eq!(reveal.registered(), 12);
}

#[wasm_bindgen_test]
fn without_reveal_fragments_are_visible() {
	let document = shell();
	Renderer::new(document.clone(), None).render(&links(1));
	assert!(has_class(&find(&document, "#links .grid .card"), "reveal"));
}

#[wasm_bindgen_test]
fn absent_profile_keeps_static_hero() {
	let document = shell();
	let before = find(&document, "#home h1").inner_html();
	Renderer::new(document.clone(), None).render(&links(1));
	assert_eq!(find(&document, "#home h1").inner_html(), before);
	assert_eq!(find(&document, "#contact .contact-list").text_content().unwrap(), "static@example.com");
}

#[wasm_bindgen_test]
fn profile() {
	let document = shell();
	let report = Renderer::new(document.clone(), None).render(&Portfolio {
		profile: Some(Profile {
			name: "Ada <Lovelace>".to_owned(),
			title: String::new(),
			summary: "Notes on engines.".to_owned(),
			contacts: Contacts {
				email: "ada@example.com".to_owned(),
				github: String::new(),
				linkedin: "https://www.linkedin.com/in/ada".to_owned(),
			},
		}),
		..Portfolio::default()
	});

	assert_eq!(find(&document, "#home h1 .accent").text_content().unwrap(), "Ada <Lovelace>");
	assert_eq!(find(&document, "#home .lead").text_content().unwrap(), "Software Developer — Notes on engines.");

	assert_eq!(report.contacts, Some(2));
	let mail = find(&document, "#contact .contact-list li:first-child a");
	assert_eq!(mail.get_attribute("href").unwrap(), "mailto:ada@example.com");
	assert!(mail.get_attribute("target").is_none());
	let linkedin = find(&document, "#contact .contact-list li:last-child a");
	assert_eq!(linkedin.text_content().unwrap(), "LinkedIn");
	assert_eq!(linkedin.get_attribute("rel").unwrap(), "noopener");
}

#[wasm_bindgen_test]
fn failure_flags_awaiting_sections() {
	let document = shell();
	let renderer = Renderer::new(document.clone(), None);
	assert_eq!(renderer.mark_failed(), 3);
	assert_eq!(find(&document, "#career .timeline").get_attribute("data-state").unwrap(), "error");

	renderer.render(&links(1));
	assert!(find(&document, "#links .grid").get_attribute("data-state").is_none());
}
