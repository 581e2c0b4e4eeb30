use folio_dom::nav::NavMenu;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

mod web_fixture_;
use web_fixture_::{body_with, find, has_class, shell};

#[wasm_bindgen_test]
fn toggle() {
	let document = shell();
	let menu = NavMenu::bind(&document);
	let toggle = find(&document, ".nav-toggle");
	let nav = find(&document, "#site-nav");

	assert!(!menu.is_open());
	assert!(menu.toggle());
	assert_eq!(toggle.get_attribute("aria-expanded").unwrap(), "true");
	assert!(has_class(&nav, "open"));

	assert!(!menu.toggle());
	assert_eq!(toggle.get_attribute("aria-expanded").unwrap(), "false");
	assert!(!has_class(&nav, "open"));
}

#[wasm_bindgen_test]
fn close_is_idempotent() {
	let document = shell();
	let menu = NavMenu::bind(&document);
	menu.toggle();
	menu.close();
	menu.close();
	assert!(!menu.is_open());
	assert!(!has_class(&find(&document, "#site-nav"), "open"));
}

#[wasm_bindgen_test]
fn missing_markup_is_a_no_op() {
	let document = body_with("<main></main>");
	let menu = NavMenu::bind(&document);
	assert!(menu.toggle_element().is_none());
	assert!(!menu.toggle());
	menu.close();
	menu.highlight("home");
	assert!(!menu.is_open());
}
