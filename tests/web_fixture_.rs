#![allow(dead_code)]

use std::sync::Once;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlBodyElement, Window};

/// A page shell with six routed views. There are intentionally no `#projects` and `#hobbies` sections.
pub const SHELL: &str = r##"
<header>
	<button class="nav-toggle" aria-expanded="false">Menu</button>
	<nav id="site-nav">
		<a href="#home" data-link>Home</a>
		<a href="#about" data-link>About</a>
		<a href="#skills" data-link>Skills</a>
		<a href="#career" data-link>Career</a>
		<a href="#links" data-link>Links</a>
		<a href="#contact" data-link>Contact</a>
		<a href="https://elsewhere.example/" data-link>Elsewhere</a>
	</nav>
</header>
<main>
	<section id="home" class="view" data-route="home">
		<h1>Hello, I’m <span class="accent">Static Name</span></h1>
		<p class="lead">Static lead</p>
		<p class="reveal-on-scroll">Intro</p>
	</section>
	<section id="about" class="view" data-route="about"><p class="reveal-on-scroll">About me</p></section>
	<section id="skills" class="view" data-route="skills"><ul class="chip-list" data-awaits><li>Loading…</li></ul></section>
	<section id="career" class="view" data-route="career"><ol class="timeline" data-awaits></ol></section>
	<section id="links" class="view" data-route="links"><div class="grid" data-awaits></div></section>
	<section id="contact" class="view" data-route="contact"><ul class="contact-list"><li>static@example.com</li></ul></section>
</main>
<footer>© <span id="year"></span></footer>
"##;

pub fn init_logging() {
	static ONCE: Once = Once::new();
	ONCE.call_once(|| {
		let _ = tracing_wasm::try_set_as_global_default();
	});
}

pub fn window_() -> Window {
	window().unwrap()
}

/// Replaces the page body with [`SHELL`] and clears the URL fragment.
pub fn shell() -> Document {
	body_with(SHELL)
}

pub fn body_with(html: &str) -> Document {
	init_logging();
	let document = window_().document().unwrap();
	let body = document.body().unwrap().dyn_into::<HtmlBodyElement>().unwrap();
	body.set_inner_html(html);
	window_().location().set_hash("").unwrap();
	document
}

pub fn find(document: &Document, selector: &str) -> Element {
	document.query_selector(selector).unwrap().unwrap_or_else(|| panic!("Missing {:?}", selector))
}

pub fn has_class(element: &Element, class: &str) -> bool {
	element.class_list().contains(class)
}
