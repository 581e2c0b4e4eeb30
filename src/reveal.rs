//! One-shot reveal transitions for elements scrolling into view.

use js_sys::Array;
use std::{cell::Cell, rc::Rc};
use tracing::{instrument, trace, trace_span, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

pub const REVEAL_SELECTOR: &str = ".reveal-on-scroll";
pub const REVEALED_CLASS: &str = "reveal";
pub const ROOT_MARGIN: &str = "-10% 0px -10% 0px";
pub const THRESHOLD: f64 = 0.05;

#[derive(Debug, Default)]
struct Counters {
	registered: Cell<usize>,
	revealed: Cell<usize>,
	released: Cell<usize>,
}

/// Owns the [***IntersectionObserver***](https://developer.mozilla.org/en-US/docs/Web/API/IntersectionObserver)
/// that reveals elements, and the closure backing it.
///
/// Elements may be registered at any time, including after rendering inserted them.
/// Dropping the controller disconnects the observer.
#[derive(Debug)]
pub struct RevealController {
	observer: web_sys::IntersectionObserver,
	_callback: Closure<dyn FnMut(Array, web_sys::IntersectionObserver)>,
	counters: Rc<Counters>,
}

impl RevealController {
	/// # Errors
	///
	/// Iff the browser refuses to construct the observer (for example when it lacks `IntersectionObserver`).
	#[instrument]
	pub fn new() -> Result<Self, JsValue> {
		let counters = Rc::new(Counters::default());
		let callback = Closure::wrap(Box::new({
			let counters = Rc::clone(&counters);
			move |entries: Array, observer: web_sys::IntersectionObserver| {
				let revealed = reveal_entries(&entries, &observer);
				counters.revealed.set(counters.revealed.get() + revealed);
			}
		}) as Box<dyn FnMut(Array, web_sys::IntersectionObserver)>);

		let options = web_sys::IntersectionObserverInit::new();
		options.set_root_margin(ROOT_MARGIN);
		options.set_threshold(&JsValue::from_f64(THRESHOLD));
		let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

		Ok(Self { observer, _callback: callback, counters })
	}

	/// Starts watching `element`.
	pub fn observe(&self, element: &web_sys::Element) {
		self.observer.observe(element);
		self.counters.registered.set(self.counters.registered.get() + 1);
	}

	/// Stops watching `element` before it is discarded.
	///
	/// Revealed elements are no longer watched, so for them this does nothing and returns `false`.
	pub fn unobserve(&self, element: &web_sys::Element) -> bool {
		if element.class_list().contains(REVEALED_CLASS) {
			return false;
		}
		self.observer.unobserve(element);
		self.counters.released.set(self.counters.released.get() + 1);
		true
	}

	/// Starts watching every `.reveal-on-scroll` element currently below `root`.
	///
	/// Returns how many elements were registered.
	#[instrument(skip(self, root))]
	pub fn observe_all(&self, root: &web_sys::Document) -> usize {
		let nodes = match root.query_selector_all(REVEAL_SELECTOR) {
			Ok(nodes) => nodes,
			Err(error) => {
				warn!("Could not query reveal targets: {:?}", error);
				return 0;
			}
		};
		let mut count = 0;
		for i in 0..nodes.length() {
			if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
				self.observe(&element);
				count += 1;
			}
		}
		trace!("Observing {} static reveal target(s).", count);
		count
	}

	/// Handles a batch of intersection entries as if the observer had reported them.
	///
	/// Returns how many elements were revealed.
	pub fn reveal(&self, entries: &Array) -> usize {
		let revealed = reveal_entries(entries, &self.observer);
		self.counters.revealed.set(self.counters.revealed.get() + revealed);
		revealed
	}

	/// Total number of registrations so far.
	#[must_use]
	pub fn registered(&self) -> usize {
		self.counters.registered.get()
	}

	/// Total number of reveals so far.
	#[must_use]
	pub fn revealed(&self) -> usize {
		self.counters.revealed.get()
	}

	/// Number of elements currently watched: registered, and neither revealed nor released since.
	#[must_use]
	pub fn observed(&self) -> usize {
		self.registered().saturating_sub(self.revealed() + self.counters.released.get())
	}
}

impl Drop for RevealController {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

/// Reveals every `.reveal-on-scroll` element at once, for browsers without `IntersectionObserver`.
#[instrument(skip(root))]
pub fn reveal_immediately(root: &web_sys::Document) -> usize {
	let nodes = match root.query_selector_all(REVEAL_SELECTOR) {
		Ok(nodes) => nodes,
		Err(error) => {
			warn!("Could not query reveal targets: {:?}", error);
			return 0;
		}
	};
	let mut count = 0;
	for i in 0..nodes.length() {
		if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
			if element.class_list().add_1(REVEALED_CLASS).is_ok() {
				count += 1;
			}
		}
	}
	count
}

fn reveal_entries(entries: &Array, observer: &web_sys::IntersectionObserver) -> usize {
	let span = trace_span!("reveal_entries", len = entries.length());
	let _enter = span.enter();

	let mut revealed = 0;
	for entry in entries.iter() {
		let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
		if !entry.is_intersecting() {
			continue;
		}
		let target = entry.target();
		if let Err(error) = target.class_list().add_1(REVEALED_CLASS) {
			warn!("Could not reveal element: {:?}", error);
			continue;
		}
		observer.unobserve(&target);
		revealed += 1;
	}
	revealed
}
