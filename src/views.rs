//! The route views of the page shell.

use hashbrown::HashMap;
use tracing::{debug, instrument, warn};
use wasm_bindgen::JsCast;

/// Selector of the route views in the page shell.
pub const VIEW_SELECTOR: &str = ".view[data-route]";
pub const ROUTE_ATTRIBUTE: &str = "data-route";
pub const ACTIVE_CLASS: &str = "active";

/// Route name → view element, collected once from the markup.
#[derive(Debug)]
pub struct ViewRegistry {
	views: HashMap<String, web_sys::Element>,
	order: Vec<String>,
}

impl ViewRegistry {
	/// Collects every `.view[data-route]` element below `document`.
	///
	/// On duplicate route names the first view wins.
	#[must_use]
	#[instrument(skip(document))]
	pub fn collect(document: &web_sys::Document) -> Self {
		let mut registry = Self { views: HashMap::new(), order: Vec::new() };

		let nodes = match document.query_selector_all(VIEW_SELECTOR) {
			Ok(nodes) => nodes,
			Err(error) => {
				warn!("Could not query views: {:?}", error);
				return registry;
			}
		};

		for i in 0..nodes.length() {
			let element = match nodes.item(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
				Some(element) => element,
				None => continue,
			};
			let route = element.get_attribute(ROUTE_ATTRIBUTE).unwrap_or_default();
			let route = route.trim();
			if route.is_empty() {
				continue;
			}
			if registry.views.contains_key(route) {
				warn!("Duplicate view for route {:?}. Ignoring all but the first.", route);
				continue;
			}
			registry.order.push(route.to_owned());
			registry.views.insert(route.to_owned(), element);
		}

		debug!("Collected {} view(s): {:?}", registry.order.len(), registry.order);
		registry
	}

	/// Route names in document order.
	#[must_use]
	pub fn routes(&self) -> &[String] {
		&self.order
	}

	#[must_use]
	pub fn get(&self, route: &str) -> Option<&web_sys::Element> {
		self.views.get(route)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.order.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	/// Makes the view for `route` the only one carrying [`ACTIVE_CLASS`].
	///
	/// Returns the number of active views afterwards, which is 0 iff `route` has no view.
	#[instrument(skip(self))]
	pub fn activate(&self, route: &str) -> usize {
		let mut active = 0;
		for name in &self.order {
			let on = name == route;
			if let Err(error) = self.views[name.as_str()].class_list().toggle_with_force(ACTIVE_CLASS, on) {
				warn!("Could not toggle view {:?}: {:?}", name, error);
				continue;
			}
			active += usize::from(on);
		}
		if active == 0 {
			warn!("No view for route {:?}.", route);
		}
		active
	}

	/// Routes whose views currently carry [`ACTIVE_CLASS`], in document order.
	#[must_use]
	pub fn active_routes(&self) -> Vec<&str> {
		self.order.iter().filter(|name| self.views[name.as_str()].class_list().contains(ACTIVE_CLASS)).map(String::as_str).collect()
	}
}
