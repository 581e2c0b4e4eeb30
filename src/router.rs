//! Fragment routing: which view is active, and the page chrome that follows it.

use crate::{
	nav::NavMenu,
	route::{title_for, RouteSet},
	views::ViewRegistry,
};
use std::cell::RefCell;
use tracing::{debug, info, instrument, warn};

/// Below this viewport width (in CSS pixels) the menu is collapsed after each navigation.
pub const MENU_BREAKPOINT: f64 = 760.0;

/// Fragment router. Owns the active view.
///
/// [`Router::show`] is the only place that changes which view is active.
#[derive(Debug)]
pub struct Router {
	routes: RouteSet,
	views: ViewRegistry,
	menu: NavMenu,
	window: web_sys::Window,
	site_title: String,
	current: RefCell<Option<String>>,
}

impl Router {
	#[must_use]
	pub fn new(routes: RouteSet, views: ViewRegistry, menu: NavMenu, window: web_sys::Window, site_title: impl Into<String>) -> Self {
		Self {
			routes,
			views,
			menu,
			window,
			site_title: site_title.into(),
			current: RefCell::new(None),
		}
	}

	#[must_use]
	pub fn routes(&self) -> &RouteSet {
		&self.routes
	}

	#[must_use]
	pub fn views(&self) -> &ViewRegistry {
		&self.views
	}

	/// The route last shown, if any.
	#[must_use]
	pub fn active(&self) -> Option<String> {
		self.current.borrow().clone()
	}

	/// The route named by the current URL fragment, or the default route.
	#[must_use]
	pub fn current_route(&self) -> &str {
		let hash = self.window.location().hash().unwrap_or_default();
		self.routes.resolve(&hash)
	}

	/// Navigates to `route`.
	///
	/// Changes the fragment only if it differs from the current one; the resulting `hashchange` then shows the view.
	/// Navigating to the current fragment shows its route again directly.
	///
	/// The comparison is against the literal fragment, so leaving an unknown fragment for the default route
	/// still rewrites the address.
	#[instrument(skip(self))]
	pub fn navigate(&self, route: &str) {
		let route = route.strip_prefix('#').unwrap_or(route);
		let hash = self.window.location().hash().unwrap_or_default();
		if route != hash.strip_prefix('#').unwrap_or(&hash) {
			if let Err(error) = self.window.location().set_hash(route) {
				warn!("Could not set location hash: {:?}. Showing directly.", error);
				self.show(route);
			}
		} else {
			self.show(route);
		}
	}

	/// Activates the view for `route` (or the default route if unknown) and updates page chrome:
	/// navigation highlight, document title, menu state on narrow viewports, and scroll position.
	///
	/// A route without a view in the markup is treated like an unknown one, so that exactly one view stays active.
	///
	/// Returns the route that was shown.
	#[instrument(skip(self))]
	pub fn show(&self, route: &str) -> &str {
		let mut resolved = self.routes.resolve(route);
		if resolved != route.strip_prefix('#').unwrap_or(route) {
			debug!("Unknown route {:?} resolved to {:?}.", route, resolved);
		}
		if self.views.get(resolved).is_none() {
			if let Some(fallback) = self.fallback_with_view() {
				warn!("No view for route {:?}. Showing {:?} instead.", resolved, fallback);
				resolved = fallback;
			}
		}

		self.views.activate(resolved);
		self.menu.highlight(resolved);

		if let Some(document) = self.window.document() {
			document.set_title(&title_for(resolved, &self.site_title));
		}

		match self.window.inner_width().ok().and_then(|width| width.as_f64()) {
			Some(width) if width < MENU_BREAKPOINT => self.menu.close(),
			Some(_) => (),
			None => warn!("Could not read viewport width."),
		}

		self.window.scroll_to_with_x_and_y(0.0, 0.0);

		info!("Showing {:?}.", resolved);
		*self.current.borrow_mut() = Some(resolved.to_owned());
		resolved
	}

	/// The default route if it has a view, else the first route that has one.
	fn fallback_with_view(&self) -> Option<&str> {
		let default = self.routes.default_route();
		if self.views.get(default).is_some() {
			return Some(default);
		}
		self.routes.iter().find(|route| self.views.get(route).is_some())
	}

	/// Handles a click on an `a[data-link]` anchor with the given `href`.
	///
	/// Returns `true` iff the click was routed, in which case the default action should be prevented.
	#[instrument(skip(self))]
	pub fn on_link_click(&self, href: &str) -> bool {
		match href.strip_prefix('#') {
			Some(route) => {
				self.navigate(route);
				true
			}
			None => false,
		}
	}
}
