//! The closed set of named views and fragment resolution.

use tracing::{instrument, warn};

/// Used when neither configuration nor markup name any route.
pub const FALLBACK_ROUTE: &str = "home";

/// An ordered, closed set of route names with a default member.
///
/// The set is a deployment input: it comes from runtime configuration or from the views present in the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSet {
	routes: Vec<String>,
	default: usize,
}

impl RouteSet {
	/// Builds a route set. Blank and duplicate names are dropped.
	///
	/// The default is `default` if it is a member, else [`FALLBACK_ROUTE`] if that is a member, else the first route.
	#[must_use]
	#[instrument]
	pub fn new<I, S>(routes: I, default: Option<&str>) -> Self
	where
		I: IntoIterator<Item = S> + std::fmt::Debug,
		S: Into<String>,
	{
		let mut unique: Vec<String> = Vec::new();
		for route in routes {
			let route: String = route.into();
			let route = route.trim().trim_start_matches('#');
			if !route.is_empty() && !unique.iter().any(|known| known == route) {
				unique.push(route.to_owned());
			}
		}
		if unique.is_empty() {
			warn!("No routes configured. Falling back to {:?}.", FALLBACK_ROUTE);
			unique.push(FALLBACK_ROUTE.to_owned());
		}

		let position = |name: &str| unique.iter().position(|route| route == name);
		let default = match default.and_then(|name| position(name)) {
			Some(i) => i,
			None => {
				if let Some(name) = default {
					warn!("Default route {:?} is not a known route.", name);
				}
				position(FALLBACK_ROUTE).unwrap_or(0)
			}
		};

		Self { routes: unique, default }
	}

	/// Maps a URL fragment (with or without its leading `#`) onto a member of this set.
	///
	/// Unknown and empty fragments resolve to the default route.
	#[must_use]
	pub fn resolve(&self, fragment: &str) -> &str {
		let name = fragment.strip_prefix('#').unwrap_or(fragment);
		self.get(name).unwrap_or_else(|| self.default_route())
	}

	#[must_use]
	pub fn get(&self, name: &str) -> Option<&str> {
		self.routes.iter().find(|route| *route == name).map(String::as_str)
	}

	#[must_use]
	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	#[must_use]
	pub fn default_route(&self) -> &str {
		&self.routes[self.default]
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.routes.iter().map(String::as_str)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.routes.len()
	}

	/// Always `false`, a route set has at least one member.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}
}

/// The document title shown for `route`: `"Skills — Portfolio"`.
#[must_use]
pub fn title_for(route: &str, site_title: &str) -> String {
	let mut chars = route.chars();
	let capitalized = match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	};
	format!("{} — {}", capitalized, site_title)
}
