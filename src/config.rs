//! Runtime configuration injected by the deployment as `window.__APP_CONFIG__`.

use js_sys::{Array, Reflect};
use tracing::{debug, instrument};
use wasm_bindgen::{JsCast, JsValue};

/// Name of the global holding the runtime configuration object.
pub const CONFIG_GLOBAL: &str = "__APP_CONFIG__";

/// Where the mock backend listens during local development.
pub const LOCAL_BASE: &str = "http://localhost:8888";

/// Path of the portfolio document relative to the API base.
pub const PORTFOLIO_PATH: &str = "/api/portfolio";

pub const DEFAULT_SITE_TITLE: &str = "Portfolio";

const LOOPBACK_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "[::1]"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
	/// Resolved API base address, without trailing slash. Empty means relative addressing.
	pub api_base: String,
	/// Full portfolio endpoint, overriding [`AppConfig::api_base`].
	pub api_url: Option<String>,
	/// Route names in navigation order. `None` derives them from the markup.
	pub routes: Option<Vec<String>>,
	pub default_route: Option<String>,
	pub site_title: String,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			api_base: String::new(),
			api_url: None,
			routes: None,
			default_route: None,
			site_title: DEFAULT_SITE_TITLE.to_owned(),
		}
	}
}

impl AppConfig {
	/// Reads the runtime configuration from `window`.
	///
	/// A missing global or missing/mistyped keys never fail; each key falls back on its own.
	#[must_use]
	#[instrument(skip(window))]
	pub fn from_window(window: &web_sys::Window) -> Self {
		let hostname = window.location().hostname().unwrap_or_default();
		let global = Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)).unwrap_or(JsValue::UNDEFINED);
		if global.is_undefined() || global.is_null() {
			debug!("No `{}` present.", CONFIG_GLOBAL);
		}
		Self::from_js(&global, &hostname)
	}

	/// Reads the configuration from an already retrieved config object (`undefined` is fine).
	#[must_use]
	pub fn from_js(config: &JsValue, hostname: &str) -> Self {
		let api_base = string_key(config, "API_BASE");
		Self {
			api_base: resolve_api_base(api_base.as_deref(), hostname),
			api_url: string_key(config, "API_URL"),
			routes: string_list_key(config, "ROUTES"),
			default_route: string_key(config, "DEFAULT_ROUTE"),
			site_title: string_key(config, "SITE_TITLE").unwrap_or_else(|| DEFAULT_SITE_TITLE.to_owned()),
		}
	}

	/// The single URL the portfolio document is fetched from.
	#[must_use]
	pub fn portfolio_url(&self) -> String {
		match &self.api_url {
			Some(url) => url.clone(),
			None => format!("{}{}", self.api_base, PORTFOLIO_PATH),
		}
	}
}

/// Picks the API base: the runtime value if set, else [`LOCAL_BASE`] on loopback hosts, else relative addressing.
#[must_use]
pub fn resolve_api_base(runtime_base: Option<&str>, hostname: &str) -> String {
	let base = match runtime_base.map(str::trim).filter(|base| !base.is_empty()) {
		Some(base) => base,
		None if LOOPBACK_HOSTS.contains(&hostname) => LOCAL_BASE,
		None => "",
	};
	base.trim_end_matches('/').to_owned()
}

fn key(config: &JsValue, name: &str) -> Option<JsValue> {
	if !config.is_object() {
		return None;
	}
	Reflect::get(config, &JsValue::from_str(name)).ok().filter(|value| !value.is_undefined() && !value.is_null())
}

fn string_key(config: &JsValue, name: &str) -> Option<String> {
	let value = key(config, name)?;
	match value.as_string() {
		Some(value) if !value.trim().is_empty() => Some(value.trim().to_owned()),
		Some(_) => None,
		None => {
			debug!("Ignoring non-string `{}.{}`: {:?}", CONFIG_GLOBAL, name, value);
			None
		}
	}
}

fn string_list_key(config: &JsValue, name: &str) -> Option<Vec<String>> {
	let value = key(config, name)?;
	let array = match value.dyn_ref::<Array>() {
		Some(array) => array,
		None => {
			debug!("Ignoring non-array `{}.{}`: {:?}", CONFIG_GLOBAL, name, value);
			return None;
		}
	};
	let routes: Vec<String> = array.iter().filter_map(|item| item.as_string()).collect();
	if routes.is_empty() {
		None
	} else {
		Some(routes)
	}
}
