use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why the portfolio document could not be loaded.
///
/// None of these are fatal: the static page shell stays usable and only the data-driven sections stay empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
	/// The request did not produce a response at all (offline, CORS, DNS…).
	#[error("Network error: {0}")]
	Network(String),

	/// The collaborator answered with a non-2xx status.
	#[error("HTTP {0}")]
	Status(u16),

	/// The body was not a portfolio document.
	#[error("Malformed portfolio document: {0}")]
	Decode(String),
}

impl From<serde_json::Error> for FetchError {
	fn from(error: serde_json::Error) -> Self {
		Self::Decode(error.to_string())
	}
}

impl From<gloo_net::Error> for FetchError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Network(error.to_string())
	}
}

/// A DOM lookup or DOM API call failed while booting the page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
	/// A global or element the page cannot run without is missing.
	#[error("Missing {0}")]
	Missing(&'static str),

	/// A DOM API threw.
	#[error("DOM call `{call}` failed: {message}")]
	Js { call: &'static str, message: String },
}

impl DomError {
	pub(crate) fn js(call: &'static str, error: &JsValue) -> Self {
		Self::Js {
			call,
			message: error.as_string().unwrap_or_else(|| format!("{:?}", error)),
		}
	}
}

impl From<DomError> for JsValue {
	fn from(error: DomError) -> Self {
		JsValue::from_str(&error.to_string())
	}
}
