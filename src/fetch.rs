//! The single outbound read of the portfolio document.

use crate::{
	error::FetchError,
	portfolio::{Portfolio, PortfolioDocument},
};
use gloo_net::http::Request;
use tracing::{debug, instrument};

/// Fetches and normalises the portfolio document from `url`.
///
/// # Errors
///
/// - [`FetchError::Network`] if no response arrived,
/// - [`FetchError::Status`] for non-2xx responses,
/// - [`FetchError::Decode`] if the body is not a JSON object.
#[instrument]
pub async fn fetch_portfolio(url: &str) -> Result<Portfolio, FetchError> {
	let response = Request::get(url).send().await?;
	let status = response.status();
	let body = if response.ok() {
		response.text().await?
	} else {
		String::new()
	};
	debug!(status, len = body.len(), "Received portfolio response.");
	decode_response(status, &body)
}

/// Turns a response status and body into a [`Portfolio`].
///
/// # Errors
///
/// [`FetchError::Status`] unless `status` is 2xx, else [`FetchError::Decode`] if `body` doesn't parse.
pub fn decode_response(status: u16, body: &str) -> Result<Portfolio, FetchError> {
	if !(200..300).contains(&status) {
		return Err(FetchError::Status(status));
	}
	Ok(PortfolioDocument::from_json(body)?.normalize())
}

#[cfg(test)]
mod tests {
	use super::decode_response;
	use crate::error::FetchError;

	#[test]
	fn server_error() {
		assert_eq!(decode_response(500, r#"{"error":"boom"}"#), Err(FetchError::Status(500)));
		assert_eq!(decode_response(304, ""), Err(FetchError::Status(304)));
	}

	#[test]
	fn ok_with_garbage() {
		assert!(matches!(decode_response(200, "not json"), Err(FetchError::Decode(_))));
	}

	#[test]
	fn ok() {
		let portfolio = decode_response(200, r#"{"links":[{"title":"Blog","href":"https://blog.example"}]}"#).unwrap();
		assert_eq!(portfolio.links.len(), 1);
	}

	#[test]
	fn one_odd_field_keeps_the_rest() {
		let portfolio = decode_response(200, r#"{"profile":{"name":"A"},"links":[{"title":"x"}],"careers":[{"period":2020,"title":"Eng"}]}"#).unwrap();
		assert_eq!(portfolio.profile.unwrap().name, "A");
		assert_eq!(portfolio.links.len(), 1);
		assert_eq!(portfolio.careers[0].period, "2020");
	}
}
