#![doc(html_root_url = "https://docs.rs/folio-dom/0.1.0")]
#![warn(clippy::pedantic)]

//! A hash-routed single page portfolio for the browser.
//!
//! The page shell is static HTML: one `.view[data-route]` element per route, a `#site-nav` menu and
//! empty list containers per section. This crate switches between the views on fragment navigation,
//! fetches the portfolio document once and renders it into the containers.
//!
//! Call [`start`] once from the loader script after the document has been parsed.

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod app;
pub mod config;
pub mod error;
pub mod escape;
pub mod fetch;
pub mod fragment;
pub mod nav;
pub mod portfolio;
pub mod render;
pub mod reveal;
pub mod route;
pub mod router;
pub mod views;

pub use app::{start, App, AppEvent};
pub use error::{DomError, FetchError};
