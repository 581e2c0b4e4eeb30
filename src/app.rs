//! Page state and event dispatch.
//!
//! [`App`] holds everything the page needs for its lifetime. Browser listeners only translate DOM events into
//! [`AppEvent`]s, so handlers can be exercised directly with synthetic events.

use crate::{
	config::AppConfig,
	error::{DomError, FetchError},
	fetch::fetch_portfolio,
	nav::NavMenu,
	portfolio::Portfolio,
	render::{RenderReport, Renderer},
	reveal::{self, RevealController},
	route::RouteSet,
	router::Router,
	views::ViewRegistry,
};
use std::{cell::RefCell, rc::Rc};
use tracing::{info, instrument, warn};
use wasm_bindgen::{closure::Closure, prelude::wasm_bindgen, JsCast, JsValue, UnwrapThrowExt};

/// Anchors routed on click instead of followed.
pub const ROUTED_LINK_SELECTOR: &str = "a[data-link]";
pub const YEAR_ID: &str = "year";

/// Something happened that the page reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
	/// The URL fragment changed.
	HashChanged,
	/// A routed anchor was clicked.
	LinkClicked { href: String },
	/// The menu control was clicked.
	MenuToggled,
}

#[derive(Debug)]
pub struct App {
	config: AppConfig,
	router: Router,
	renderer: Renderer,
	menu: NavMenu,
	reveal: Option<Rc<RevealController>>,
	portfolio: RefCell<Option<Rc<Portfolio>>>,
}

impl App {
	/// Wires up the static page and shows the route named by the current URL.
	///
	/// This happens synchronously, before any data is fetched.
	///
	/// # Errors
	///
	/// Iff `window` has no document.
	#[instrument(skip(window))]
	pub fn boot(window: web_sys::Window, config: AppConfig) -> Result<Self, DomError> {
		let document = window.document().ok_or(DomError::Missing("document"))?;

		let views = ViewRegistry::collect(&document);
		let routes = match &config.routes {
			Some(routes) => RouteSet::new(routes_with_views(routes, &views), config.default_route.as_deref()),
			None => RouteSet::new(views.routes().to_vec(), config.default_route.as_deref()),
		};
		let menu = NavMenu::bind(&document);

		let reveal = match RevealController::new() {
			Ok(controller) => {
				controller.observe_all(&document);
				Some(Rc::new(controller))
			}
			Err(error) => {
				warn!("Scroll reveal unavailable ({:?}). Revealing everything.", error);
				reveal::reveal_immediately(&document);
				None
			}
		};

		if let Some(year) = document.get_element_by_id(YEAR_ID) {
			year.set_text_content(Some(&js_sys::Date::new_0().get_full_year().to_string()));
		}

		let router = Router::new(routes, views, menu.clone(), window, config.site_title.clone());
		router.show(router.current_route());

		Ok(Self {
			renderer: Renderer::new(document, reveal.clone()),
			config,
			router,
			menu,
			reveal,
			portfolio: RefCell::new(None),
		})
	}

	#[must_use]
	pub fn config(&self) -> &AppConfig {
		&self.config
	}

	#[must_use]
	pub fn router(&self) -> &Router {
		&self.router
	}

	#[must_use]
	pub fn renderer(&self) -> &Renderer {
		&self.renderer
	}

	#[must_use]
	pub fn menu(&self) -> &NavMenu {
		&self.menu
	}

	#[must_use]
	pub fn reveal(&self) -> Option<&RevealController> {
		self.reveal.as_deref()
	}

	/// The last successfully received portfolio.
	#[must_use]
	pub fn portfolio(&self) -> Option<Rc<Portfolio>> {
		self.portfolio.borrow().clone()
	}

	/// Reacts to `event`. Returns `true` iff the event's default action should be prevented.
	#[instrument(skip(self))]
	pub fn handle(&self, event: &AppEvent) -> bool {
		match event {
			AppEvent::HashChanged => {
				self.router.show(self.router.current_route());
				false
			}
			AppEvent::LinkClicked { href } => self.router.on_link_click(href),
			AppEvent::MenuToggled => {
				self.menu.toggle();
				false
			}
		}
	}

	/// Continuation of the portfolio fetch.
	///
	/// On success the portfolio is rendered and kept. On failure the static content is left as it is,
	/// sections waiting for data are flagged, and the failure is logged.
	#[instrument(skip(self, result))]
	pub fn complete_fetch(&self, result: Result<Portfolio, FetchError>) -> Option<RenderReport> {
		match result {
			Ok(portfolio) => {
				let report = self.renderer.render(&portfolio);
				*self.portfolio.borrow_mut() = Some(Rc::new(portfolio));
				Some(report)
			}
			Err(error) => {
				warn!("Failed to fetch portfolio data: {}", error);
				let flagged = self.renderer.mark_failed();
				info!("Flagged {} section(s) as failed.", flagged);
				None
			}
		}
	}

	/// Fetches the portfolio once and completes with the result.
	pub async fn load(&self) -> Option<RenderReport> {
		let url = self.config.portfolio_url();
		let result = fetch_portfolio(&url).await;
		self.complete_fetch(result)
	}
}

type Listener = Closure<dyn Fn(web_sys::Event)>;

/// Keeps the app and its browser listeners alive for the page lifetime.
struct Running {
	_app: Rc<App>,
	_listeners: Vec<Listener>,
}

thread_local! {
	static RUNNING: RefCell<Option<Running>> = RefCell::new(None);
}

/// Boots the page, attaches the browser listeners and starts the portfolio fetch.
///
/// Calling this more than once has no further effect.
///
/// # Errors
///
/// Iff there is no document or a listener could not be attached.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
	console_error_panic_hook::set_once();
	let _ = tracing_wasm::try_set_as_global_default();

	if RUNNING.with(|running| running.borrow().is_some()) {
		warn!("Already started.");
		return Ok(());
	}

	let window = web_sys::window().expect_throw("folio-dom: No `window` found.");
	let config = AppConfig::from_window(&window);
	info!(url = %config.portfolio_url(), "Starting.");

	let app = Rc::new(App::boot(window.clone(), config)?);
	let listeners = attach_listeners(&app, &window)?;

	wasm_bindgen_futures::spawn_local({
		let app = Rc::clone(&app);
		async move {
			app.load().await;
		}
	});

	RUNNING.with(|running| {
		*running.borrow_mut() = Some(Running { _app: app, _listeners: listeners });
	});
	Ok(())
}

fn attach_listeners(app: &Rc<App>, window: &web_sys::Window) -> Result<Vec<Listener>, DomError> {
	let document = window.document().ok_or(DomError::Missing("document"))?;
	let mut listeners = Vec::with_capacity(3);

	let hash_change: Listener = Closure::wrap(Box::new({
		let app = Rc::clone(app);
		move |_: web_sys::Event| {
			app.handle(&AppEvent::HashChanged);
		}
	}) as Box<dyn Fn(web_sys::Event)>);
	window
		.add_event_listener_with_callback("hashchange", hash_change.as_ref().unchecked_ref())
		.map_err(|error| DomError::js("addEventListener(\"hashchange\")", &error))?;
	listeners.push(hash_change);

	let link_click: Listener = Closure::wrap(Box::new({
		let app = Rc::clone(app);
		move |event: web_sys::Event| {
			if let Some(href) = routed_href(&event) {
				if app.handle(&AppEvent::LinkClicked { href }) {
					event.prevent_default();
				}
			}
		}
	}) as Box<dyn Fn(web_sys::Event)>);
	document
		.add_event_listener_with_callback("click", link_click.as_ref().unchecked_ref())
		.map_err(|error| DomError::js("addEventListener(\"click\")", &error))?;
	listeners.push(link_click);

	if let Some(toggle) = app.menu().toggle_element() {
		let menu_toggle: Listener = Closure::wrap(Box::new({
			let app = Rc::clone(app);
			move |_: web_sys::Event| {
				app.handle(&AppEvent::MenuToggled);
			}
		}) as Box<dyn Fn(web_sys::Event)>);
		toggle
			.add_event_listener_with_callback("click", menu_toggle.as_ref().unchecked_ref())
			.map_err(|error| DomError::js("addEventListener(\"click\")", &error))?;
		listeners.push(menu_toggle);
	}

	Ok(listeners)
}

/// The `href` of the routed anchor an event originated in, if any.
fn routed_href(event: &web_sys::Event) -> Option<String> {
	let target = event.target()?.dyn_into::<web_sys::Element>().ok()?;
	let anchor = target.closest(ROUTED_LINK_SELECTOR).ok().flatten()?;
	anchor.get_attribute("href")
}

/// The configured routes that have a view in the markup, in configured order.
///
/// Falls back to the markup's routes if none of the configured ones has a view.
fn routes_with_views(configured: &[String], views: &ViewRegistry) -> Vec<String> {
	if views.is_empty() {
		return configured.to_vec();
	}
	let (kept, dropped): (Vec<&String>, Vec<&String>) = configured.iter().partition(|route| views.get(route.trim().trim_start_matches('#')).is_some());
	if !dropped.is_empty() {
		warn!("Configured routes without a view are ignored: {:?}", dropped);
	}
	if kept.is_empty() {
		return views.routes().to_vec();
	}
	kept.into_iter().cloned().collect()
}
