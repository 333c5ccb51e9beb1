//! # jotasite-web
//!
//! Composition root compiled to WebAssembly. On module start it reads the
//! page's optional TOML config block, installs console logging, then mounts
//! whichever components have anchors on the current page:
//!
//! - the home page carousel, when the wrapper element exists;
//! - the service detail page, when the service container exists.
//!
//! A component that fails to start is logged and the others still start.
//!
//! `moveCarousel` and `goToSlide` are exported for inline `onclick` handlers.
//! The carousel also binds its own click listeners to the arrows and dots, so
//! a page that keeps inline handlers on those controls must set
//! `carousel.bind_click_listeners = false` in its config block.

pub mod config;
pub mod logging;
pub mod startup;

use std::cell::RefCell;

use jotasite_adapter_dom_web_sys::{
    DomError, MountedCarousel, WebDocument, WebLocation, mount_carousel,
};
use jotasite_domain::error::SiteError;
use wasm_bindgen::prelude::*;

use crate::config::Config;
use crate::logging::LoggingError;
pub use crate::startup::StartupError;
use crate::startup::start_components;

/// Id of the optional `<script type="application/toml">` config block.
pub const CONFIG_ELEMENT_ID: &str = "jotasite-config";

thread_local! {
    static CAROUSEL: RefCell<Option<MountedCarousel>> = const { RefCell::new(None) };
}

/// Module entry point; defers the real work until the DOM is parsed.
///
/// # Errors
///
/// Returns the error message when there is no window or document.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let document = WebDocument::from_window().map_err(to_js)?;
    let ready = document.clone();
    document
        .when_ready(move || {
            if let Err(err) = run(&ready) {
                report_startup_failure(&err);
            }
        })
        .map_err(to_js)
}

/// Move the carousel by `direction` slides and return the new index.
///
/// # Errors
///
/// Fails when the page has no carousel or the update is rejected.
#[wasm_bindgen(js_name = moveCarousel)]
pub fn move_carousel(direction: i32) -> Result<usize, JsValue> {
    with_carousel(|carousel| carousel.advance(direction))
}

/// Jump to slide `index` and return it.
///
/// # Errors
///
/// Fails when the page has no carousel or `index` is out of range.
#[wasm_bindgen(js_name = goToSlide)]
pub fn go_to_slide(index: usize) -> Result<usize, JsValue> {
    with_carousel(|carousel| carousel.go_to(index))
}

fn run(document: &WebDocument) -> Result<(), StartupError> {
    let source = document.text_of(CONFIG_ELEMENT_ID);
    let config = Config::from_source(source.as_deref())?;
    match logging::init(&config.logging.filter) {
        Ok(()) | Err(LoggingError::AlreadyInstalled(_)) => {}
        Err(err) => return Err(err.into()),
    }
    tracing::info!(custom_config = source.is_some(), "starting jotasite");

    let location = WebLocation::from_window()?;
    let controls = config.carousel_controls();
    let started = start_components(document, &location, &config, |settings| {
        mount_carousel(document, settings, &controls)
    });
    if let Some(mounted) = started.carousel {
        tracing::info!(
            total = ?mounted.total(),
            listeners = mounted.listener_count(),
            "carousel mounted"
        );
        CAROUSEL.set(Some(mounted));
    }
    if !started.failures.is_empty() {
        tracing::warn!(
            failed = started.failures.len(),
            "page started with failing components"
        );
    }
    Ok(())
}

fn with_carousel(
    action: impl FnOnce(&MountedCarousel) -> Result<usize, SiteError>,
) -> Result<usize, JsValue> {
    CAROUSEL.with(|slot| {
        let slot = slot.try_borrow().map_err(|_| to_js(DomError::Busy))?;
        let carousel = slot
            .as_ref()
            .ok_or_else(|| JsValue::from_str("no carousel on this page"))?;
        action(carousel).map_err(to_js)
    })
}

fn report_startup_failure(err: &StartupError) {
    if tracing::dispatcher::has_been_set() {
        tracing::error!(error = %err, "startup failed");
    } else {
        web_sys::console::error_1(&JsValue::from_str(&format!("jotasite startup failed: {err}")));
    }
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
