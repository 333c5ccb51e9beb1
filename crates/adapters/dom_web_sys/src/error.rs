//! Browser adapter error types.

use jotasite_domain::error::SiteError;
use wasm_bindgen::JsValue;

/// Errors raised while talking to the browser.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// No global `window` (not running in a browser main thread).
    #[error("no global window")]
    NoWindow,

    /// The window or node has no owning document.
    #[error("no document available")]
    NoDocument,

    /// The element cannot carry inline styles (e.g. not an HTML element).
    #[error("element <{0}> has no inline style")]
    NotStylable(String),

    /// A callback re-entered a component that is already handling an event.
    #[error("component is busy handling another event")]
    Busy,

    /// A DOM call threw; the message is the stringified JS value.
    #[error("javascript exception: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<DomError> for SiteError {
    fn from(err: DomError) -> Self {
        SiteError::Surface(Box::new(err))
    }
}
