//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`SiteError`]
//! via `#[from]` (or an explicit `From` impl for adapter errors).

/// Top-level error for every jotasite operation.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A required DOM anchor is missing from the host page.
    #[error("missing page anchor")]
    MissingAnchor(#[from] MissingAnchorError),

    /// The rendering surface (browser DOM, timers) reported a failure.
    #[error("surface error")]
    Surface(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A carousel needs at least one slide.
    #[error("carousel has no slides")]
    NoSlides,

    /// A slide index outside `[0, total)` was requested.
    #[error("slide {index} is out of range (carousel has {total} slides)")]
    SlideOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of slides in the carousel.
        total: usize,
    },

    /// A required text field was empty.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// A contact phone number was empty or had non-digit characters.
    #[error("phone number '{0}' must be digits only")]
    InvalidPhone(String),
}

/// Returned when a key does not name a known record (e.g. an unknown
/// service slug). Callers that treat absence as a normal outcome drop it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} '{id}' not found")]
pub struct NotFoundError {
    /// Kind of thing that was looked up.
    pub entity: &'static str,
    /// The key that was used.
    pub id: String,
}

/// Returned when the host page lacks an element the behaviour depends on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("page has no element matching '{anchor}'")]
pub struct MissingAnchorError {
    /// The id or selector that matched nothing.
    pub anchor: String,
}

impl MissingAnchorError {
    /// Build an error for the given id or selector.
    #[must_use]
    pub fn new(anchor: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
        }
    }
}
