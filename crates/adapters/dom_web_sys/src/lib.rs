//! # jotasite-adapter-dom-web-sys
//!
//! Browser adapter that implements the `jotasite-app` ports on top of
//! `web-sys`.
//!
//! ## Provided implementations
//!
//! | Port | Type | Backed by |
//! |------|------|-----------|
//! | `Document` / `Element` | [`WebDocument`] / [`WebElement`] | `document`, `Element`, `createElement` |
//! | `Location` | [`WebLocation`] | `window.location.search` |
//! | `Scheduler` | [`IntervalScheduler`] | `gloo_timers::callback::Interval` |
//!
//! [`mount_carousel`] wires a carousel controller to its page listeners
//! (hover, arrows, indicator dots). Arrow and dot listeners are skipped when
//! [`CarouselControls::bind_clicks`] is off, for pages that drive the
//! carousel from inline `onclick` handlers instead.
//!
//! ## Dependency rule
//!
//! Depends on `jotasite-app` (port traits) and `jotasite-domain` only.

mod carousel;
mod dom;
mod error;
mod events;
mod scheduler;

pub use carousel::{CarouselControls, MountedCarousel, WebCarousel, mount_carousel};
pub use dom::{WebDocument, WebElement, WebLocation};
pub use error::DomError;
pub use events::EventListener;
pub use scheduler::IntervalScheduler;
