//! # jotasite-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `Document` / `Element` — find anchors, update styles and classes,
//!     replace content with a rendered markup tree
//!   - `Location` — the page's query string
//!   - `Scheduler` — recurring timers whose handles cancel on drop
//! - Define the use-cases driven by the page:
//!   - `CarouselController` — slide navigation and hover-paused autoplay
//!   - `ServiceRenderer` — one-shot service-detail rendering
//!
//! ## Dependency rule
//! Depends on `jotasite-domain` only (plus `tracing` and `url`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

#[cfg(test)]
mod fakes;
