//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the use-cases and the page they run in.
//! The browser adapter implements them over `web-sys`; tests implement them
//! in memory.

pub mod dom;
pub mod location;
pub mod scheduler;

pub use dom::{Document, Element};
pub use location::Location;
pub use scheduler::Scheduler;
