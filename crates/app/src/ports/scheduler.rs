//! Scheduler port — recurring timers.
//!
//! What a timer *does* when it fires is wired by the adapter that builds the
//! scheduler; the use-cases only decide when a timer exists.

use std::time::Duration;

/// Creates recurring timers.
pub trait Scheduler {
    /// Keeps the timer alive. Dropping the handle cancels the timer.
    type Handle;

    /// Start a timer that fires every `period` until its handle is dropped.
    fn every(&self, period: Duration) -> Self::Handle;
}
