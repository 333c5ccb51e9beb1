//! [`Scheduler`] backed by `setInterval` through `gloo-timers`.

use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Interval;
use jotasite_app::ports::Scheduler;

/// Starts browser intervals that all run the same tick callback.
///
/// The returned [`Interval`] calls `clearInterval` when dropped.
#[derive(Clone)]
pub struct IntervalScheduler {
    on_tick: Rc<dyn Fn()>,
}

impl IntervalScheduler {
    pub fn new(on_tick: impl Fn() + 'static) -> Self {
        Self {
            on_tick: Rc::new(on_tick),
        }
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&self, period: Duration) -> Interval {
        let on_tick = Rc::clone(&self.on_tick);
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        Interval::new(millis, move || on_tick())
    }
}
