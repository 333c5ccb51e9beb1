//! DOM event listeners that detach themselves on drop.

use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

use crate::error::DomError;

/// Guard that removes the listener from its target when dropped.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Attach `handler` to `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Js`] if the browser refuses the listener.
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, DomError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
