//! Mount a [`CarouselController`] on the live page.
//!
//! The controller sits in an `Rc<RefCell<..>>` owned by [`MountedCarousel`].
//! Timer and listener closures only hold `Weak` references, so dropping the
//! mount tears everything down: listeners detach and the interval is cleared.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use jotasite_app::ports::Document;
use jotasite_app::services::carousel_controller::{
    CarouselAnchors, CarouselController, CarouselSettings,
};
use jotasite_domain::error::SiteError;

use crate::dom::{WebDocument, WebElement};
use crate::error::DomError;
use crate::events::EventListener;
use crate::scheduler::IntervalScheduler;

/// Carousel controller as it runs in the browser.
pub type WebCarousel = CarouselController<WebElement, IntervalScheduler>;

/// Page elements that drive the carousel but are not part of its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselControls {
    /// Element whose hover pauses autoplay. Optional in the page.
    pub container_selector: String,
    /// Buttons that move one slide back.
    pub prev_selector: String,
    /// Buttons that move one slide forward.
    pub next_selector: String,
    /// Bind click listeners to the arrows and indicator dots. Turn off for
    /// pages whose controls keep inline `onclick="moveCarousel(..)"`
    /// handlers, otherwise each click moves the carousel twice.
    pub bind_clicks: bool,
}

impl Default for CarouselControls {
    fn default() -> Self {
        Self {
            container_selector: ".carousel-container".to_string(),
            prev_selector: ".carousel-prev".to_string(),
            next_selector: ".carousel-next".to_string(),
            bind_clicks: true,
        }
    }
}

/// A running carousel. Keep it alive for as long as the page is.
pub struct MountedCarousel {
    controller: Rc<RefCell<WebCarousel>>,
    listeners: Vec<EventListener>,
}

impl MountedCarousel {
    /// Move by `direction` slides.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Surface`] if the page rejects the update or the
    /// carousel is handling another event.
    pub fn advance(&self, direction: i32) -> Result<usize, SiteError> {
        self.controller
            .try_borrow_mut()
            .map_err(|_| DomError::Busy)?
            .advance(direction)
    }

    /// Jump to the slide at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Validation`] for an out-of-range index.
    pub fn go_to(&self, index: usize) -> Result<usize, SiteError> {
        self.controller
            .try_borrow_mut()
            .map_err(|_| DomError::Busy)?
            .go_to(index)
    }

    /// Number of slides, or `None` while a callback holds the controller.
    #[must_use]
    pub fn total(&self) -> Option<usize> {
        self.controller.try_borrow().ok().map(|c| c.total())
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Drop for MountedCarousel {
    fn drop(&mut self) {
        self.listeners.clear();
        if let Ok(mut controller) = self.controller.try_borrow_mut() {
            controller.stop();
        }
    }
}

/// Resolve the carousel anchors, start autoplay and bind hover, arrow and
/// indicator listeners.
///
/// # Errors
///
/// Fails fast with [`SiteError::MissingAnchor`] or [`SiteError::Validation`]
/// when the page has no usable carousel, and with [`SiteError::Surface`] when
/// a listener cannot be attached.
pub fn mount_carousel(
    document: &WebDocument,
    settings: &CarouselSettings,
    controls: &CarouselControls,
) -> Result<MountedCarousel, SiteError> {
    let anchors = CarouselAnchors::resolve(document, settings)?;

    let controller = Rc::new_cyclic(|weak: &Weak<RefCell<WebCarousel>>| {
        let weak = weak.clone();
        let scheduler = IntervalScheduler::new(move || {
            drive(&weak, |c| report(c.tick()));
        });
        RefCell::new(CarouselController::new(anchors, scheduler, settings))
    });
    controller.borrow_mut().start()?;

    let mut listeners = Vec::new();
    let weak = Rc::downgrade(&controller);

    match document.query_selector(&controls.container_selector)? {
        Some(container) => {
            let on_enter = weak.clone();
            listeners.push(EventListener::new(
                container.raw(),
                "mouseenter",
                move |_| drive(&on_enter, WebCarousel::pointer_enter),
            )?);
            let on_leave = weak.clone();
            listeners.push(EventListener::new(
                container.raw(),
                "mouseleave",
                move |_| drive(&on_leave, WebCarousel::pointer_leave),
            )?);
        }
        None => tracing::warn!(
            selector = %controls.container_selector,
            "no hover container; autoplay will not pause"
        ),
    }

    if controls.bind_clicks {
        bind_clicks(document, settings, controls, &weak, &mut listeners)?;
    } else {
        tracing::debug!("click listeners disabled; page drives navigation inline");
    }

    tracing::debug!(listeners = listeners.len(), "carousel listeners bound");
    Ok(MountedCarousel {
        controller,
        listeners,
    })
}

fn bind_clicks(
    document: &WebDocument,
    settings: &CarouselSettings,
    controls: &CarouselControls,
    weak: &Weak<RefCell<WebCarousel>>,
    listeners: &mut Vec<EventListener>,
) -> Result<(), SiteError> {
    for (selector, direction) in [(&controls.prev_selector, -1), (&controls.next_selector, 1)] {
        for button in document.query_selector_all(selector)? {
            let weak = weak.clone();
            listeners.push(EventListener::new(button.raw(), "click", move |_| {
                drive(&weak, |c| report(c.advance(direction)));
            })?);
        }
    }

    for (index, dot) in document
        .query_selector_all(&settings.indicator_selector)?
        .into_iter()
        .enumerate()
    {
        let weak = weak.clone();
        listeners.push(EventListener::new(dot.raw(), "click", move |_| {
            drive(&weak, |c| report(c.go_to(index)));
        })?);
    }
    Ok(())
}

/// Run `action` on the controller if it is still mounted and not already
/// borrowed by another callback.
fn drive<T>(weak: &Weak<RefCell<WebCarousel>>, action: impl FnOnce(&mut WebCarousel) -> T) {
    let Some(controller) = weak.upgrade() else {
        return;
    };
    match controller.try_borrow_mut() {
        Ok(mut controller) => {
            action(&mut controller);
        }
        Err(_) => tracing::warn!("carousel busy; dropping event"),
    }
}

fn report(result: Result<usize, SiteError>) {
    if let Err(err) = result {
        tracing::warn!(error = %err, "carousel update failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_bind_clicks_with_stock_selectors_by_default() {
        let controls = CarouselControls::default();
        assert!(controls.bind_clicks);
        assert_eq!(controls.prev_selector, ".carousel-prev");
        assert_eq!(controls.next_selector, ".carousel-next");
    }
}
