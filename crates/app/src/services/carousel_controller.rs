//! Carousel controller — drives slide navigation and hover-paused autoplay
//! against the page through the [`Element`] and [`Scheduler`] ports.

use std::time::Duration;

use jotasite_domain::carousel::{Autoplay, Carousel};
use jotasite_domain::error::{MissingAnchorError, SiteError};

use crate::ports::{Document, Element, Scheduler};

/// Where the carousel lives in the page and how fast it turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselSettings {
    /// Id of the element translated horizontally to show a slide.
    pub wrapper_id: String,
    /// Selector matching every slide; only the count is used.
    pub slide_selector: String,
    /// Selector matching the indicator dots, one per slide.
    pub indicator_selector: String,
    /// Class carried by the indicator of the current slide.
    pub active_class: String,
    /// Autoplay period.
    pub interval: Duration,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            wrapper_id: "carouselWrapper".to_string(),
            slide_selector: ".carousel-item".to_string(),
            indicator_selector: ".dot".to_string(),
            active_class: "active".to_string(),
            interval: Duration::from_millis(6000),
        }
    }
}

/// The page elements a carousel needs, resolved once at start-up.
#[derive(Debug)]
pub struct CarouselAnchors<E> {
    carousel: Carousel,
    wrapper: E,
    indicators: Vec<E>,
}

impl<E: Element> CarouselAnchors<E> {
    /// Find the wrapper, slides and indicators in `document`.
    ///
    /// Indicators are optional: a page without them, or with a count that
    /// differs from the slides, still works and only gets a warning.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::MissingAnchor`] when the wrapper is absent,
    /// [`SiteError::Validation`] when there are no slides, and
    /// [`SiteError::Surface`] when a selector is rejected.
    pub fn resolve<D>(document: &D, settings: &CarouselSettings) -> Result<Self, SiteError>
    where
        D: Document<Element = E>,
    {
        let wrapper = document
            .element_by_id(&settings.wrapper_id)
            .ok_or_else(|| MissingAnchorError::new(format!("#{}", settings.wrapper_id)))?;
        let slides = document.query_selector_all(&settings.slide_selector)?.len();
        let carousel = Carousel::new(slides)?;
        let indicators = document.query_selector_all(&settings.indicator_selector)?;

        if indicators.len() != slides {
            tracing::warn!(
                slides,
                indicators = indicators.len(),
                selector = %settings.indicator_selector,
                "indicator count does not match slide count"
            );
        }

        Ok(Self {
            carousel,
            wrapper,
            indicators,
        })
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.carousel.total()
    }
}

/// Owns the carousel state and its single autoplay timer.
///
/// Constructed at page start, dropped at page teardown; dropping it cancels
/// the timer.
pub struct CarouselController<E, S: Scheduler> {
    carousel: Carousel,
    wrapper: E,
    indicators: Vec<E>,
    active_class: String,
    interval: Duration,
    scheduler: S,
    timer: Option<S::Handle>,
}

impl<E, S> CarouselController<E, S>
where
    E: Element,
    S: Scheduler,
{
    /// Create a controller on the first slide. No timer runs until
    /// [`start`](Self::start).
    pub fn new(anchors: CarouselAnchors<E>, scheduler: S, settings: &CarouselSettings) -> Self {
        Self {
            carousel: anchors.carousel,
            wrapper: anchors.wrapper,
            indicators: anchors.indicators,
            active_class: settings.active_class.clone(),
            interval: settings.interval,
            scheduler,
            timer: None,
        }
    }

    /// Paint the initial position and begin autoplay.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Surface`] if the page rejects the UI update.
    pub fn start(&mut self) -> Result<(), SiteError> {
        self.refresh_ui()?;
        self.schedule();
        tracing::info!(
            total = self.carousel.total(),
            interval_ms = u64::try_from(self.interval.as_millis()).unwrap_or(u64::MAX),
            "carousel started"
        );
        Ok(())
    }

    /// Move by `direction` slides (usually `1` or `-1`), wrapping around.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Surface`] if the page rejects the UI update.
    pub fn advance(&mut self, direction: i32) -> Result<usize, SiteError> {
        let slide = self.carousel.advance(direction);
        tracing::debug!(slide, direction, "carousel advanced");
        self.refresh_ui()?;
        Ok(slide)
    }

    /// Show the slide at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Validation`] when `index` is out of range (the
    /// carousel stays where it was), or [`SiteError::Surface`] if the page
    /// rejects the UI update.
    pub fn go_to(&mut self, index: usize) -> Result<usize, SiteError> {
        let slide = self.carousel.go_to(index).inspect_err(|err| {
            tracing::warn!(index, total = self.carousel.total(), %err, "ignoring slide request");
        })?;
        tracing::debug!(slide, "carousel jumped");
        self.refresh_ui()?;
        Ok(slide)
    }

    /// Timer callback: advance by one slide.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Surface`] if the page rejects the UI update.
    pub fn tick(&mut self) -> Result<usize, SiteError> {
        self.advance(1)
    }

    /// Shift the wrapper to the current slide and mark exactly its indicator
    /// active.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Surface`] if the page rejects the update.
    pub fn refresh_ui(&self) -> Result<(), SiteError> {
        let offset = self.carousel.offset_percent();
        self.wrapper
            .set_style_property("transform", &format!("translateX(-{offset}%)"))?;
        for (index, indicator) in self.indicators.iter().enumerate() {
            indicator.set_class(&self.active_class, self.carousel.is_active(index))?;
        }
        Ok(())
    }

    /// Pointer entered the carousel: cancel autoplay.
    pub fn pointer_enter(&mut self) {
        self.timer = None;
        self.carousel.pause();
        tracing::debug!("carousel autoplay paused");
    }

    /// Pointer left the carousel: restart autoplay with a fresh timer.
    pub fn pointer_leave(&mut self) {
        self.schedule();
        tracing::debug!("carousel autoplay resumed");
    }

    /// Cancel autoplay for good (page teardown).
    pub fn stop(&mut self) {
        self.timer = None;
        self.carousel.pause();
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.carousel.current()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.carousel.total()
    }

    #[must_use]
    pub fn autoplay(&self) -> Autoplay {
        self.carousel.autoplay()
    }

    #[must_use]
    pub fn has_active_timer(&self) -> bool {
        self.timer.is_some()
    }

    fn schedule(&mut self) {
        // Drop the old handle first so two timers never overlap.
        self.timer = None;
        self.timer = Some(self.scheduler.every(self.interval));
        self.carousel.resume();
    }
}
