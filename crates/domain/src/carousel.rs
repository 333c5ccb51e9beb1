//! Carousel — cyclic navigation over a fixed number of slides.
//!
//! The carousel only tracks *which* slide is shown and whether autoplay is
//! running. Timers and DOM updates live in the app layer.

use crate::error::ValidationError;

/// Autoplay state of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Autoplay {
    /// A recurring timer advances the carousel.
    #[default]
    Running,
    /// The pointer is over the carousel; no timer is active.
    Paused,
}

/// Slide position within a fixed-size carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    total: usize,
    autoplay: Autoplay,
}

impl Carousel {
    /// Create a carousel over `total` slides, showing the first one.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoSlides`] when `total` is zero.
    pub fn new(total: usize) -> Result<Self, ValidationError> {
        if total == 0 {
            return Err(ValidationError::NoSlides);
        }
        Ok(Self {
            current: 0,
            total,
            autoplay: Autoplay::Running,
        })
    }

    /// Index of the slide currently shown.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of slides; fixed for the carousel's lifetime.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn autoplay(&self) -> Autoplay {
        self.autoplay
    }

    /// Move by `direction` slides, wrapping around both ends.
    ///
    /// Any integer is accepted; the result is always in `[0, total)`.
    /// Returns the new index.
    pub fn advance(&mut self, direction: i32) -> usize {
        let step = direction.unsigned_abs() as usize % self.total;
        self.current = if direction >= 0 {
            (self.current + step) % self.total
        } else {
            (self.current + self.total - step) % self.total
        };
        self.current
    }

    /// Jump straight to `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::SlideOutOfRange`] when `index >= total`;
    /// the current slide is left unchanged.
    pub fn go_to(&mut self, index: usize) -> Result<usize, ValidationError> {
        if index >= self.total {
            return Err(ValidationError::SlideOutOfRange {
                index,
                total: self.total,
            });
        }
        self.current = index;
        Ok(self.current)
    }

    /// Horizontal offset of the slide strip, in percent of one slide.
    #[must_use]
    pub fn offset_percent(&self) -> usize {
        self.current * 100
    }

    /// Whether the indicator at `index` should be marked active.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    pub fn pause(&mut self) {
        self.autoplay = Autoplay::Paused;
    }

    pub fn resume(&mut self) {
        self.autoplay = Autoplay::Running;
    }
}
