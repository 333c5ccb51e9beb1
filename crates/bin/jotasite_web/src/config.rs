//! Configuration loading — TOML embedded in the host page.
//!
//! Pages may carry a `<script type="application/toml" id="jotasite-config">`
//! block. Every field has a default matching the stock site markup, so the
//! block is optional.

use std::time::Duration;

use jotasite_adapter_dom_web_sys::CarouselControls;
use jotasite_app::services::carousel_controller::CarouselSettings;
use jotasite_app::services::service_renderer::ServicePageSettings;
use jotasite_domain::contact::ContactLink;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Carousel anchors and autoplay period.
    pub carousel: CarouselConfig,
    /// Service detail page anchors.
    pub service_page: ServicePageConfig,
    /// Call-to-action chat link.
    pub contact: ContactConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Carousel configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub wrapper_id: String,
    pub slide_selector: String,
    pub indicator_selector: String,
    /// Element whose hover pauses autoplay.
    pub container_selector: String,
    pub prev_selector: String,
    pub next_selector: String,
    /// Bind click listeners to arrows and dots. Set to `false` when the page
    /// keeps inline `onclick="moveCarousel(..)"` handlers on those controls.
    pub bind_click_listeners: bool,
    pub active_class: String,
    /// Autoplay period in milliseconds.
    pub interval_ms: u64,
}

/// Service page configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServicePageConfig {
    /// Id of the element that receives the rendered page.
    pub container_id: String,
    /// Query-string key carrying the service slug.
    pub query_param: String,
}

/// WhatsApp contact configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// International number, digits only.
    pub phone: String,
    /// Message prefix; the service title is appended.
    pub greeting: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Parse the page's config block, or fall back to defaults when the page
    /// has none.
    ///
    /// # Errors
    ///
    /// Returns an error if the block is malformed or fails validation.
    pub fn from_source(source: Option<&str>) -> Result<Self, ConfigError> {
        let config = match source {
            Some(text) => toml::from_str(text)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "carousel.interval_ms must be non-zero".to_string(),
            ));
        }
        let required = [
            ("carousel.wrapper_id", &self.carousel.wrapper_id),
            ("carousel.slide_selector", &self.carousel.slide_selector),
            ("carousel.indicator_selector", &self.carousel.indicator_selector),
            ("carousel.container_selector", &self.carousel.container_selector),
            ("carousel.prev_selector", &self.carousel.prev_selector),
            ("carousel.next_selector", &self.carousel.next_selector),
            ("carousel.active_class", &self.carousel.active_class),
            ("service_page.container_id", &self.service_page.container_id),
            ("service_page.query_param", &self.service_page.query_param),
        ];
        if let Some((key, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::Validation(format!("{key} must not be empty")));
        }
        self.contact_link()?;
        Ok(())
    }

    #[must_use]
    pub fn carousel_settings(&self) -> CarouselSettings {
        CarouselSettings {
            wrapper_id: self.carousel.wrapper_id.clone(),
            slide_selector: self.carousel.slide_selector.clone(),
            indicator_selector: self.carousel.indicator_selector.clone(),
            active_class: self.carousel.active_class.clone(),
            interval: Duration::from_millis(self.carousel.interval_ms),
        }
    }

    #[must_use]
    pub fn carousel_controls(&self) -> CarouselControls {
        CarouselControls {
            container_selector: self.carousel.container_selector.clone(),
            prev_selector: self.carousel.prev_selector.clone(),
            next_selector: self.carousel.next_selector.clone(),
            bind_clicks: self.carousel.bind_click_listeners,
        }
    }

    #[must_use]
    pub fn service_page_settings(&self) -> ServicePageSettings {
        ServicePageSettings {
            container_id: self.service_page.container_id.clone(),
            query_param: self.service_page.query_param.clone(),
        }
    }

    /// Build the chat link used by call-to-action buttons.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when the phone is not all digits.
    pub fn contact_link(&self) -> Result<ContactLink, ConfigError> {
        ContactLink::new(self.contact.phone.clone(), self.contact.greeting.clone())
            .map_err(|err| ConfigError::Validation(format!("contact.phone: {err}")))
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        let settings = CarouselSettings::default();
        let controls = CarouselControls::default();
        Self {
            wrapper_id: settings.wrapper_id,
            slide_selector: settings.slide_selector,
            indicator_selector: settings.indicator_selector,
            container_selector: controls.container_selector,
            prev_selector: controls.prev_selector,
            next_selector: controls.next_selector,
            bind_click_listeners: controls.bind_clicks,
            active_class: settings.active_class,
            interval_ms: 6000,
        }
    }
}

impl Default for ServicePageConfig {
    fn default() -> Self {
        let settings = ServicePageSettings::default();
        Self {
            container_id: settings.container_id,
            query_param: settings.query_param,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: "573022985621".to_string(),
            greeting: "Hola Jota, estoy interesado en el servicio de ".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "jotasite=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse page config")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
