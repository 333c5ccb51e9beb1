//! Service — one offering of the studio, shown on the service-detail page.
//!
//! A [`ServiceSlug`] selects the offering (it arrives via the `service` query
//! parameter); a [`ServiceRecord`] holds the pre-authored copy.

use std::fmt;
use std::str::FromStr;

use crate::error::{NotFoundError, ValidationError};
use crate::markup::TrustedHtml;

/// Identifier of an offered service, as it appears in page URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ServiceSlug {
    /// Graphic design and branding.
    Diseno,
    /// Industrial variable-data printing.
    Impresion,
    /// Video ads and motion graphics.
    Video,
    /// Web design and development.
    Web,
}

impl ServiceSlug {
    /// Every slug, in catalog order.
    pub const ALL: [ServiceSlug; 4] = [Self::Diseno, Self::Impresion, Self::Video, Self::Web];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Diseno => "diseno",
            Self::Impresion => "impresion",
            Self::Video => "video",
            Self::Web => "web",
        }
    }
}

impl fmt::Display for ServiceSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceSlug {
    type Err = NotFoundError;

    /// Exact, case-sensitive match against the fixed slugs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slug| slug.as_str() == s)
            .ok_or_else(|| NotFoundError {
                entity: "Service",
                id: s.to_string(),
            })
    }
}

/// Pre-authored content for one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    pub slug: ServiceSlug,
    pub title: String,
    /// Header background image path.
    pub image: String,
    pub description: String,
    /// Rich-text body, authored by the site operator.
    pub details: TrustedHtml,
    /// Gallery image URLs in display order.
    pub gallery: Vec<String>,
}

impl ServiceRecord {
    /// Create a builder for constructing a [`ServiceRecord`].
    #[must_use]
    pub fn builder(slug: ServiceSlug) -> ServiceRecordBuilder {
        ServiceRecordBuilder {
            slug,
            title: None,
            image: None,
            description: None,
            details: None,
            gallery: Vec::new(),
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] when title, image or
    /// description is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField("title"));
        }
        if self.image.trim().is_empty() {
            return Err(ValidationError::EmptyField("image"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyField("description"));
        }
        Ok(())
    }
}

/// Step-by-step builder for [`ServiceRecord`].
#[derive(Debug)]
pub struct ServiceRecordBuilder {
    slug: ServiceSlug,
    title: Option<String>,
    image: Option<String>,
    description: Option<String>,
    details: Option<TrustedHtml>,
    gallery: Vec<String>,
}

impl ServiceRecordBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn details(mut self, details: TrustedHtml) -> Self {
        self.details = Some(details);
        self
    }

    /// Append one gallery image; order of calls is display order.
    #[must_use]
    pub fn gallery_image(mut self, url: impl Into<String>) -> Self {
        self.gallery.push(url.into());
        self
    }

    /// Consume the builder, validate, and return a [`ServiceRecord`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] if a required field is missing
    /// or blank.
    pub fn build(self) -> Result<ServiceRecord, ValidationError> {
        let record = ServiceRecord {
            slug: self.slug,
            title: self.title.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            details: self.details.unwrap_or_else(|| TrustedHtml::new("")),
            gallery: self.gallery,
        };
        record.validate()?;
        Ok(record)
    }
}
