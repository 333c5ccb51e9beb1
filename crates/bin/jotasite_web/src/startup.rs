//! Page start-up sequence, generic over the page ports.
//!
//! Components are independent: each is started only when its anchor is on the
//! page, and a failing component is logged and recorded without stopping the
//! others.

use jotasite_adapter_dom_web_sys::DomError;
use jotasite_app::ports::{Document, Location};
use jotasite_app::services::carousel_controller::CarouselSettings;
use jotasite_app::services::service_renderer::{Rendered, ServicePageSettings, ServiceRenderer};
use jotasite_domain::catalog::Catalog;
use jotasite_domain::error::SiteError;

use crate::config::{Config, ConfigError};
use crate::logging::LoggingError;

/// Everything that can go wrong while starting the page.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Site(#[from] SiteError),
    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Which component a start-up failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Carousel,
    ServicePage,
}

/// Outcome of [`start_components`].
#[derive(Debug)]
pub struct Started<C> {
    /// The mounted carousel, if the page has one and it started.
    pub carousel: Option<C>,
    /// The rendered service page, if the page has a container and it rendered.
    pub service_page: Option<Rendered>,
    /// Components whose anchor was present but which failed to start.
    pub failures: Vec<(Component, StartupError)>,
}

impl<C> Started<C> {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Start every component whose anchor exists in `document`.
///
/// `mount` builds the carousel once its wrapper is known to exist; the browser
/// passes the `web-sys` mount, tests pass an in-memory one.
#[must_use]
pub fn start_components<D, L, C>(
    document: &D,
    location: &L,
    config: &Config,
    mount: impl FnOnce(&CarouselSettings) -> Result<C, SiteError>,
) -> Started<C>
where
    D: Document,
    L: Location,
{
    let mut failures = Vec::new();

    let carousel = config.carousel_settings();
    let carousel = if document.element_by_id(&carousel.wrapper_id).is_some() {
        match mount(&carousel) {
            Ok(mounted) => Some(mounted),
            Err(err) => {
                tracing::error!(error = %err, "carousel failed to start");
                failures.push((Component::Carousel, err.into()));
                None
            }
        }
    } else {
        tracing::debug!(wrapper = %carousel.wrapper_id, "no carousel on this page");
        None
    };

    let page = config.service_page_settings();
    let service_page = if document.element_by_id(&page.container_id).is_some() {
        match render_service_page(document, location, config, &page) {
            Ok(rendered) => Some(rendered),
            Err(err) => {
                tracing::error!(error = %err, "service page failed to render");
                failures.push((Component::ServicePage, err));
                None
            }
        }
    } else {
        tracing::debug!(container = %page.container_id, "no service container on this page");
        None
    };

    Started {
        carousel,
        service_page,
        failures,
    }
}

fn render_service_page<D, L>(
    document: &D,
    location: &L,
    config: &Config,
    page: &ServicePageSettings,
) -> Result<Rendered, StartupError>
where
    D: Document,
    L: Location,
{
    let catalog = Catalog::builtin().map_err(SiteError::from)?;
    let renderer = ServiceRenderer::new(catalog, config.contact_link()?);
    Ok(renderer.render_into(document, location, page)?)
}
