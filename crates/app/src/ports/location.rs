//! Location port — where the page was loaded from.

use jotasite_domain::error::SiteError;

/// The current page URL.
pub trait Location {
    /// Raw query string including the leading `?`, or empty when there is none.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Surface`] if the URL cannot be read.
    fn search(&self) -> Result<String, SiteError>;
}
