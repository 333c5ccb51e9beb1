//! DOM port — the subset of document access the use-cases need.

use jotasite_domain::error::SiteError;
use jotasite_domain::markup::Node;

/// Read access to the host document.
pub trait Document {
    /// Handle to one element of this document.
    type Element: Element;

    /// Element with the given `id` attribute, if any.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All elements matching a CSS selector, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Surface`] if the selector is not valid CSS.
    fn query_selector_all(&self, selector: &str) -> Result<Vec<Self::Element>, SiteError>;
}

/// Mutations applied to a single element.
pub trait Element {
    /// Set one inline style property (e.g. `transform`).
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Surface`] if the surface rejects the update.
    fn set_style_property(&self, property: &str, value: &str) -> Result<(), SiteError>;

    /// Add `class` when `present` is true, remove it otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Surface`] if the surface rejects the update.
    fn set_class(&self, class: &str, present: bool) -> Result<(), SiteError>;

    /// Replace every child of this element with the given tree.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Surface`] if a node cannot be materialised.
    fn replace_children(&self, nodes: &[Node]) -> Result<(), SiteError>;
}
