//! `web-sys` implementations of the [`Document`], [`Element`] and
//! [`Location`] ports.

use jotasite_app::ports::{Document, Element, Location};
use jotasite_domain::error::SiteError;
use jotasite_domain::markup::Node;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::error::DomError;

/// The page's `document`.
#[derive(Debug, Clone)]
pub struct WebDocument {
    inner: web_sys::Document,
}

impl WebDocument {
    /// The document of the global window.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NoWindow`] or [`DomError::NoDocument`] outside a
    /// browser main thread.
    pub fn from_window() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let inner = window.document().ok_or(DomError::NoDocument)?;
        Ok(Self { inner })
    }

    /// First element matching `selector`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Js`] when the selector is invalid.
    pub fn query_selector(&self, selector: &str) -> Result<Option<WebElement>, DomError> {
        Ok(self.inner.query_selector(selector)?.map(WebElement::new))
    }

    /// Run `f` once the document has been parsed: immediately if it already
    /// is, otherwise on `DOMContentLoaded`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Js`] if the listener cannot be attached.
    pub fn when_ready(&self, f: impl FnOnce() + 'static) -> Result<(), DomError> {
        if self.inner.ready_state() != "loading" {
            f();
            return Ok(());
        }
        let callback = Closure::once_into_js(f);
        self.inner
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
        Ok(())
    }

    /// Text content of the element with the given id, if it exists.
    #[must_use]
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.inner
            .get_element_by_id(id)
            .and_then(|el| el.text_content())
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.inner.get_element_by_id(id).map(WebElement::new)
    }

    fn query_selector_all(&self, selector: &str) -> Result<Vec<WebElement>, SiteError> {
        let list = self
            .inner
            .query_selector_all(selector)
            .map_err(DomError::from)?;
        Ok((0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(WebElement::new)
            .collect())
    }
}

/// Handle to one DOM element.
#[derive(Debug, Clone)]
pub struct WebElement {
    inner: web_sys::Element,
}

impl WebElement {
    #[must_use]
    pub fn new(inner: web_sys::Element) -> Self {
        Self { inner }
    }

    /// The underlying `web-sys` element, e.g. to attach listeners.
    #[must_use]
    pub fn raw(&self) -> &web_sys::Element {
        &self.inner
    }
}

impl Element for WebElement {
    fn set_style_property(&self, property: &str, value: &str) -> Result<(), SiteError> {
        let html = self
            .inner
            .dyn_ref::<web_sys::HtmlElement>()
            .ok_or_else(|| DomError::NotStylable(self.inner.tag_name()))?;
        html.style()
            .set_property(property, value)
            .map_err(DomError::from)?;
        Ok(())
    }

    fn set_class(&self, class: &str, present: bool) -> Result<(), SiteError> {
        self.inner
            .class_list()
            .toggle_with_force(class, present)
            .map_err(DomError::from)?;
        Ok(())
    }

    fn replace_children(&self, nodes: &[Node]) -> Result<(), SiteError> {
        let document = self.inner.owner_document().ok_or(DomError::NoDocument)?;
        self.inner.set_text_content(None);
        for node in nodes {
            append_node(&document, &self.inner, node)?;
        }
        Ok(())
    }
}

/// Materialise `node` as the last child of `parent`.
///
/// Text and attribute values go through `createTextNode`/`setAttribute` and
/// are never parsed as markup; only trusted fragments are.
fn append_node(
    document: &web_sys::Document,
    parent: &web_sys::Element,
    node: &Node,
) -> Result<(), DomError> {
    match node {
        Node::Element(el) => {
            let child = document.create_element(&el.tag)?;
            for (name, value) in &el.attributes {
                child.set_attribute(name, value)?;
            }
            for grandchild in &el.children {
                append_node(document, &child, grandchild)?;
            }
            parent.append_child(&child)?;
        }
        Node::Text(text) => {
            parent.append_child(&document.create_text_node(text))?;
        }
        Node::Trusted(html) => {
            parent.insert_adjacent_html("beforeend", html.as_str())?;
        }
    }
    Ok(())
}

/// The page's `window.location`.
#[derive(Debug, Clone)]
pub struct WebLocation {
    inner: web_sys::Location,
}

impl WebLocation {
    /// The location of the global window.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NoWindow`] outside a browser main thread.
    pub fn from_window() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        Ok(Self {
            inner: window.location(),
        })
    }
}

impl Location for WebLocation {
    fn search(&self) -> Result<String, SiteError> {
        Ok(self.inner.search().map_err(DomError::from)?)
    }
}
