//! Markup tree — element descriptors produced by renderers.
//!
//! Renderers build a [`Node`] tree instead of concatenating strings. Text and
//! attribute values stay data until a surface materialises them, so a title
//! containing `<` or `&` can never turn into markup. Operator-authored
//! fragments that *are* markup travel as [`TrustedHtml`].

use std::fmt::{self, Write as _};

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta", "source"];

/// Markup authored by the site operator and compiled into the binary.
///
/// Inserted verbatim. Never build one from end-user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    /// Wrap a fragment of operator-authored markup.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One node of a rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Trusted(TrustedHtml),
}

impl Node {
    /// Shorthand for a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Serialise to an HTML string, escaping text and attribute values.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.to_string()
    }

    /// Depth-first iterator over this node and all its descendants.
    pub fn descendants(&self) -> impl Iterator<Item = &Node> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            if let Node::Element(el) = node {
                stack.extend(el.children.iter().rev());
            }
            Some(node)
        })
    }

    /// All descendant elements (including `self`) with the given tag, in
    /// document order.
    #[must_use]
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        self.descendants()
            .filter_map(|node| match node {
                Node::Element(el) if el.tag == tag => Some(el),
                _ => None,
            })
            .collect()
    }

    /// Concatenated text content, ignoring trusted fragments.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.descendants()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<TrustedHtml> for Node {
    fn from(html: TrustedHtml) -> Self {
        Self::Trusted(html)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(el) => fmt::Display::fmt(el, f),
            Node::Text(text) => write_escaped(f, text),
            Node::Trusted(html) => f.write_str(html.as_str()),
        }
    }
}

/// An element descriptor: tag, ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value for the same name.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    #[must_use]
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    #[must_use]
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    /// Value of the named attribute, if set.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the `class` attribute contains `class` as a whole word.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Whether this tag never takes children or a closing tag.
    #[must_use]
    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            write!(f, " {name}=\"")?;
            write_escaped(f, value)?;
            f.write_char('"')?;
        }
        f.write_char('>')?;
        if self.is_void() {
            return Ok(());
        }
        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

/// Serialise a sequence of sibling nodes.
#[must_use]
pub fn to_html(nodes: &[Node]) -> String {
    nodes.iter().map(Node::to_html).collect()
}

fn write_escaped(f: &mut fmt::Formatter<'_>, raw: &str) -> fmt::Result {
    for ch in raw.chars() {
        match ch {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            '\'' => f.write_str("&#39;")?,
            other => f.write_char(other)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_escape_text_nodes() {
        let node = Node::text("Diseño Web & <Desarrollo>");
        assert_eq!(node.to_html(), "Diseño Web &amp; &lt;Desarrollo&gt;");
    }

    #[test]
    fn should_escape_attribute_values() {
        let el = Element::new("img").attr("alt", "a \"quoted\" 'title'");
        assert_eq!(
            Node::from(el).to_html(),
            "<img alt=\"a &quot;quoted&quot; &#39;title&#39;\">"
        );
    }

    #[test]
    fn should_emit_trusted_html_verbatim() {
        let node = Element::new("div").child(TrustedHtml::new("<p>hi &amp; bye</p>"));
        assert_eq!(
            Node::from(node).to_html(),
            "<div><p>hi &amp; bye</p></div>"
        );
    }

    #[test]
    fn should_not_close_void_elements() {
        let el = Element::new("img").attr("src", "a.png");
        assert!(el.is_void());
        assert_eq!(el.to_string(), "<img src=\"a.png\">");
    }

    #[test]
    fn should_replace_attribute_with_same_name() {
        let el = Element::new("a").attr("href", "/one").attr("href", "/two");
        assert_eq!(el.attributes.len(), 1);
        assert_eq!(el.get_attr("href"), Some("/two"));
    }

    #[test]
    fn should_match_whole_class_words() {
        let el = Element::new("h1").class("service-title text-center");
        assert!(el.has_class("text-center"));
        assert!(!el.has_class("text"));
    }

    #[test]
    fn should_find_elements_in_document_order() {
        let tree: Node = Element::new("div")
            .child(Element::new("img").attr("src", "1"))
            .child(Element::new("p").child(Element::new("img").attr("src", "2")))
            .child(Element::new("img").attr("src", "3"))
            .into();
        let srcs: Vec<_> = tree
            .find_all("img")
            .iter()
            .filter_map(|el| el.get_attr("src"))
            .collect();
        assert_eq!(srcs, vec!["1", "2", "3"]);
    }

    #[test]
    fn should_collect_text_content_without_trusted_fragments() {
        let tree: Node = Element::new("div")
            .text("Hello ")
            .child(TrustedHtml::new("<b>ignored</b>"))
            .child(Element::new("span").text("world"))
            .into();
        assert_eq!(tree.text_content(), "Hello world");
    }

    #[test]
    fn should_serialise_sibling_nodes() {
        let nodes = vec![Node::text("a"), Element::new("br").into(), Node::text("b")];
        assert_eq!(to_html(&nodes), "a<br>b");
    }
}
