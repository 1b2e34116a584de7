//! Owned element tree.

use crate::rfc::dav::core::QName;

use super::{XmlDocument, XmlNode};

/// An XML element with its child elements and direct text content.
///
/// Attributes, comments and processing instructions are not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: QName,
    children: Vec<Element>,
    text: String,
}

impl Element {
    /// Creates an empty element.
    #[must_use]
    pub fn new(name: QName) -> Self {
        Self {
            name,
            children: Vec::new(),
            text: String::new(),
        }
    }

    /// Creates an element holding `text`.
    #[must_use]
    pub fn with_text(name: QName, text: impl Into<String>) -> Self {
        Self {
            name,
            children: Vec::new(),
            text: text.into(),
        }
    }

    /// Returns the child elements.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Appends a child element.
    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Appends text to this element's direct content.
    pub fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }
}

impl XmlNode for Element {
    fn name(&self) -> &QName {
        &self.name
    }

    fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter()
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// Factory for owned [`Element`] values.
#[derive(Debug, Default, Clone, Copy)]
pub struct Document;

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl XmlDocument for Document {
    type Element = Element;

    fn create_element(&mut self, name: QName, text: Option<&str>) -> Element {
        match text {
            Some(text) => Element::with_text(name, text),
            None => Element::new(name),
        }
    }

    fn append_child(&mut self, parent: &mut Element, child: Element) {
        parent.push_child(child);
    }
}

#[cfg(test)]
mod tests {
    use super::{Document, Element};
    use crate::rfc::dav::core::{QName, bind_elements};
    use crate::rfc::dav::xml::{XmlDocument, XmlNode};

    #[test]
    fn create_element_with_and_without_text() {
        let mut doc = Document::new();

        let href = doc.create_element(bind_elements::href(), Some("/a"));
        let empty = doc.create_element(bind_elements::segment(), None);

        assert_eq!(href.text(), "/a");
        assert_eq!(empty.text(), "");
        assert!(href.matches(&bind_elements::href()));
    }

    #[test]
    fn append_child_keeps_order() {
        let mut doc = Document::new();
        let mut root = doc.create_element(bind_elements::rebind(), None);
        let href = doc.create_element(bind_elements::href(), Some("/a"));
        let segment = doc.create_element(bind_elements::segment(), Some("b"));

        doc.append_child(&mut root, href);
        doc.append_child(&mut root, segment);

        let names: Vec<_> = root
            .child_elements()
            .map(|child| child.name().local_name().to_string())
            .collect();
        assert_eq!(names, ["href", "segment"]);
    }

    #[test]
    fn matches_requires_namespace() {
        let element = Element::new(QName::new("urn:example", "href"));
        assert!(!element.matches(&bind_elements::href()));
    }
}
