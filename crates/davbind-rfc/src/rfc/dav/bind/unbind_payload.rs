//! `UNBIND` request body (RFC 5842 §5).

use serde::Serialize;

use super::collect_fields;
use crate::rfc::dav::core::bind_elements;
use crate::rfc::dav::parse::ParseResult;
use crate::rfc::dav::xml::{FromXml, ToXml, XmlDocument, XmlNode};

/// Request to remove the binding named `segment` from the request collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UnbindPayload {
    segment: String,
}

impl UnbindPayload {
    #[must_use]
    pub fn new(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
        }
    }

    #[must_use]
    pub fn segment(&self) -> &str {
        &self.segment
    }
}

impl FromXml for UnbindPayload {
    /// Decodes a `DAV:unbind` element; `segment` is its only allowed child.
    fn from_xml<E: XmlNode>(root: &E) -> ParseResult<Self> {
        let mut fields = collect_fields(root, &bind_elements::unbind(), false)?;
        let segment = fields.take_segment()?;

        tracing::debug!(%segment, "Decoded DAV:unbind body");
        Ok(Self { segment })
    }
}

impl ToXml for UnbindPayload {
    fn to_xml<D: XmlDocument>(&self, document: &mut D) -> D::Element {
        let mut unbind = document.create_element(bind_elements::unbind(), None);
        let segment =
            document.create_element(bind_elements::segment(), Some(self.segment.as_str()));
        document.append_child(&mut unbind, segment);
        unbind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::dav::xml::{Document, Element};

    fn unbind_with(children: Vec<Element>) -> Element {
        let mut root = Element::new(bind_elements::unbind());
        for child in children {
            root.push_child(child);
        }
        root
    }

    #[test]
    fn decode_unbind() {
        let root = unbind_with(vec![Element::with_text(bind_elements::segment(), "old")]);
        assert_eq!(UnbindPayload::from_xml(&root).unwrap().segment(), "old");
    }

    #[test]
    fn href_is_unexpected() {
        let root = unbind_with(vec![
            Element::with_text(bind_elements::segment(), "old"),
            Element::with_text(bind_elements::href(), "/a"),
        ]);

        let err = UnbindPayload::from_xml(&root).unwrap_err();
        assert_eq!(err.message, "unexpected element");
    }

    #[test]
    fn duplicate_segment() {
        let root = unbind_with(vec![
            Element::with_text(bind_elements::segment(), "a"),
            Element::with_text(bind_elements::segment(), "b"),
        ]);

        let err = UnbindPayload::from_xml(&root).unwrap_err();
        assert_eq!(err.message, "duplicate segment element");
    }

    #[test]
    fn missing_segment() {
        let err = UnbindPayload::from_xml(&unbind_with(vec![])).unwrap_err();
        assert_eq!(err.message, "segment element expected");
    }

    #[test]
    fn wrong_root() {
        let err = UnbindPayload::from_xml(&Element::new(bind_elements::bind())).unwrap_err();
        assert_eq!(err.message, "unbind element expected");
    }

    #[test]
    fn encode_single_segment_child() {
        let element = UnbindPayload::new("old").to_xml(&mut Document::new());

        assert_eq!(
            element,
            unbind_with(vec![Element::with_text(bind_elements::segment(), "old")])
        );
    }
}
