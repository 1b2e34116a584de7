//! `REBIND` request body (RFC 5842 §6).

use serde::Serialize;

use super::collect_fields;
use crate::rfc::dav::core::bind_elements;
use crate::rfc::dav::parse::ParseResult;
use crate::rfc::dav::xml::{FromXml, ToXml, XmlDocument, XmlNode};

/// Request to move the binding at `href` to a new `segment` name.
///
/// Immutable once built; decoding only produces a value after the whole body
/// has been validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RebindPayload {
    href: String,
    segment: String,
}

impl RebindPayload {
    /// Creates a payload from already validated values.
    #[must_use]
    pub fn new(href: impl Into<String>, segment: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            segment: segment.into(),
        }
    }

    /// Returns the href of the resource to rebind.
    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Returns the new binding name.
    #[must_use]
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Splits the payload into `(href, segment)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.href, self.segment)
    }
}

impl FromXml for RebindPayload {
    /// Decodes a `DAV:rebind` element.
    ///
    /// ## Errors
    /// Fails with a `MalformedRequestBody` error when the root is not
    /// `DAV:rebind`, a child is repeated or unknown, or `href`/`segment`
    /// is missing (checked in that order).
    fn from_xml<E: XmlNode>(root: &E) -> ParseResult<Self> {
        let mut fields = collect_fields(root, &bind_elements::rebind(), true)?;
        let href = fields.take_href()?;
        let segment = fields.take_segment()?;

        tracing::debug!(%href, %segment, "Decoded DAV:rebind body");
        Ok(Self { href, segment })
    }
}

impl ToXml for RebindPayload {
    /// Encodes as `DAV:rebind` with `href` followed by `segment`.
    fn to_xml<D: XmlDocument>(&self, document: &mut D) -> D::Element {
        let mut rebind = document.create_element(bind_elements::rebind(), None);
        let href = document.create_element(bind_elements::href(), Some(self.href.as_str()));
        let segment =
            document.create_element(bind_elements::segment(), Some(self.segment.as_str()));
        document.append_child(&mut rebind, href);
        document.append_child(&mut rebind, segment);
        rebind
    }
}
