//! `BIND` request body (RFC 5842 §4).

use serde::Serialize;

use super::collect_fields;
use crate::rfc::dav::core::bind_elements;
use crate::rfc::dav::parse::ParseResult;
use crate::rfc::dav::xml::{FromXml, ToXml, XmlDocument, XmlNode};

/// Request to add a binding named `segment` to the resource at `href`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BindPayload {
    href: String,
    segment: String,
}

impl BindPayload {
    #[must_use]
    pub fn new(href: impl Into<String>, segment: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            segment: segment.into(),
        }
    }

    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    #[must_use]
    pub fn segment(&self) -> &str {
        &self.segment
    }
}

impl FromXml for BindPayload {
    fn from_xml<E: XmlNode>(root: &E) -> ParseResult<Self> {
        let mut fields = collect_fields(root, &bind_elements::bind(), true)?;
        let href = fields.take_href()?;
        let segment = fields.take_segment()?;

        tracing::debug!(%href, %segment, "Decoded DAV:bind body");
        Ok(Self { href, segment })
    }
}

impl ToXml for BindPayload {
    fn to_xml<D: XmlDocument>(&self, document: &mut D) -> D::Element {
        let mut bind = document.create_element(bind_elements::bind(), None);
        let href = document.create_element(bind_elements::href(), Some(self.href.as_str()));
        let segment =
            document.create_element(bind_elements::segment(), Some(self.segment.as_str()));
        document.append_child(&mut bind, href);
        document.append_child(&mut bind, segment);
        bind
    }
}
