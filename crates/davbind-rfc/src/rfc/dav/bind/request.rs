//! Dispatch on the root element of a BIND extension request body.

use serde::Serialize;

use super::{BindPayload, RebindPayload, UnbindPayload};
use crate::rfc::dav::core::bind_elements;
use crate::rfc::dav::parse::{ParseError, ParseResult};
use crate::rfc::dav::xml::{FromXml, ToXml, XmlDocument, XmlNode};

/// Any of the three RFC 5842 request bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum BindRequest {
    Bind(BindPayload),
    Rebind(RebindPayload),
    Unbind(UnbindPayload),
}

impl BindRequest {
    /// Returns the HTTP method this body belongs to.
    #[must_use]
    pub fn method(&self) -> &'static str {
        match self {
            Self::Bind(_) => "BIND",
            Self::Rebind(_) => "REBIND",
            Self::Unbind(_) => "UNBIND",
        }
    }
}

impl FromXml for BindRequest {
    /// Picks the body type from the root element and decodes it.
    ///
    /// ## Errors
    /// Fails with a `MalformedRequestBody` error if the root is none of
    /// `DAV:bind`, `DAV:rebind` or `DAV:unbind`, or if the chosen body is
    /// invalid.
    fn from_xml<E: XmlNode>(root: &E) -> ParseResult<Self> {
        if root.matches(&bind_elements::bind()) {
            BindPayload::from_xml(root).map(Self::Bind)
        } else if root.matches(&bind_elements::rebind()) {
            RebindPayload::from_xml(root).map(Self::Rebind)
        } else if root.matches(&bind_elements::unbind()) {
            UnbindPayload::from_xml(root).map(Self::Unbind)
        } else {
            tracing::warn!(
                found = %root.name(),
                "DAV:bind, DAV:rebind or DAV:unbind element expected"
            );
            Err(ParseError::malformed_body(
                "bind, rebind or unbind element expected",
            ))
        }
    }
}

impl ToXml for BindRequest {
    fn to_xml<D: XmlDocument>(&self, document: &mut D) -> D::Element {
        match self {
            Self::Bind(payload) => payload.to_xml(document),
            Self::Rebind(payload) => payload.to_xml(document),
            Self::Unbind(payload) => payload.to_xml(document),
        }
    }
}

impl From<RebindPayload> for BindRequest {
    fn from(payload: RebindPayload) -> Self {
        Self::Rebind(payload)
    }
}
