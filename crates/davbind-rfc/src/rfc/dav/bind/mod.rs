//! RFC 5842 request bodies.
//!
//! `BIND`, `REBIND` and `UNBIND` carry small, closed-world XML bodies:
//! a root element with `DAV:segment` and (except for `UNBIND`) `DAV:href`
//! children, each present exactly once and in any order. Decoding fails on
//! the first violation with a `MalformedRequestBody` error whose message is
//! the reason reported to the client.

mod bind_payload;
mod rebind_payload;
mod request;
mod unbind_payload;

pub use bind_payload::BindPayload;
pub use rebind_payload::RebindPayload;
pub use request::BindRequest;
pub use unbind_payload::UnbindPayload;

use crate::rfc::dav::core::{QName, bind_elements};
use crate::rfc::dav::parse::{ParseError, ParseResult};
use crate::rfc::dav::xml::XmlNode;

/// Texts of the `href` and `segment` children seen so far.
#[derive(Debug, Default)]
struct BindingFields {
    href: Option<String>,
    segment: Option<String>,
}

impl BindingFields {
    fn take_href(&mut self) -> ParseResult<String> {
        self.href.take().ok_or_else(|| {
            tracing::warn!("DAV:href element expected");
            ParseError::malformed_body("href element expected")
        })
    }

    fn take_segment(&mut self) -> ParseResult<String> {
        self.segment.take().ok_or_else(|| {
            tracing::warn!("DAV:segment element expected");
            ParseError::malformed_body("segment element expected")
        })
    }
}

/// Checks the root element, then collects its `segment` and `href` children.
///
/// `href` children are only accepted when `accept_href` is set; otherwise
/// they are unexpected like any other element. Text is taken verbatim.
fn collect_fields<E: XmlNode>(
    root: &E,
    expected_root: &QName,
    accept_href: bool,
) -> ParseResult<BindingFields> {
    if !root.matches(expected_root) {
        tracing::warn!(
            expected = %expected_root,
            found = %root.name(),
            "DAV:{} element expected",
            expected_root.local_name()
        );
        return Err(ParseError::malformed_body(format!(
            "{} element expected",
            expected_root.local_name()
        )));
    }

    let segment_name = bind_elements::segment();
    let href_name = bind_elements::href();
    let mut fields = BindingFields::default();

    for child in root.child_elements() {
        if child.matches(&segment_name) {
            if fields.segment.is_some() {
                tracing::warn!("unexpected multiple occurrence of DAV:segment element");
                return Err(ParseError::malformed_body("duplicate segment element"));
            }
            fields.segment = Some(child.text().to_string());
        } else if accept_href && child.matches(&href_name) {
            if fields.href.is_some() {
                tracing::warn!("unexpected multiple occurrence of DAV:href element");
                return Err(ParseError::malformed_body("duplicate href element"));
            }
            fields.href = Some(child.text().to_string());
        } else {
            tracing::warn!(
                element = %child.name(),
                parent = %expected_root,
                "unexpected element"
            );
            return Err(ParseError::malformed_body("unexpected element"));
        }
    }

    Ok(fields)
}
