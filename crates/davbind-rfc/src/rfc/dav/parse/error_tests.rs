//! Tests for DAV XML parse errors.

use super::error::{ParseError, ParseErrorKind};
use crate::rfc::dav::core::DavError;

#[test]
fn error_new() {
    let err = ParseError::new(ParseErrorKind::XmlError, "malformed XML");
    assert!(matches!(err.kind, ParseErrorKind::XmlError));
    assert_eq!(err.message, "malformed XML");
}

#[test]
fn error_missing_element() {
    let err = ParseError::missing_element("document root");
    assert!(matches!(err.kind, ParseErrorKind::MissingElement));
    assert!(err.message.contains("document root"));
    assert!(err.message.contains("missing required element"));
}

#[test]
fn error_unexpected_element() {
    let err = ParseError::unexpected_element("{DAV:}href");
    assert!(matches!(err.kind, ParseErrorKind::UnexpectedElement));
    assert!(err.message.contains("{DAV:}href"));
}

#[test]
fn error_malformed_body_keeps_reason_verbatim() {
    let err = ParseError::malformed_body("segment element expected");
    assert!(err.is_malformed_body());
    assert_eq!(err.message, "segment element expected");
}

#[test]
fn every_kind_is_a_client_error() {
    let errors = [
        ParseError::xml("x"),
        ParseError::missing_element("x"),
        ParseError::unexpected_element("x"),
        ParseError::new(ParseErrorKind::EncodingError, "x"),
        ParseError::malformed_body("x"),
    ];

    assert_eq!(ParseError::STATUS_CODE, 400);
    for err in errors {
        let shown = err.to_string();
        assert_eq!(DavError::from(err).status, ParseError::STATUS_CODE, "{shown}");
    }
}

#[test]
fn error_display() {
    let err = ParseError::malformed_body("duplicate segment element");
    assert_eq!(
        err.to_string(),
        "malformed request body: duplicate segment element"
    );
}

#[test]
fn error_from_utf8() {
    let bytes = [0xff, 0xfe];
    let utf8_err = std::str::from_utf8(&bytes).unwrap_err();
    let err = ParseError::from(utf8_err);
    assert!(matches!(err.kind, ParseErrorKind::EncodingError));
}

#[test]
fn error_kind_display() {
    assert_eq!(format!("{}", ParseErrorKind::XmlError), "XML error");
    assert_eq!(format!("{}", ParseErrorKind::MissingElement), "missing element");
    assert_eq!(
        format!("{}", ParseErrorKind::UnexpectedElement),
        "unexpected element"
    );
    assert_eq!(format!("{}", ParseErrorKind::EncodingError), "encoding error");
    assert_eq!(
        format!("{}", ParseErrorKind::MalformedRequestBody),
        "malformed request body"
    );
}
