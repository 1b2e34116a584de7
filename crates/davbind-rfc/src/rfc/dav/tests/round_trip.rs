//! Round-trip tests through bytes.
//!
//! Payloads are encoded to an element tree, serialized, parsed back and
//! decoded again.

use crate::rfc::dav::bind::{BindPayload, RebindPayload, UnbindPayload};
use crate::rfc::dav::build::serialize_element;
use crate::rfc::dav::parse::parse_document;
use crate::rfc::dav::xml::{Document, FromXml, ToXml};

fn through_bytes<T: FromXml + ToXml>(value: &T, indent: usize) -> T {
    let element = value.to_xml(&mut Document::new());
    let xml = serialize_element(&element, indent).unwrap();
    let parsed = parse_document(xml.as_bytes()).unwrap();
    T::from_xml(&parsed).unwrap()
}

#[test]
fn rebind_round_trip_samples() {
    let samples = [
        ("/a/b", "c"),
        ("", ""),
        ("/calendars/alice/work/", "home"),
        ("http://example.com/a%20b?x=1&y=<2>", "name with \"quotes\" & 'apostrophes'"),
        ("/ünïcödé/", "日本語"),
        ("  padded  ", "\ttabbed\n"),
    ];

    for (href, segment) in samples {
        let payload = RebindPayload::new(href, segment);
        assert_eq!(through_bytes(&payload, 0), payload, "compact: {href:?} {segment:?}");
        assert_eq!(through_bytes(&payload, 2), payload, "indented: {href:?} {segment:?}");
    }
}

#[test]
fn rebind_tree_round_trip_compact() {
    let payload = RebindPayload::new("/x", "y");
    let element = payload.to_xml(&mut Document::new());

    let xml = serialize_element(&element, 0).unwrap();
    let parsed = parse_document(xml.as_bytes()).unwrap();

    assert_eq!(parsed, element);
}

#[test]
fn bind_and_unbind_round_trip() {
    let bind = BindPayload::new("/a/b", "c");
    let unbind = UnbindPayload::new("c");

    assert_eq!(through_bytes(&bind, 2), bind);
    assert_eq!(through_bytes(&unbind, 2), unbind);
}
