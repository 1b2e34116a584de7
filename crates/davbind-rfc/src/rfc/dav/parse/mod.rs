//! `WebDAV` XML parsing.
//!
//! This module turns request body bytes into an [`Element`](super::xml::Element)
//! tree using the `quick-xml` crate.

mod document;
mod error;

#[cfg(test)]
mod error_tests;

pub use document::parse_document;
pub use error::{ParseError, ParseErrorKind, ParseResult};
