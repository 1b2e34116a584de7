//! `WebDAV` BIND extension (RFC 5842) request bodies.

pub mod bind;
pub mod build;
pub mod core;
pub mod parse;
pub mod xml;

#[cfg(test)]
mod tests;
