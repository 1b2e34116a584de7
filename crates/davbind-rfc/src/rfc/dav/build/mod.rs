//! `WebDAV` XML serialization.

mod element;

pub use element::serialize_element;
