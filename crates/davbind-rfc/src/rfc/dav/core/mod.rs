//! `WebDAV` XML types.
//!
//! This module defines the qualified-name types and the HTTP-facing
//! error used by the BIND extension codecs.

mod error;
mod namespace;

pub use error::DavError;
pub use namespace::{CALDAV_NS, CARDDAV_NS, CS_NS, DAV_NS, Namespace, QName, bind_elements};
