//! DAV error types.

use std::fmt;

use crate::rfc::dav::parse::ParseError;

/// A `WebDAV` error condition.
#[derive(Debug, Clone)]
pub struct DavError {
    /// HTTP status code.
    pub status: u16,
    /// Error description.
    pub message: String,
}

impl DavError {
    /// Creates a new DAV error.
    #[must_use]
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 400 Bad Request
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    /// 413 Payload Too Large
    #[must_use]
    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(413, message)
    }

    /// Returns whether the status is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }
}

impl From<ParseError> for DavError {
    fn from(err: ParseError) -> Self {
        Self::new(ParseError::STATUS_CODE, err.message)
    }
}

impl fmt::Display for DavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.message)
    }
}

impl std::error::Error for DavError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_new() {
        let err = DavError::new(404, "Resource not found");
        assert_eq!(err.status, 404);
        assert_eq!(err.message, "Resource not found");
    }

    #[test]
    fn error_display() {
        let err = DavError::bad_request("href element expected");
        assert_eq!(err.to_string(), "400 href element expected");
        assert!(err.is_client_error());
    }

    #[test]
    fn from_malformed_body_is_bad_request() {
        let err = DavError::from(ParseError::malformed_body("duplicate href element"));
        assert_eq!(err.status, 400);
        assert_eq!(err.message, "duplicate href element");
    }

    #[test]
    fn from_xml_error_is_bad_request() {
        let err = DavError::from(ParseError::xml("unexpected end of document"));
        assert_eq!(err.status, 400);
        assert_eq!(err.message, "unexpected end of document");
    }
}
