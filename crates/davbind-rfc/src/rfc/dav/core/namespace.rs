//! XML namespace and qualified name types.

use std::borrow::Cow;

/// `DAV:` namespace URI.
pub const DAV_NS: &str = "DAV:";

/// `CalDAV` namespace URI.
pub const CALDAV_NS: &str = "urn:ietf:params:xml:ns:caldav";

/// `CardDAV` namespace URI.
pub const CARDDAV_NS: &str = "urn:ietf:params:xml:ns:carddav";

/// `CalendarServer` (Apple) namespace URI.
pub const CS_NS: &str = "http://calendarserver.org/ns/";

/// An XML namespace.
///
/// The empty URI stands for "no namespace".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(pub Cow<'static, str>);

impl Namespace {
    /// `DAV:` namespace.
    pub const DAV: Self = Self(Cow::Borrowed(DAV_NS));

    /// No namespace.
    pub const NONE: Self = Self(Cow::Borrowed(""));

    /// Creates a new namespace from a string.
    #[must_use]
    pub fn new(uri: impl Into<Cow<'static, str>>) -> Self {
        Self(uri.into())
    }

    /// Returns the namespace URI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether this is the "no namespace" value.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the conventional prefix for this namespace.
    #[must_use]
    pub fn default_prefix(&self) -> Option<&'static str> {
        match self.0.as_ref() {
            DAV_NS => Some("D"),
            CALDAV_NS => Some("C"),
            CARDDAV_NS => Some("CR"),
            CS_NS => Some("CS"),
            _ => None,
        }
    }
}

impl From<&'static str> for Namespace {
    fn from(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }
}

impl From<String> for Namespace {
    fn from(s: String) -> Self {
        Self(Cow::Owned(s))
    }
}

/// A qualified XML name (namespace + local name).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    /// The namespace URI.
    pub namespace: Namespace,
    /// The local name.
    pub local_name: Cow<'static, str>,
}

impl QName {
    /// Creates a new qualified name.
    #[must_use]
    pub fn new(namespace: impl Into<Namespace>, local_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: namespace.into(),
            local_name: local_name.into(),
        }
    }

    /// Creates a `DAV:` qualified name.
    #[must_use]
    pub fn dav(local_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: Namespace::DAV,
            local_name: local_name.into(),
        }
    }

    /// Returns the local name.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Returns the namespace URI.
    #[must_use]
    pub fn namespace_uri(&self) -> &str {
        self.namespace.as_str()
    }

    /// Returns whether this is a DAV: element.
    #[must_use]
    pub fn is_dav(&self) -> bool {
        self.namespace == Namespace::DAV
    }
}

impl std::fmt::Display for QName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}{}", self.namespace.as_str(), self.local_name)
    }
}

/// Element names defined by RFC 5842.
pub mod bind_elements {
    use super::QName;

    #[must_use]
    pub fn bind() -> QName {
        QName::dav("bind")
    }
    #[must_use]
    pub fn rebind() -> QName {
        QName::dav("rebind")
    }
    #[must_use]
    pub fn unbind() -> QName {
        QName::dav("unbind")
    }
    #[must_use]
    pub fn href() -> QName {
        QName::dav("href")
    }
    #[must_use]
    pub fn segment() -> QName {
        QName::dav("segment")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qname_display() {
        let qname = bind_elements::rebind();
        assert_eq!(qname.to_string(), "{DAV:}rebind");
    }

    #[test]
    fn qname_is_dav() {
        assert!(bind_elements::segment().is_dav());
        assert!(!QName::new(Namespace::NONE, "segment").is_dav());
    }

    #[test]
    fn bind_elements_names() {
        let names = [
            bind_elements::bind(),
            bind_elements::rebind(),
            bind_elements::unbind(),
            bind_elements::href(),
            bind_elements::segment(),
        ];
        let local: Vec<&str> = names.iter().map(QName::local_name).collect();

        assert!(names.iter().all(QName::is_dav));
        assert_eq!(local, ["bind", "rebind", "unbind", "href", "segment"]);
    }

    #[test]
    fn same_local_name_different_namespace_differs() {
        let dav = QName::dav("href");
        let other = QName::new("urn:example:other", "href");

        assert_ne!(dav, other);
        assert_eq!(dav.local_name(), other.local_name());
    }

    #[test]
    fn namespace_prefix() {
        assert_eq!(Namespace::DAV.default_prefix(), Some("D"));
        assert_eq!(Namespace::from(CALDAV_NS).default_prefix(), Some("C"));
        assert_eq!(Namespace::from("urn:example").default_prefix(), None);
    }
}
