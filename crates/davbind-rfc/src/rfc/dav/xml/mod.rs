//! Element-tree abstraction used by the request body codecs.
//!
//! The codecs only talk to [`XmlNode`] and [`XmlDocument`], so any XML
//! tree can sit behind them. [`Element`] and [`Document`] are the owned
//! implementation that [`parse_document`](super::parse::parse_document)
//! produces and [`serialize_element`](super::build::serialize_element)
//! consumes.

mod element;

pub use element::{Document, Element};

use crate::rfc::dav::core::QName;
use crate::rfc::dav::parse::ParseResult;

/// Read access to an XML element.
pub trait XmlNode {
    /// Returns the namespace-qualified name of this element.
    fn name(&self) -> &QName;

    /// Returns whether this element has exactly the given name and namespace.
    fn matches(&self, name: &QName) -> bool {
        self.name() == name
    }

    /// Returns the child elements in document order.
    fn child_elements(&self) -> impl Iterator<Item = &Self>;

    /// Returns the concatenated text directly inside this element.
    fn text(&self) -> &str;
}

/// Element factory for serialization.
pub trait XmlDocument {
    /// Element type owned by this document.
    type Element: XmlNode;

    /// Creates a new element, optionally holding `text`.
    fn create_element(&mut self, name: QName, text: Option<&str>) -> Self::Element;

    /// Appends `child` as the last child of `parent`.
    fn append_child(&mut self, parent: &mut Self::Element, child: Self::Element);
}

/// Decodes a value from a request body root element.
pub trait FromXml: Sized {
    /// ## Errors
    /// Returns a `MalformedRequestBody` parse error if `root` is not a valid
    /// body for this type.
    fn from_xml<E: XmlNode>(root: &E) -> ParseResult<Self>;
}

/// Encodes a value into a new element owned by `document`.
pub trait ToXml {
    fn to_xml<D: XmlDocument>(&self, document: &mut D) -> D::Element;
}
