//! Request body XML parsing into an owned element tree.

use quick_xml::Reader;
use quick_xml::events::{BytesRef, BytesStart, Event};

use super::error::{ParseError, ParseResult};
use crate::rfc::dav::core::{Namespace, QName};
use crate::rfc::dav::xml::{Element, XmlNode};

/// Namespace bound to the reserved `xml` prefix.
const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// Parses a request body into its root [`Element`].
///
/// ## Summary
/// Element names are resolved against the namespace declarations in scope.
/// An unprefixed element with no default namespace has no namespace; it is
/// never assumed to be `DAV:`. Text, references and CDATA directly inside an
/// element are concatenated verbatim into its text.
///
/// ## Errors
/// Returns an error if the XML is malformed, uses an undeclared prefix,
/// has no root element or more than one.
#[tracing::instrument(skip(xml), fields(xml_len = xml.len()))]
pub fn parse_document(xml: &[u8]) -> ParseResult<Element> {
    let mut reader = Reader::from_reader(xml);

    let mut buf = Vec::new();
    let mut scopes = NamespaceScopes::default();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let element = open_element(e, &mut scopes)?;
                reject_second_root(&stack, root.as_ref(), &element)?;
                stack.push(element);
            }
            Ok(Event::Empty(ref e)) => {
                let element = open_element(e, &mut scopes)?;
                scopes.pop();
                reject_second_root(&stack, root.as_ref(), &element)?;
                close_element(element, &mut stack, &mut root);
            }
            Ok(Event::End(_)) => {
                scopes.pop();
                if let Some(element) = stack.pop() {
                    close_element(element, &mut stack, &mut root);
                }
            }
            Ok(Event::Text(ref e)) => {
                let decoded = reader.decoder().decode(e.as_ref())?;
                append_text(&mut stack, &decoded)?;
            }
            Ok(Event::CData(ref e)) => {
                let text = std::str::from_utf8(e.as_ref())?;
                append_text(&mut stack, text)?;
            }
            Ok(Event::GeneralRef(ref e)) => {
                let resolved = resolve_reference(e)?;
                append_text(&mut stack, &resolved)?;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::xml(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(ParseError::xml(format!(
            "unexpected end of document inside {}",
            open.name()
        )));
    }

    let root = root.ok_or_else(|| ParseError::missing_element("document root"))?;
    tracing::debug!(root = %root.name(), "Parsed XML document");
    Ok(root)
}

/// Pushes the element's namespace declarations and resolves its name.
fn open_element(e: &BytesStart<'_>, scopes: &mut NamespaceScopes) -> ParseResult<Element> {
    let mut declared = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;
        if let Some(prefix) = key.strip_prefix("xmlns:") {
            declared.push((prefix.to_string(), value.to_string()));
        } else if key == "xmlns" {
            declared.push((String::new(), value.to_string()));
        } else {
            // Other attributes ignored
        }
    }
    scopes.push(declared);

    let name_bytes = e.name();
    let name = std::str::from_utf8(name_bytes.as_ref())?;
    let (prefix, local_name) = name.split_once(':').unwrap_or(("", name));

    let namespace = match scopes.resolve(prefix) {
        Some(uri) => Namespace::new(uri.to_string()),
        None if prefix.is_empty() => Namespace::NONE,
        None if prefix == "xml" => Namespace::new(XML_NS),
        None => {
            tracing::warn!(prefix, element = %name, "Undeclared namespace prefix");
            return Err(ParseError::xml(format!(
                "undeclared namespace prefix: {prefix}"
            )));
        }
    };

    Ok(Element::new(QName::new(namespace, local_name.to_string())))
}

fn reject_second_root(
    stack: &[Element],
    root: Option<&Element>,
    element: &Element,
) -> ParseResult<()> {
    if stack.is_empty() && root.is_some() {
        return Err(ParseError::unexpected_element(&element.name().to_string()));
    }
    Ok(())
}

/// Attaches a finished element to its parent, or makes it the root.
fn close_element(element: Element, stack: &mut [Element], root: &mut Option<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.push_child(element),
        None => *root = Some(element),
    }
}

fn append_text(stack: &mut [Element], text: &str) -> ParseResult<()> {
    match stack.last_mut() {
        Some(current) => current.push_text(text),
        None if text.trim().is_empty() => {}
        None => return Err(ParseError::xml("text outside of root element")),
    }
    Ok(())
}

/// Resolves a character reference or one of the predefined entities.
fn resolve_reference(e: &BytesRef<'_>) -> ParseResult<String> {
    if let Some(ch) = e
        .resolve_char_ref()
        .map_err(|err| ParseError::xml(err.to_string()))?
    {
        return Ok(ch.to_string());
    }

    let name = e.decode()?;
    quick_xml::escape::resolve_predefined_entity(&name)
        .map(str::to_string)
        .ok_or_else(|| ParseError::xml(format!("unknown entity reference: &{name};")))
}

/// Namespace declarations, one frame per open element.
#[derive(Debug, Default)]
struct NamespaceScopes {
    frames: Vec<Vec<(String, String)>>,
}

impl NamespaceScopes {
    fn push(&mut self, declared: Vec<(String, String)>) {
        self.frames.push(declared);
    }

    fn pop(&mut self) {
        self.frames.pop();
    }

    /// Returns the URI bound to `prefix`; an empty URI means "no namespace".
    fn resolve(&self, prefix: &str) -> Option<&str> {
        self.frames
            .iter()
            .rev()
            .flat_map(|frame| frame.iter().rev())
            .find(|(p, _)| p == prefix)
            .map(|(_, uri)| uri.as_str())
    }
}
