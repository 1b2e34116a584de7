//! Element tree XML serialization.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::rfc::dav::core::{Namespace, QName};
use crate::rfc::dav::xml::{Element, XmlNode};

/// Serializes an element tree to an XML document.
///
/// ## Summary
/// Every namespace used in the tree is declared once on the root element,
/// using the conventional prefix where one exists (`D` for `DAV:`) and
/// `ns0`, `ns1`, ... otherwise. Elements without a namespace are written
/// unprefixed. An `indent` of `0` writes everything on one line.
///
/// ## Errors
/// Returns an error if XML writing fails or if the generated XML is not valid UTF-8
/// (which should never happen with well-formed input).
pub fn serialize_element(root: &Element, indent: usize) -> Result<String, quick_xml::Error> {
    let mut writer = if indent == 0 {
        Writer::new(Vec::new())
    } else {
        Writer::new_with_indent(Vec::new(), b' ', indent)
    };

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let prefixes = NamespacePrefixes::collect(root);
    write_element(&mut writer, root, &prefixes, true)?;

    let result = writer.into_inner();
    String::from_utf8(result).map_err(|e| {
        tracing::error!("Generated invalid UTF-8 in element XML: {}", e);
        quick_xml::Error::Io(std::sync::Arc::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "Invalid UTF-8 in XML output",
        )))
    })
}

fn write_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    element: &Element,
    prefixes: &NamespacePrefixes,
    is_root: bool,
) -> Result<(), quick_xml::Error> {
    let elem_name = prefixes.qualified(element.name());

    let mut start = BytesStart::new(elem_name.as_str());
    if is_root {
        for (prefix, namespace) in &prefixes.bindings {
            let key = format!("xmlns:{prefix}");
            start.push_attribute((key.as_str(), namespace.as_str()));
        }
    }

    if element.children().is_empty() && element.text().is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if !element.text().is_empty() {
        writer.write_event(Event::Text(BytesText::new(element.text())))?;
    }
    for child in element.children() {
        write_element(writer, child, prefixes, false)?;
    }
    writer.write_event(Event::End(BytesEnd::new(elem_name.as_str())))?;

    Ok(())
}

/// Prefix assignments for the namespaces used in one tree.
struct NamespacePrefixes {
    bindings: Vec<(String, Namespace)>,
}

impl NamespacePrefixes {
    fn collect(root: &Element) -> Self {
        let mut namespaces: Vec<Namespace> = Vec::new();
        collect_namespaces(root, &mut namespaces);

        let mut generated = 0;
        let bindings = namespaces
            .into_iter()
            .map(|namespace| {
                let prefix = if let Some(prefix) = namespace.default_prefix() {
                    prefix.to_string()
                } else {
                    let prefix = format!("ns{generated}");
                    generated += 1;
                    prefix
                };
                (prefix, namespace)
            })
            .collect();

        Self { bindings }
    }

    fn qualified(&self, name: &QName) -> String {
        self.bindings
            .iter()
            .find(|(_, namespace)| *namespace == name.namespace)
            .map_or_else(
                || name.local_name().to_string(),
                |(prefix, _)| format!("{}:{}", prefix, name.local_name()),
            )
    }
}

fn collect_namespaces(element: &Element, namespaces: &mut Vec<Namespace>) {
    let namespace = &element.name().namespace;
    if !namespace.is_none() && !namespaces.contains(namespace) {
        namespaces.push(namespace.clone());
    }
    for child in element.children() {
        collect_namespaces(child, namespaces);
    }
}
