//! Event-based XML parsing into the generic tree.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::XmlError;
use crate::value::{XmlNode, XmlValue};

/// Parse an XML document into the generic tree.
///
/// Returns the content of the root element: a [`XmlValue::Node`] of its
/// children for the usual response shapes, or [`XmlValue::Text`] for a
/// degenerate text-only document. The root element's own name is not
/// part of the tree; Query API callers already know which action they
/// invoked.
///
/// # Errors
///
/// Returns [`XmlError`] if the document is not well-formed XML or ends
/// before the root element closes.
pub fn from_xml(xml: &[u8]) -> Result<XmlValue, XmlError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    // Skip the declaration, comments, and processing instructions to find
    // the root element.
    loop {
        match reader.read_event()? {
            Event::Start(_) => return read_value(&mut reader),
            Event::Empty(_) => return Ok(XmlValue::Node(XmlNode::new())),
            Event::Eof => {
                return Err(XmlError::MissingElement("root element".to_string()));
            }
            _ => {}
        }
    }
}

/// Read one element's content and consume its end tag.
///
/// The reader is positioned just after the element's `Start` event. An
/// element with child elements becomes a node (stray interleaved text is
/// dropped); an element with only text becomes a leaf; an element with
/// neither becomes empty text.
fn read_value(reader: &mut Reader<&[u8]>) -> Result<XmlValue, XmlError> {
    let mut node = XmlNode::new();
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = element_name(&e)?;
                let child = read_value(reader)?;
                node.insert(name, child);
            }
            Event::Empty(e) => {
                let name = element_name(&e)?;
                node.insert(name, XmlValue::Text(String::new()));
            }
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(XmlError::UnexpectedEof(
                    "document ended inside an open element".to_string(),
                ));
            }
            _ => {}
        }
    }

    if node.is_empty() {
        Ok(XmlValue::Text(text))
    } else {
        Ok(XmlValue::Node(node))
    }
}

/// Decode an element name to an owned string.
fn element_name(start: &BytesStart<'_>) -> Result<String, XmlError> {
    let name = start.name();
    std::str::from_utf8(name.as_ref())
        .map(ToOwned::to_owned)
        .map_err(|e| XmlError::ParseError(e.to_string()))
}
