//! XML parsing error type.

/// Errors raised while parsing a response body as XML.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// The document had no root element.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// The document ended inside an open element.
    #[error("unexpected end of document: {0}")]
    UnexpectedEof(String),

    /// Text content could not be decoded or unescaped.
    #[error("failed to parse value: {0}")]
    ParseError(String),
}
