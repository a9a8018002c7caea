//! Generic XML response tree for AWS Query API responses.
//!
//! Query API responses are XML documents whose shape varies per action.
//! Rather than one typed struct per action, this crate parses any
//! response into a generic recursive value (text, a node of named
//! children, or a list) navigated with explicit accessors.
//!
//! # Conventions
//!
//! - Repeated elements are conventionally named `item` or `member`;
//!   these always parse as lists, even when exactly one is present.
//!   Any other element name repeated among siblings is promoted to a
//!   list on its second occurrence.
//! - Text content is entity-unescaped; whitespace-only text is dropped.
//! - An element with no children and no text reads as empty text.
//!
//! # Example
//!
//! ```
//! use querystack_xml::from_xml;
//!
//! let tree = from_xml(
//!     b"<DescribeKeyPairsResponse>\
//!         <keySet><item><keyName>dev</keyName></item></keySet>\
//!       </DescribeKeyPairsResponse>",
//! )
//! .unwrap();
//!
//! let names: Vec<&str> = tree
//!     .get("keySet")
//!     .and_then(|set| set.get("item"))
//!     .map(|items| {
//!         items
//!             .items()
//!             .filter_map(|item| item.get("keyName").and_then(|n| n.as_str()))
//!             .collect()
//!     })
//!     .unwrap_or_default();
//! assert_eq!(names, vec!["dev"]);
//! ```

mod error;
mod parse;
mod value;

pub use error::XmlError;
pub use parse::from_xml;
pub use value::{Items, XmlNode, XmlValue};
