//! The generic response value and its accessors.

use std::fmt;

/// Element names that always parse as lists, even with a single element.
const FORCED_LIST_NAMES: &[&str] = &["item", "member"];

/// A parsed XML value: text, a node of named children, or a list.
///
/// Immutable after parsing; callers consume it read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlValue {
    /// Text content of a leaf element.
    Text(String),
    /// An element with named children.
    Node(XmlNode),
    /// Repeated sibling elements of the same name.
    List(Vec<XmlValue>),
}

impl XmlValue {
    /// The text content, if this is a leaf.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The node, if this is an element with children.
    #[must_use]
    pub fn as_node(&self) -> Option<&XmlNode> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Consume the value, yielding the node if this is one.
    #[must_use]
    pub fn into_node(self) -> Option<XmlNode> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Look up a named child of this value, if it is a node.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&XmlValue> {
        self.as_node().and_then(|node| node.get(name))
    }

    /// Index into this value viewed as a sequence.
    ///
    /// A list indexes its elements; any other value is a one-element
    /// sequence of itself.
    #[must_use]
    pub fn index(&self, i: usize) -> Option<&XmlValue> {
        match self {
            Self::List(list) => list.get(i),
            other if i == 0 => Some(other),
            _ => None,
        }
    }

    /// Iterate this value as a sequence.
    ///
    /// A list yields its elements; any other value yields itself once.
    /// This is the uniform view for repeated elements that may arrive
    /// singly.
    #[must_use]
    pub fn items(&self) -> Items<'_> {
        match self {
            Self::List(list) => Items::Slice(list.iter()),
            other => Items::Single(Some(other)),
        }
    }

    /// The number of elements in the sequence view.
    #[must_use]
    pub fn item_count(&self) -> usize {
        match self {
            Self::List(list) => list.len(),
            _ => 1,
        }
    }
}

/// Iterator over a value's sequence view. See [`XmlValue::items`].
#[derive(Debug)]
pub enum Items<'a> {
    /// Iterating the elements of a list.
    Slice(std::slice::Iter<'a, XmlValue>),
    /// Iterating a non-list value as a one-element sequence.
    Single(Option<&'a XmlValue>),
}

impl<'a> Iterator for Items<'a> {
    type Item = &'a XmlValue;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Slice(iter) => iter.next(),
            Self::Single(value) => value.take(),
        }
    }
}

/// An element's named children, in document order.
///
/// Lookup is by name; insertion order is preserved for display and
/// iteration. Duplicate names collapse into an [`XmlValue::List`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    entries: Vec<(String, XmlValue)>,
}

impl XmlNode {
    /// Create an empty node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the value for a child name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&XmlValue> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, value)| value)
    }

    /// Look up the text content of a child, if it is a leaf.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(XmlValue::as_str)
    }

    /// The children in document order.
    #[must_use]
    pub fn entries(&self) -> &[(String, XmlValue)] {
        &self.entries
    }

    /// Number of distinct child names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the node has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a child, applying the list conventions.
    ///
    /// Children named `item` or `member` always land in a list. Any other
    /// name becomes a list when a second sibling with the same name is
    /// inserted.
    pub fn insert(&mut self, name: impl Into<String>, value: XmlValue) {
        let name = name.into();
        if let Some((_, existing)) = self
            .entries
            .iter_mut()
            .find(|(entry_name, _)| *entry_name == name)
        {
            match existing {
                XmlValue::List(list) => list.push(value),
                _ => {
                    let previous = std::mem::replace(existing, XmlValue::List(Vec::new()));
                    if let XmlValue::List(list) = existing {
                        list.push(previous);
                        list.push(value);
                    }
                }
            }
        } else if FORCED_LIST_NAMES.contains(&name.as_str()) {
            self.entries.push((name, XmlValue::List(vec![value])));
        } else {
            self.entries.push((name, value));
        }
    }
}

impl fmt::Display for XmlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, 0)
    }
}

impl fmt::Display for XmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0)
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &XmlValue, depth: usize) -> fmt::Result {
    match value {
        XmlValue::Text(text) => write!(f, "{text:?}"),
        XmlValue::Node(node) => write_node(f, node, depth),
        XmlValue::List(list) => {
            write!(f, "[")?;
            for element in list {
                writeln!(f)?;
                write!(f, "{:indent$}- ", "", indent = (depth + 1) * 2)?;
                write_value(f, element, depth + 1)?;
            }
            writeln!(f)?;
            write!(f, "{:indent$}]", "", indent = depth * 2)
        }
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &XmlNode, depth: usize) -> fmt::Result {
    write!(f, "{{")?;
    for (name, value) in &node.entries {
        writeln!(f)?;
        write!(f, "{:indent$}{name}: ", "", indent = (depth + 1) * 2)?;
        write_value(f, value, depth + 1)?;
    }
    writeln!(f)?;
    write!(f, "{:indent$}}}", "", indent = depth * 2)
}
