//! Node tree for the wombat markup dialect.
//!
//! This crate provides the tree a parsed document is represented as (a
//! closed sum type over text, comment, and element nodes) plus the
//! serializer that renders a tree back into markup text.
//!
//! # Design
//!
//! Ownership is a strict tree: each child is owned by exactly one parent
//! (`Vec<Node>` children, no shared or back references). Nodes are built
//! once by the parser and not mutated afterwards; there is no persistent
//! state between calls.
//!
//! Serialization is total: every well-formed [`Node`] value renders via
//! [`fmt::Display`], and [`serialize`] concatenates a sequence. The derived
//! `serde` impls expose the tree in an interchange shape
//! (`{"type": "element", "tagName": …, "attributes": …, "children": …}`).

use core::fmt;
use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Map of attribute names to values for an element.
///
/// Insertion-ordered, so serialized attribute order is deterministic and
/// matches the order attributes appeared in the opening tag. Keys are
/// unique; a duplicated attribute keeps its first position with the last
/// value written.
pub type AttributesMap = IndexMap<String, String>;

/// Element kinds that never have children or a closing tag.
const VOID_ELEMENTS: [&str; 8] = ["br", "img", "input", "link", "meta", "hr", "source", "area"];

/// Element kinds whose interior is opaque verbatim text, never parsed as
/// markup.
const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

/// Returns true if `tag_name` is a void element kind (`br`, `img`, ...).
///
/// Void elements always have empty children, are never searched for a
/// matching closing tag, and serialize without one.
#[must_use]
pub fn is_void_element(tag_name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|name| name.eq_ignore_ascii_case(tag_name))
}

/// Returns true if `tag_name` is a raw-text element kind (`script`, `style`).
///
/// The entire inner span of a raw-text element becomes a single verbatim
/// [`Node::Text`] child, preserving embedded `<`/`>` and newlines that would
/// otherwise be misread as markup.
#[must_use]
pub fn is_raw_text_element(tag_name: &str) -> bool {
    RAW_TEXT_ELEMENTS
        .iter()
        .any(|name| name.eq_ignore_ascii_case(tag_name))
}

/// A single node in a parsed document.
///
/// Exactly one payload is active at a time. A document is an ordered
/// sequence of these at the top level (`Vec<Node>`), never a single root:
/// markup fragments may have several top-level siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// Character data between tags.
    ///
    /// Non-empty after trimming, except the verbatim content of a raw-text
    /// element, which may carry leading/trailing whitespace significant to
    /// reconstruction.
    Text {
        /// The text itself.
        content: String,
    },
    /// A `<!-- ... -->` comment.
    Comment {
        /// Trimmed inner comment text, excluding the delimiter markers.
        content: String,
    },
    /// An element with a tag name, attributes, and children.
    Element(ElementData),
}

impl Node {
    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    /// Create a comment node.
    pub fn comment(content: impl Into<String>) -> Self {
        Self::Comment {
            content: content.into(),
        }
    }

    /// Create an element node.
    #[must_use]
    pub const fn element(data: ElementData) -> Self {
        Self::Element(data)
    }

    /// Element payload, if this node is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&ElementData> {
        match self {
            Self::Element(data) => Some(data),
            _ => None,
        }
    }

    /// Text content, if this node is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { content } => Some(content),
            _ => None,
        }
    }

    /// Comment content, if this node is a comment.
    #[must_use]
    pub fn as_comment(&self) -> Option<&str> {
        match self {
            Self::Comment { content } => Some(content),
            _ => None,
        }
    }

    /// Concatenated text of this node and all its descendants, in document
    /// order. Comments contribute nothing.
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Text { content } => content.clone(),
            Self::Comment { .. } => String::new(),
            Self::Element(data) => data.children.iter().map(Self::text_content).collect(),
        }
    }
}

/// Element-specific data: tag name, attribute list, children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementData {
    /// Lowercased tag name, matching `[a-zA-Z0-9_-]+`.
    pub tag_name: String,
    /// Attribute list in source order.
    ///
    /// A boolean attribute (present without `=value`) maps to the empty
    /// string, indistinguishable from one explicitly set to `""`.
    #[serde(rename = "attributes")]
    pub attrs: AttributesMap,
    /// Child nodes in document order. Always empty for void elements.
    pub children: Vec<Node>,
}

impl ElementData {
    /// Create element data with the given tag name, attributes, and children.
    pub fn new(tag_name: impl Into<String>, attrs: AttributesMap, children: Vec<Node>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs,
            children,
        }
    }

    /// Value of an attribute, if present.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// The element's `id` attribute value, if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// The set of class names from the `class` attribute.
    #[must_use]
    pub fn classes(&self) -> HashSet<&str> {
        self.attrs
            .get("class")
            .map_or_else(HashSet::new, |list| list.split_whitespace().collect())
    }

    /// Whether this element is a void kind (no children, no closing tag).
    #[must_use]
    pub fn is_void(&self) -> bool {
        is_void_element(&self.tag_name)
    }

    /// Whether this element is a raw-text kind.
    #[must_use]
    pub fn is_raw_text(&self) -> bool {
        is_raw_text_element(&self.tag_name)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { content } => f.write_str(content),
            Self::Comment { content } => write!(f, "<!-- {content} -->"),
            Self::Element(data) => fmt::Display::fmt(data, f),
        }
    }
}

impl fmt::Display for ElementData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag_name)?;
        for (name, value) in &self.attrs {
            if value.is_empty() {
                write!(f, " {name}")?;
            } else {
                write!(f, " {name}=\"{value}\"")?;
            }
        }
        write!(f, ">")?;
        if self.is_void() {
            return Ok(());
        }
        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag_name)
    }
}

/// Render a sequence of nodes back into markup text.
///
/// Concatenates each node's rendering in order, no separators inserted.
/// Total and pure: no failure modes for any well-formed [`Node`] value.
/// Structural inverse of parsing for well-formed input: the result matches
/// the original document up to whitespace normalization, not byte-for-byte
/// (inter-tag whitespace and attribute-quoting style are not preserved).
#[must_use]
pub fn serialize(nodes: &[Node]) -> String {
    nodes.iter().map(ToString::to_string).collect()
}
