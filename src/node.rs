//! Owned document tree used by the converter.
//!
//! The parsed and filtered DOM is copied once into this tree (see
//! [`crate::dom::body_tree`]). Rendering only reads it; the single structural
//! edit the converter needs, dropping one image out of an anchor, produces a
//! filtered copy instead of mutating the original.

use crate::tags::{Tag, BLOCK_CONTAINERS};

/// A node of the owned tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Raw text content, whitespace preserved.
    Text(String),
    /// An element with its children.
    Element(Element),
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lowercase element name as parsed.
    pub name: String,
    /// Converter classification of `name`.
    pub tag: Tag,
    /// Attributes in source order.
    pub attributes: Vec<(String, String)>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Node {
    /// Raw text of this node and its descendants.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(content) => out.push_str(content),
            Self::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// The element, if this node is one.
    #[inline]
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }
}

impl Element {
    /// Create an element, classifying its name.
    #[must_use]
    pub fn new(name: &str, attributes: Vec<(String, String)>, children: Vec<Node>) -> Self {
        let name = name.to_ascii_lowercase();
        Self {
            tag: Tag::from_name(&name),
            name,
            attributes,
            children,
        }
    }

    /// Attribute value by (case-insensitive) name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Attribute value trimmed, or `None` when absent or blank.
    #[must_use]
    pub fn attr_trimmed(&self, name: &str) -> Option<&str> {
        self.attr(name).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Whether this element is laid out as a block.
    #[must_use]
    pub fn is_block(&self) -> bool {
        self.tag.is_block() || BLOCK_CONTAINERS.contains(&self.name.as_str())
    }

    /// Raw text of all descendants.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Direct element children.
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// First descendant element (pre-order, excluding `self`) matching `pred`.
    #[must_use]
    pub fn find_first<F>(&self, pred: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool + Copy,
    {
        for child in self.element_children() {
            if pred(child) {
                return Some(child);
            }
            if let Some(found) = child.find_first(pred) {
                return Some(found);
            }
        }
        None
    }

    /// First descendant carrying `tag`.
    #[must_use]
    pub fn find_tag(&self, tag: Tag) -> Option<&Element> {
        self.find_first(|el| el.tag == tag)
    }

    /// Whether any descendant matches `pred`.
    #[must_use]
    pub fn contains<F>(&self, pred: F) -> bool
    where
        F: Fn(&Element) -> bool + Copy,
    {
        self.find_first(pred).is_some()
    }

    /// Copy of this element with the descendant `target` (by identity) left out.
    ///
    /// `target` must be a reference into this element's own subtree; any
    /// other element leaves the copy identical to the original.
    #[must_use]
    pub fn without(&self, target: &Element) -> Element {
        let children = self
            .children
            .iter()
            .filter_map(|child| match child {
                Node::Element(el) if std::ptr::eq(el, target) => None,
                Node::Element(el) => Some(Node::Element(el.without(target))),
                Node::Text(t) => Some(Node::Text(t.clone())),
            })
            .collect();

        Element {
            name: self.name.clone(),
            tag: self.tag,
            attributes: self.attributes.clone(),
            children,
        }
    }
}
