//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate. Parsing and the removal filter work
//! on the mutable `dom_query` document; once filtering is done the body is
//! copied into the owned [`Node`] tree that the converter walks.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

use dom_query::NodeRef;

use crate::node::{Element, Node};

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get all attributes of a node as key-value pairs
#[must_use]
pub fn node_attributes(node: &NodeRef) -> Vec<(String, String)> {
    node.attrs()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect()
}

/// Remove each node of the selection, returning how many were matched.
pub fn remove_all(sel: &Selection) -> usize {
    let count = sel.length();
    if count > 0 {
        sel.remove();
    }
    count
}

/// Query all elements by CSS selector, treating unparsable selectors as matching nothing.
#[must_use]
pub fn try_query_all<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    doc.try_select(selector)
}

/// Copy the `<body>` of a document into an owned element tree.
///
/// Documents are always wrapped into `html/head/body` by the parser; should
/// no body be present the result is an empty `body` element.
#[must_use]
pub fn body_tree(doc: &Document) -> Element {
    let body = doc.select("body");
    match body.nodes().first() {
        Some(node) => Element::new("body", node_attributes(node), owned_children(node)),
        None => Element::new("body", Vec::new(), Vec::new()),
    }
}

fn owned_children(node: &NodeRef) -> Vec<Node> {
    let mut children = Vec::new();
    let mut child = node.first_child();
    while let Some(current) = child {
        if let Some(owned) = to_owned_node(&current) {
            children.push(owned);
        }
        child = current.next_sibling();
    }
    children
}

/// Convert one DOM node into an owned node; comments, doctypes and the like are skipped.
fn to_owned_node(node: &NodeRef) -> Option<Node> {
    if node.is_text() {
        return Some(Node::Text(node.text().to_string()));
    }
    if node.is_element() {
        let name = node.node_name()?;
        return Some(Node::Element(Element::new(
            &name,
            node_attributes(node),
            owned_children(node),
        )));
    }
    None
}
