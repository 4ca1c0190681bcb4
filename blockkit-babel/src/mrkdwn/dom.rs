//! Parsed view of the intermediate HTML.

use html5ever::tendril::TendrilSink;
use html5ever::parse_document;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// A parsed fragment.
///
/// Owns the whole document: dropping an `RcDom` node empties its subtree, so
/// handles into the tree are only meaningful while this value is alive.
pub struct ParsedFragment {
    dom: RcDom,
}

impl ParsedFragment {
    pub fn parse(html: &str) -> Self {
        Self {
            dom: parse_document(RcDom::default(), Default::default()).one(html),
        }
    }

    /// The `<body>` element holding the fragment.
    pub fn body(&self) -> Handle {
        find_element(&self.dom.document, "html")
            .and_then(|root| find_element(&root, "body"))
            .unwrap_or_else(|| self.dom.document.clone())
    }
}

fn find_element(parent: &Handle, name: &str) -> Option<Handle> {
    parent
        .children
        .borrow()
        .iter()
        .find(|child| tag_name(child).as_deref() == Some(name))
        .cloned()
}

/// Lowercase local name of an element.
pub fn tag_name(handle: &Handle) -> Option<String> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

pub fn is_element(handle: &Handle, name: &str) -> bool {
    matches!(&handle.data, NodeData::Element { name: qual, .. } if &*qual.local == name)
}

pub fn attr(handle: &Handle, name: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| &*a.name.local == name)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

/// Concatenated text of all descendant text nodes.
pub fn text_content(handle: &Handle) -> String {
    let mut out = String::new();
    collect_text(handle, &mut out);
    out
}

fn collect_text(handle: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &handle.data {
        out.push_str(&contents.borrow());
    }
    for child in handle.children.borrow().iter() {
        collect_text(child, out);
    }
}

pub fn element_children(handle: &Handle) -> Vec<Handle> {
    handle
        .children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
        .collect()
}

/// Whether an element produces nothing worth keeping: only whitespace text and
/// no line breaks.
pub fn is_blank(handle: &Handle) -> bool {
    let mut has_break = false;
    walk_elements(handle, &mut |el| has_break |= is_element(el, "br"));
    !has_break && text_content(handle).trim().is_empty()
}

fn walk_elements(handle: &Handle, visit: &mut impl FnMut(&Handle)) {
    for child in handle.children.borrow().iter() {
        if matches!(child.data, NodeData::Element { .. }) {
            visit(child);
            walk_elements(child, visit);
        }
    }
}
