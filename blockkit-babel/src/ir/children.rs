//! Helpers for components that inspect the children they were given.
//!
//! Children are counted and visited after [`normalize`], so nested lists and
//! dropped values never show up. An `Array` node without a post-build hook
//! groups its children the way a fragment does: [`map`] and [`count`] see it
//! as one child, while [`to_array`] splices its children in place.

use crate::error::RenderError;
use crate::ir::nodes::{Child, Node, NodeKind};
use crate::ir::normalize::{normalize, ChildInput};

/// Number of times [`map`] would invoke its callback.
pub fn count(children: impl Into<ChildInput>) -> usize {
    normalize(children).len()
}

/// Call `f` with every immediate child and its index.
pub fn map<T>(children: impl Into<ChildInput>, mut f: impl FnMut(Child, usize) -> T) -> Vec<T> {
    normalize(children)
        .into_iter()
        .enumerate()
        .map(|(index, child)| f(child, index))
        .collect()
}

pub fn for_each(children: impl Into<ChildInput>, mut f: impl FnMut(Child, usize)) {
    for (index, child) in normalize(children).into_iter().enumerate() {
        f(child, index);
    }
}

/// The single node in `children`.
pub fn only(children: impl Into<ChildInput>) -> Result<Node, RenderError> {
    let mut children = normalize(children);
    match (children.pop(), children.is_empty()) {
        (Some(Child::Node(node)), true) => Ok(node),
        (last, _) => Err(RenderError::ExpectedSingleChild {
            count: children.len() + usize::from(last.is_some()),
        }),
    }
}

/// Flat list of children with fragments spliced in.
pub fn to_array(children: impl Into<ChildInput>) -> Vec<Child> {
    let mut out = Vec::new();
    splice_into(normalize(children), &mut out);
    out
}

fn splice_into(children: Vec<Child>, out: &mut Vec<Child>) {
    for child in children {
        match child {
            Child::Node(node) if is_fragment(&node) => splice_into(node.children, out),
            other => out.push(other),
        }
    }
}

fn is_fragment(node: &Node) -> bool {
    node.kind == NodeKind::Array && node.hook.is_none()
}
