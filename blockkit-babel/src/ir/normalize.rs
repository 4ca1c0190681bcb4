//! Child normalization
//!
//! Builders accept children in whatever shape is convenient: a single node, a
//! string, a vector built from an iterator, an `Option` from a conditional, or
//! vectors of vectors. [`normalize`] turns any of those into the flat list of
//! [`Child`] values stored on a node.
//!
//! Only collections are flattened. A node is always a single child, even an
//! `Array` node returned by a component: "this component renders to three blocks"
//! must stay distinguishable from three sibling children.

use crate::ir::nodes::{Child, Node};

/// Heterogeneous child input accepted by builders.
#[derive(Debug, Clone, PartialEq)]
pub enum ChildInput {
    Node(Node),
    Text(String),
    List(Vec<ChildInput>),
    /// Dropped during normalization (`None`, booleans, `()`)
    Empty,
}

/// Flatten nested child input into an ordered list of nodes and strings.
pub fn normalize(children: impl Into<ChildInput>) -> Vec<Child> {
    let mut out = Vec::new();
    flatten_into(children.into(), &mut out);
    out
}

fn flatten_into(input: ChildInput, out: &mut Vec<Child>) {
    match input {
        ChildInput::Node(node) => out.push(Child::Node(node)),
        ChildInput::Text(text) => out.push(Child::Text(text)),
        ChildInput::List(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
        ChildInput::Empty => {}
    }
}

impl From<Node> for ChildInput {
    fn from(node: Node) -> Self {
        ChildInput::Node(node)
    }
}

impl From<Child> for ChildInput {
    fn from(child: Child) -> Self {
        match child {
            Child::Node(node) => ChildInput::Node(node),
            Child::Text(text) => ChildInput::Text(text),
        }
    }
}

impl From<&str> for ChildInput {
    fn from(text: &str) -> Self {
        ChildInput::Text(text.to_string())
    }
}

impl From<String> for ChildInput {
    fn from(text: String) -> Self {
        ChildInput::Text(text)
    }
}

impl From<&String> for ChildInput {
    fn from(text: &String) -> Self {
        ChildInput::Text(text.clone())
    }
}

impl From<bool> for ChildInput {
    fn from(_: bool) -> Self {
        ChildInput::Empty
    }
}

impl From<()> for ChildInput {
    fn from(_: ()) -> Self {
        ChildInput::Empty
    }
}

macro_rules! display_child_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ChildInput {
                fn from(value: $ty) -> Self {
                    ChildInput::Text(value.to_string())
                }
            }
        )*
    };
}

display_child_input!(i32, i64, u32, u64, usize, f64, char);

impl<T: Into<ChildInput>> From<Option<T>> for ChildInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(ChildInput::Empty, Into::into)
    }
}

impl<T: Into<ChildInput>> From<Vec<T>> for ChildInput {
    fn from(items: Vec<T>) -> Self {
        ChildInput::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ChildInput>, const N: usize> From<[T; N]> for ChildInput {
    fn from(items: [T; N]) -> Self {
        ChildInput::List(items.into_iter().map(Into::into).collect())
    }
}
