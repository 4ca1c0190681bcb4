//! Helpers shared by the integration tests.

use blockkit_babel::{h, render_mrkdwn, AttrValue, Attributes, ChildInput, FormatOptions, Node};

/// Inline element without attributes.
pub fn el(name: &str, children: impl Into<ChildInput>) -> Node {
    h(name, Attributes::new(), children)
}

/// Inline element with attributes.
pub fn el_with<V: Into<AttrValue>>(
    name: &str,
    attributes: Vec<(&str, V)>,
    children: impl Into<ChildInput>,
) -> Node {
    h(name, attributes.into_iter().collect(), children)
}

pub fn link(href: &str, children: impl Into<ChildInput>) -> Node {
    el_with("a", vec![("href", href)], children)
}

pub fn br() -> ChildInput {
    Node::tag("br").into()
}

/// Render inline children with default options.
pub fn mrkdwn(children: impl Into<ChildInput>) -> String {
    render_mrkdwn(children, &FormatOptions::default()).expect("markup to render")
}
