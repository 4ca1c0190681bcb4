//! Builders for containers, blocks and composition objects.
//!
//! Each builder returns a [`Node`]; nothing is rendered until the tree is passed
//! to [`crate::render`]. Optional fields take `Option`s and are left out of the
//! output when `None`.

use super::{PostBuild, Surface};
use crate::ir::nodes::{Child, Node};
use crate::ir::normalize::{normalize, ChildInput};

/// `plain_text` composition object.
pub fn plain_text(children: impl Into<ChildInput>) -> Node {
    Node::object()
        .attr("type", "plain_text")
        .attr("text", Node::text(children))
        .attr("emoji", true)
}

/// `mrkdwn` composition object; children may use inline tags.
pub fn mrkdwn(children: impl Into<ChildInput>) -> Node {
    Node::object()
        .attr("type", "mrkdwn")
        .attr("text", Node::markup(children))
        .attr("verbatim", true)
}

#[derive(Debug, Clone, Default)]
pub struct ConfirmProps {
    pub title: Option<String>,
    pub confirm: Option<String>,
    pub deny: Option<String>,
}

/// Confirmation dialog object; children are the dialog text.
pub fn confirm(props: ConfirmProps, children: impl Into<ChildInput>) -> Node {
    Node::object()
        .attr("title", props.title.map(plain_text))
        .attr("text", mrkdwn(children))
        .attr("confirm", props.confirm.map(plain_text))
        .attr("deny", props.deny.map(plain_text))
}

/// Block list for a message.
pub fn blocks(children: impl Into<ChildInput>) -> Node {
    block_list(children, Surface::Message)
}

/// Container block list. `hr`, `img`, `section` and `input` tags given
/// directly as children stand in for their blocks; any other tag is rejected
/// when the container renders.
fn block_list(children: impl Into<ChildInput>, surface: Surface) -> Node {
    let blocks: Vec<Child> = normalize(children)
        .into_iter()
        .map(|child| match child {
            Child::Node(node) => Child::Node(alias_block(node)),
            text => text,
        })
        .collect();
    Node::array(blocks).with_hook(PostBuild::Container(surface))
}

fn alias_block(node: Node) -> Node {
    let attrs = &node.attributes;
    let block_id = attrs.get("block_id").or_else(|| attrs.get("id")).cloned();
    match node.tag_name() {
        Some("hr") => divider().attr("block_id", block_id),
        Some("img") => Node::object()
            .attr("type", "image")
            .attr("block_id", block_id)
            .attr("image_url", attrs.get("src").cloned())
            .attr("alt_text", attrs.get("alt").cloned())
            .attr("title", attrs.get_str("title").map(plain_text)),
        Some("section") => Node::object()
            .attr("type", "section")
            .attr("block_id", block_id)
            .attr("text", mrkdwn(node.children)),
        Some("input") => {
            let action_id = attrs.get("action_id").or_else(|| attrs.get("name")).cloned();
            let element = plain_text_input(None)
                .attr("action_id", action_id)
                .attr("placeholder", attrs.get_str("placeholder").map(plain_text))
                .attr("initial_value", attrs.get("value").cloned());
            Node::object()
                .attr("type", "input")
                .attr("block_id", block_id)
                .attr("label", attrs.get_str("label").map(plain_text))
                .attr("element", element)
                .attr("hint", attrs.get_str("hint").map(plain_text))
        }
        _ => node,
    }
}

#[derive(Debug, Clone, Default)]
pub struct ModalProps {
    pub title: String,
    pub submit: Option<String>,
    pub close: Option<String>,
    pub callback_id: Option<String>,
    pub external_id: Option<String>,
    pub private_metadata: Option<String>,
    pub clear_on_close: Option<bool>,
    pub notify_on_close: Option<bool>,
}

/// Modal view.
pub fn modal(props: ModalProps, children: impl Into<ChildInput>) -> Node {
    Node::object()
        .attr("type", "modal")
        .attr("callback_id", props.callback_id)
        .attr("external_id", props.external_id)
        .attr("title", plain_text(props.title))
        .attr("submit", props.submit.map(plain_text))
        .attr("close", props.close.map(plain_text))
        .attr("private_metadata", props.private_metadata)
        .attr("clear_on_close", props.clear_on_close)
        .attr("notify_on_close", props.notify_on_close)
        .attr("blocks", block_list(children, Surface::Modal))
}

#[derive(Debug, Clone, Default)]
pub struct HomeProps {
    pub callback_id: Option<String>,
    pub external_id: Option<String>,
    pub private_metadata: Option<String>,
}

/// App home tab view.
pub fn home(props: HomeProps, children: impl Into<ChildInput>) -> Node {
    Node::object()
        .attr("type", "home")
        .attr("callback_id", props.callback_id)
        .attr("external_id", props.external_id)
        .attr("private_metadata", props.private_metadata)
        .attr("blocks", block_list(children, Surface::Home))
}

/// Whether `child` must be its own context element instead of joining the
/// surrounding inline text.
fn is_independent(child: &Child) -> bool {
    match child {
        Child::Node(node) => {
            node.object_type().is_some() || matches!(node.tag_name(), Some("span" | "img"))
        }
        Child::Text(_) => false,
    }
}

fn context_element(node: Node) -> Node {
    match node.tag_name() {
        Some("img") => Node::object()
            .attr("type", "image")
            .attr("image_url", node.attributes.get("src").cloned())
            .attr("alt_text", node.attributes.get("alt").cloned()),
        Some("span") => mrkdwn(node),
        _ => node,
    }
}

/// Context block.
///
/// Consecutive inline children are merged into one `mrkdwn` element. `span`
/// and `img` tags and object nodes each become an element of their own. The
/// element count is checked once the block is rendered.
pub fn context(block_id: Option<&str>, children: impl Into<ChildInput>) -> Node {
    let mut elements = Vec::new();
    let mut inline = Vec::new();

    for child in normalize(children) {
        if !is_independent(&child) {
            inline.push(child);
            continue;
        }
        if !inline.is_empty() {
            elements.push(mrkdwn(std::mem::take(&mut inline)));
        }
        if let Child::Node(node) = child {
            elements.push(context_element(node));
        }
    }
    if !inline.is_empty() {
        elements.push(mrkdwn(inline));
    }

    Node::object()
        .attr("type", "context")
        .attr("block_id", block_id)
        .attr("elements", Node::array(elements))
        .with_hook(PostBuild::ContextElements)
}

/// Section block with mrkdwn text.
pub fn section(block_id: Option<&str>, children: impl Into<ChildInput>) -> Node {
    Node::object()
        .attr("type", "section")
        .attr("block_id", block_id)
        .attr("text", mrkdwn(children))
}

pub fn actions(block_id: Option<&str>, elements: impl Into<ChildInput>) -> Node {
    Node::object()
        .attr("type", "actions")
        .attr("block_id", block_id)
        .attr("elements", Node::array(elements))
}

pub fn divider() -> Node {
    Node::object().attr("type", "divider")
}

/// Image block, or an image element when used as an accessory.
pub fn image(image_url: &str, alt_text: &str) -> Node {
    Node::object()
        .attr("type", "image")
        .attr("image_url", image_url)
        .attr("alt_text", alt_text)
}

pub fn header(children: impl Into<ChildInput>) -> Node {
    Node::object()
        .attr("type", "header")
        .attr("text", plain_text(children))
}

/// Input block wrapping `element`.
pub fn input(label: impl Into<ChildInput>, element: Node) -> Node {
    Node::object()
        .attr("type", "input")
        .attr("label", plain_text(label))
        .attr("element", element)
}

pub fn button(action_id: Option<&str>, children: impl Into<ChildInput>) -> Node {
    Node::object()
        .attr("type", "button")
        .attr("text", plain_text(children))
        .attr("action_id", action_id)
}

pub fn plain_text_input(action_id: Option<&str>) -> Node {
    Node::object()
        .attr("type", "plain_text_input")
        .attr("action_id", action_id)
}
