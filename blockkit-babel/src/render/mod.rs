//! Context-aware traversal of the node tree.
//!
//! [`render_node`] walks a tree depth-first and dispatches on each node's kind:
//!
//! - `Object` emits its attributes, rendering node-valued ones recursively and
//!   dropping absent ones.
//! - `Array` emits its rendered children, dropping empty results.
//! - `Text` and `Markup` switch the mode for their subtree; the latter hands the
//!   intermediate HTML to the mrkdwn converter.
//! - `EscapedText` entity-escapes its joined children.
//! - `Tag` resolves through the inline tag table, or reduces to its text in
//!   plain-text mode.
//!
//! Nodes carrying a [`PostBuild`] hook do not run it in place. The engine
//! records a [`Deferred`] entry next to the output and hands both back; the
//! caller runs the entries once the whole tree is built. Entries are recorded
//! when a node finishes, so they come out in post-order and a container is
//! always checked after everything inside it.

pub mod context;

use crate::blocks::{validate, Deferred, PostBuild};
use crate::error::RenderError;
use crate::ir::nodes::{AttrValue, Child, Node, NodeKind};
use crate::markup::escape::escape_entity;
use crate::markup::{self, HtmlFragment};
use crate::mrkdwn;
use serde_json::{Map, Value};
use tracing::trace;

use self::context::{Mode, ParseContext};

/// Result of rendering a single node.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Json(Value),
    Text(String),
}

impl Output {
    /// Empty results are dropped from arrays.
    pub fn is_omitted(&self) -> bool {
        match self {
            Output::Json(Value::Null) => true,
            Output::Text(text) => text.is_empty(),
            Output::Json(_) => false,
        }
    }

    pub fn into_json(self) -> Value {
        match self {
            Output::Json(value) => value,
            Output::Text(text) => Value::String(text),
        }
    }

    /// String form used when a result is concatenated into text.
    pub fn into_text(self) -> String {
        match self {
            Output::Text(text) => text,
            Output::Json(Value::String(text)) => text,
            Output::Json(Value::Null) => String::new(),
            Output::Json(other) => other.to_string(),
        }
    }
}

/// Output of a render together with the post-build checks it scheduled.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub output: Output,
    pub deferred: Vec<Deferred>,
}

/// Render `node` in `ctx` without running its post-build checks.
pub fn render_node(node: &Node, ctx: &ParseContext) -> Result<Rendered, RenderError> {
    let mut renderer = Renderer::default();
    let output = renderer.node(node, ctx)?;
    Ok(Rendered {
        output,
        deferred: renderer.deferred,
    })
}

/// Render a list of children to text and run any checks they scheduled.
pub(crate) fn render_children(children: &[Child], ctx: &ParseContext) -> Result<String, RenderError> {
    let mut renderer = Renderer::default();
    let text = renderer.join(children, ctx)?;
    validate::run_deferred(&renderer.deferred)?;
    Ok(text)
}

#[derive(Default)]
struct Renderer {
    deferred: Vec<Deferred>,
}

impl Renderer {
    fn node(&mut self, node: &Node, ctx: &ParseContext) -> Result<Output, RenderError> {
        trace!(kind = ?node.kind, depth = ctx.ancestry.depth(), mode = ?ctx.mode, "render node");

        let scoped;
        let ctx = match node.hook {
            Some(PostBuild::Container(surface)) => {
                scoped = ctx.within(surface);
                &scoped
            }
            _ => ctx,
        };

        let output = match &node.kind {
            NodeKind::Object => self.object(node, ctx)?,
            NodeKind::Array => {
                let mut items = Vec::new();
                for child in &node.children {
                    if let (Some(PostBuild::Container(surface)), Child::Node(inner)) = (node.hook, child) {
                        if let Some(tag) = inner.tag_name() {
                            return Err(RenderError::NotABlock {
                                surface,
                                tag: tag.to_string(),
                            });
                        }
                    }
                    let rendered = self.child(child, ctx)?;
                    if !rendered.is_omitted() {
                        items.push(rendered.into_json());
                    }
                }
                Output::Json(Value::Array(items))
            }
            NodeKind::Text => Output::Text(self.join(&node.children, &ctx.with_mode(Mode::PlainText))?),
            NodeKind::Markup => {
                let html = HtmlFragment::new(self.join(&node.children, &ctx.with_mode(Mode::Html))?);
                Output::Text(mrkdwn::convert(&html, &ctx.options))
            }
            NodeKind::EscapedText => Output::Text(escape_entity(&self.join(&node.children, ctx)?)),
            NodeKind::Tag(name) => Output::Text(self.tag(name, node, ctx)?),
        };

        if let Some(hook) = node.hook {
            self.deferred.push(Deferred {
                hook,
                output: output.clone().into_json(),
                surface: ctx.surface,
            });
        }
        Ok(output)
    }

    fn object(&mut self, node: &Node, ctx: &ParseContext) -> Result<Output, RenderError> {
        let mut map = Map::new();
        for (key, value) in node.attributes.iter() {
            if value.is_absent() {
                continue;
            }
            map.insert(key.to_string(), self.attr_value(value, ctx)?);
        }
        Ok(Output::Json(Value::Object(map)))
    }

    fn attr_value(&mut self, value: &AttrValue, ctx: &ParseContext) -> Result<Value, RenderError> {
        Ok(match value {
            AttrValue::Absent => Value::Null,
            AttrValue::Json(json) => json.clone(),
            AttrValue::Node(node) => self.node(node, ctx)?.into_json(),
            AttrValue::List(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items.iter().filter(|item| !item.is_absent()) {
                    values.push(self.attr_value(item, ctx)?);
                }
                Value::Array(values)
            }
        })
    }

    fn tag(&mut self, name: &str, node: &Node, ctx: &ParseContext) -> Result<String, RenderError> {
        let inner = ctx.enter(name);
        match ctx.mode {
            Mode::PlainText if name == "br" => Ok("\n".to_string()),
            Mode::PlainText => self.join(&node.children, &inner),
            Mode::Html => {
                let content = self.join(&node.children, &inner)?;
                markup::render_tag(name, &node.attributes, &content, &ctx.ancestry)
            }
            Mode::Normal => Err(RenderError::UnexpectedElement(name.to_string())),
        }
    }

    fn child(&mut self, child: &Child, ctx: &ParseContext) -> Result<Output, RenderError> {
        match child {
            Child::Node(node) => self.node(node, ctx),
            Child::Text(text) if ctx.mode == Mode::Html => Ok(Output::Text(escape_entity(text))),
            Child::Text(text) => Ok(Output::Text(text.clone())),
        }
    }

    fn join(&mut self, children: &[Child], ctx: &ParseContext) -> Result<String, RenderError> {
        let mut out = String::new();
        for child in children {
            out.push_str(&self.child(child, ctx)?.into_text());
        }
        Ok(out)
    }
}
