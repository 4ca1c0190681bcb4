//! Node trees to Block Kit JSON and mrkdwn
//!
//!     This crate renders a tree of nodes, built with plain function calls, into the JSON payload
//!     Slack's Block Kit expects, with every text field converted to Slack's mrkdwn dialect.
//!
//!     TLDR:
//!         - Build a tree with the builders in blocks::builders (or raw Node values / h()).
//!         - Call render() with FormatOptions; you get a serde_json::Value or a RenderError.
//!         - Inline formatting is written as HTML-like tags (b, i, a, ul, time, ...) inside text.
//!         - Containers check their blocks against the surface they are published on.
//!
//! Architecture
//!
//!     A tree is rendered by one recursive engine (./render/mod.rs). What a node turns into depends
//!     on its kind and on the context it is rendered in: the chain of enclosing inline tags, the
//!     text mode and the innermost container surface. The context is passed by value, so a node
//!     only ever sees its real ancestors.
//!
//!     Inline markup goes through two stages:
//!
//!         1. The tag table (./markup/mod.rs) serializes tags to an intermediate HTML fragment. This
//!            is where nesting that mrkdwn cannot express is flattened away.
//!         2. The converter (./mrkdwn/mod.rs) parses that fragment with html5ever and applies
//!            replacement rules bottom-up to produce mrkdwn.
//!
//!     Compatibility checks do not run while a container is being built. Hooked nodes schedule a
//!     Deferred check that render() runs once the whole tree is built (./blocks/validate.rs).
//!
//!     This is a pure lib: no I/O, no env vars, no global state. Formatting options are a value
//!     passed to every call, see ./format.rs.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # FormatOptions and delimiters
//!     ├── ir                      # Node model, child normalization and helpers
//!     ├── render                  # Traversal engine and its context
//!     ├── markup                  # Tag table, escaping, mentions, <time>
//!     ├── mrkdwn                  # HTML fragment -> mrkdwn
//!     ├── blocks                  # Surfaces, registry, validation, builders
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── markup                  # Inline formatting end to end
//!     ├── blocks                  # Containers and context blocks
//!     └── properties              # proptest properties over generated trees
//!
//!     Note that rust does not by default discover tests in subdirectories, so they are included
//!     from tests/lib.rs.
//!
pub mod blocks;
pub mod error;
pub mod format;
pub mod ir;
pub mod markup;
pub mod mrkdwn;
pub mod render;

pub use blocks::builders;
pub use blocks::Surface;
pub use error::RenderError;
pub use ir::children;
pub use format::FormatOptions;
pub use ir::nodes::{h, AttrValue, Attributes, Child, Node, NodeKind};
pub use ir::normalize::ChildInput;
pub use markup::HtmlFragment;

use render::context::ParseContext;
use serde_json::Value;

/// Render a node tree to JSON and run every check it scheduled.
///
/// Rendering never mutates the tree; rendering the same tree twice yields the
/// same value.
pub fn render(node: &Node, options: &FormatOptions) -> Result<Value, RenderError> {
    let rendered = render::render_node(node, &ParseContext::new(*options))?;
    blocks::validate::run_deferred(&rendered.deferred)?;
    Ok(rendered.output.into_json())
}

/// Render inline children to mrkdwn.
pub fn render_mrkdwn(
    children: impl Into<ChildInput>,
    options: &FormatOptions,
) -> Result<String, RenderError> {
    let rendered = render::render_node(&Node::markup(children), &ParseContext::new(*options))?;
    blocks::validate::run_deferred(&rendered.deferred)?;
    Ok(rendered.output.into_text())
}

/// Render children to plain text; tags reduce to their text and `br` to a newline.
pub fn render_plain_text(children: impl Into<ChildInput>) -> Result<String, RenderError> {
    let rendered = render::render_node(&Node::text(children), &ParseContext::default())?;
    blocks::validate::run_deferred(&rendered.deferred)?;
    Ok(rendered.output.into_text())
}
