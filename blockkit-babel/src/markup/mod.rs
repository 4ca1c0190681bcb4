//! Inline tag table: HTML-like elements to intermediate HTML.
//!
//! This is the first of the two stages that turn inline markup into mrkdwn.
//! Each tag is rendered with its children already serialized; the tag looks at
//! its ancestry to decide whether to wrap them or pass them through. Passing
//! through is how the table avoids output mrkdwn cannot express, such as
//! `*` inside `*`, or formatting inside a code span.
//!
//! The result is a [`HtmlFragment`], which [`crate::mrkdwn::convert`] turns
//! into the final text.

pub mod escape;
pub mod mention;
pub mod time;

use crate::error::RenderError;
use crate::format::FormatOptions;
use crate::ir::nodes::{Attributes, Node};
use crate::ir::normalize::ChildInput;
use crate::render::context::{Ancestry, Mode, ParseContext};
use crate::render::render_children;
use std::fmt;

use self::escape::build_attr;
use self::mention::detect_special_link;

/// Intermediate HTML between the two stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlFragment(String);

impl HtmlFragment {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for HtmlFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const STRONG: &[&str] = &["b", "strong", "time"];
const EMPHASIS: &[&str] = &["i", "em", "time"];
const STRIKE: &[&str] = &["s", "strike", "del", "time"];

/// Content given to a link with a mention `href` and no children, so the
/// converter still sees a non-blank element.
const SPECIAL_LINK_PLACEHOLDER: &str = "specialLink";

/// Render one inline element.
///
/// `ancestry` holds the enclosing elements, not `name` itself.
pub fn render_tag(
    name: &str,
    attributes: &Attributes,
    content: &str,
    ancestry: &Ancestry,
) -> Result<String, RenderError> {
    if name == "br" {
        return Ok("<br />".to_string());
    }
    if ancestry.is_child_of(&["pre", "code"]) && !matches!(name, "a" | "time") {
        return Ok(content.to_string());
    }

    let passthrough = |tags: &[&str]| ancestry.is_descendant_of(tags);
    let html = match name {
        "b" | "strong" if passthrough(STRONG) => content.to_string(),
        "b" | "strong" => format!("<b>{}</b>", escape::bold(content)),
        "i" | "em" if passthrough(EMPHASIS) => content.to_string(),
        "i" | "em" => format!("<i>{}</i>", escape::italic(content)),
        "s" | "strike" | "del" if passthrough(STRIKE) => content.to_string(),
        "s" | "strike" | "del" => format!("<s>{}</s>", escape::strikethrough(content)),
        "code" if passthrough(&["time"]) => content.to_string(),
        "code" => format!("<code>{}</code>", escape::code(content)),
        "p" if passthrough(&["p"]) => content.to_string(),
        "p" => format!("<p>{content}</p>"),
        "blockquote" if passthrough(&["blockquote", "ul", "ol", "time"]) => content.to_string(),
        "blockquote" => {
            let tag = if passthrough(&["a"]) { "q" } else { "blockquote" };
            format!("<{tag}>{}</{tag}>", escape::blockquote(content))
        }
        "pre" if passthrough(&["ul", "ol", "time"]) => content.to_string(),
        "pre" => format!("<pre><code>{}</code></pre>", escape::code(content)),
        "a" if passthrough(&["a", "time"]) => content.to_string(),
        "a" => {
            let special = attributes
                .get_str("href")
                .and_then(detect_special_link)
                .is_some();
            let content = if content.is_empty() && special {
                SPECIAL_LINK_PLACEHOLDER
            } else {
                content
            };
            format!("<a{}>{content}</a>", build_attr(attributes))
        }
        "time" => time::render(attributes, content)?,
        "small" | "span" | "ul" | "li" => format!("<{name}>{content}</{name}>"),
        "ol" => format!("<ol{}>{content}</ol>", build_attr(attributes)),
        unknown => return Err(RenderError::UnknownElement(unknown.to_string())),
    };
    Ok(html)
}

/// Render inline children to intermediate HTML without converting it.
pub fn to_html(
    children: impl Into<ChildInput>,
    options: &FormatOptions,
) -> Result<HtmlFragment, RenderError> {
    let holder = Node::markup(children);
    let ctx = ParseContext::new(*options).with_mode(Mode::Html);
    let html = render_children(&holder.children, &ctx)?;
    Ok(HtmlFragment::new(html))
}
