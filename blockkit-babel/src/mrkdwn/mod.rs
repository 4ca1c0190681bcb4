//! Intermediate HTML to mrkdwn.
//!
//! The second stage of inline conversion. The fragment produced by the tag
//! table is parsed into a DOM and walked bottom-up: every element's children
//! are converted first, then the element's rule turns that content into its
//! mrkdwn form. Sibling results are joined with the usual HTML-to-markdown
//! newline rule (see [`rules::join`]).
//!
//! Fenced code is not converted in place. Its text is stored aside and a
//! `<<pre:N>>` placeholder is emitted instead, so that no other rule can touch
//! it; placeholders are swapped back as the very last step.

pub mod dom;
pub mod rules;

use crate::format::{Delimiters, FormatOptions};
use crate::markup::escape::escape_entity;
use crate::markup::HtmlFragment;
use markup5ever_rcdom::{Handle, NodeData};
use once_cell::sync::Lazy;
use regex::Regex;
use std::rc::Rc;
use tracing::debug;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\r\n]+").expect("whitespace pattern"));

const BLOCK_ELEMENTS: &[&str] = &["blockquote", "body", "div", "li", "ol", "p", "pre", "ul"];

/// Convert intermediate HTML into mrkdwn.
pub fn convert(html: &HtmlFragment, options: &FormatOptions) -> String {
    let fragment = dom::ParsedFragment::parse(html.as_str());
    let body = fragment.body();
    let mut converter = Converter {
        delimiters: options.delimiters(),
        fences: Vec::new(),
    };
    let raw = converter.children(&body, true);

    let trimmed = raw
        .trim_start_matches(['\t', '\r', '\n'])
        .trim_end()
        .replace("<br />", "");
    let mrkdwn = rules::restore_fences(&trimmed, &converter.fences);

    debug!(
        html_len = html.as_str().len(),
        mrkdwn_len = mrkdwn.len(),
        fences = converter.fences.len(),
        "converted markup to mrkdwn"
    );
    mrkdwn
}

struct Converter {
    delimiters: Delimiters,
    /// Fenced code blocks, indexed by placeholder number
    fences: Vec<String>,
}

impl Converter {
    fn children(&mut self, parent: &Handle, block: bool) -> String {
        let children = parent.children.borrow();
        let mut output = String::new();
        for (index, child) in children.iter().enumerate() {
            let replacement = match &child.data {
                NodeData::Text { contents } => {
                    text(&contents.borrow(), after_space(&output, block))
                }
                NodeData::Element { .. } => {
                    let replacement = self.element(child, parent, &children, index);
                    if after_space(&output, block) {
                        replacement.trim_start_matches(' ').to_string()
                    } else {
                        replacement
                    }
                }
                _ => String::new(),
            };
            output = rules::join(&output, &replacement);
        }
        output
    }

    fn element(&mut self, node: &Handle, parent: &Handle, siblings: &[Handle], index: usize) -> String {
        let name = dom::tag_name(node).unwrap_or_default();
        let is_block = BLOCK_ELEMENTS.contains(&name.as_str());

        if !matches!(name.as_str(), "a" | "br" | "time") && dom::is_blank(node) {
            return match (is_block, dom::text_content(node).is_empty()) {
                (true, _) => "\n\n".to_string(),
                (false, true) => String::new(),
                // keeps the word break the whitespace stood for
                (false, false) => " ".to_string(),
            };
        }
        if name == "pre" {
            if let Some(code) = first_child_code(node) {
                return self.fence(&code, dom::is_element(parent, "a"));
            }
        }

        let content = self.children(node, is_block);
        if is_block {
            return self.block(&name, content.trim_matches(' '), node, parent, siblings, index);
        }

        let inner = content.trim_matches(' ');
        let leading = &content[..content.len() - content.trim_start_matches(' ').len()];
        let trailing = &content[content.trim_end_matches(' ').len()..];
        let d = self.delimiters;
        let replacement = match name.as_str() {
            "br" => return "<br />\n".to_string(),
            "b" | "strong" => rules::apply_markup(d.strong, inner, true),
            "i" | "em" => rules::apply_markup(d.emphasis, inner, true),
            "s" | "strike" | "del" => rules::apply_markup(d.strikethrough, inner, false),
            "code" => rules::apply_markup(d.code, inner, true),
            "q" => rules::quote(inner),
            "a" => match dom::attr(node, "href").filter(|href| !href.is_empty()) {
                Some(href) => rules::link(inner, &href),
                None => inner.to_string(),
            },
            "time" => match dom::attr(node, "datetime") {
                Some(datetime) => {
                    let fallback = dom::attr(node, "data-fallback").unwrap_or_default();
                    rules::time(inner, &datetime, &escape_entity(&fallback))
                }
                None => inner.to_string(),
            },
            _ => inner.to_string(),
        };
        format!("{leading}{replacement}{trailing}")
    }

    fn block(
        &mut self,
        name: &str,
        content: &str,
        node: &Handle,
        parent: &Handle,
        siblings: &[Handle],
        index: usize,
    ) -> String {
        match name {
            "blockquote" => rules::blockquote(content),
            "ul" | "ol" => rules::list(content, is_last_in_item(node, parent)),
            "li" => {
                let ordered = dom::is_element(parent, "ol").then(|| {
                    dom::attr(parent, "start").and_then(|start| start.trim().parse::<i64>().ok())
                });
                let position = rules::ItemPosition {
                    ordered,
                    index: dom::element_children(parent)
                        .iter()
                        .position(|sibling| Rc::ptr_eq(sibling, node))
                        .unwrap_or(0),
                    has_next_sibling: index + 1 < siblings.len(),
                };
                rules::list_item(content, &position)
            }
            _ => rules::paragraph(content),
        }
    }

    fn fence(&mut self, code: &Handle, single_line: bool) -> String {
        self.fences.push(escape_entity(&preformatted_text(code)));
        rules::placeholder(self.fences.len() - 1, single_line)
    }
}

/// Whether whitespace emitted next would be redundant: at the start of a block,
/// a line, or right after a space.
fn after_space(output: &str, block: bool) -> bool {
    (block && output.is_empty()) || output.ends_with(['\n', ' '])
}

fn text(raw: &str, trim_leading: bool) -> String {
    let collapsed = WHITESPACE.replace_all(raw, " ");
    let collapsed = if trim_leading {
        collapsed.trim_start_matches(' ')
    } else {
        &collapsed
    };
    escape_entity(collapsed)
}

fn first_child_code(pre: &Handle) -> Option<Handle> {
    pre.children
        .borrow()
        .first()
        .filter(|child| dom::is_element(child, "code"))
        .cloned()
}

/// Text of a code block, with line breaks kept.
fn preformatted_text(handle: &Handle) -> String {
    let mut out = String::new();
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => out.push_str(&contents.borrow()),
            NodeData::Element { .. } if dom::is_element(child, "br") => out.push('\n'),
            NodeData::Element { .. } => out.push_str(&preformatted_text(child)),
            _ => {}
        }
    }
    out
}

fn is_last_in_item(list: &Handle, parent: &Handle) -> bool {
    dom::is_element(parent, "li")
        && dom::element_children(parent)
            .last()
            .is_some_and(|last| Rc::ptr_eq(last, list))
}
