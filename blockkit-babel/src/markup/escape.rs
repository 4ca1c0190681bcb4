//! Entity escaping and delimiter guards for the intermediate HTML.

use crate::ir::nodes::Attributes;
use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));
static EMOJI_SHORTHAND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":[-+'_a-z0-9]+:").expect("emoji pattern"));
static LITERAL_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<(/?)(?:code|pre)[\s/>]").expect("literal tag pattern"));
static QUOTE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^&gt;").expect("quote pattern"));

/// Escape the three characters mrkdwn reserves.
pub fn escape_entity(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a value for use inside a double-quoted HTML attribute.
pub fn escape_attr(value: &str) -> String {
    escape_entity(value).replace('"', "&quot;")
}

/// Serialize attributes as ` key="value"` pairs, skipping absent values.
pub fn build_attr(attributes: &Attributes) -> String {
    attributes
        .iter()
        .filter_map(|(key, value)| {
            value
                .to_attr_string()
                .map(|v| format!(" {key}=\"{}\"", escape_attr(&v)))
        })
        .collect()
}

/// Apply `replace` to the text between tags, leaving tags, attributes and the
/// contents of `<code>`/`<pre>` alone.
fn replace_outside_tags(html: &str, replace: impl Fn(&str) -> String) -> String {
    let mut out = String::with_capacity(html.len());
    let mut last = 0;
    let mut literal_depth = 0usize;
    for tag in TAG.find_iter(html) {
        let text = &html[last..tag.start()];
        if literal_depth == 0 {
            out.push_str(&replace(text));
        } else {
            out.push_str(text);
        }
        if let Some(caps) = LITERAL_TAG.captures(tag.as_str()) {
            if caps[1].is_empty() {
                literal_depth += 1;
            } else {
                literal_depth = literal_depth.saturating_sub(1);
            }
        }
        out.push_str(tag.as_str());
        last = tag.end();
    }
    let rest = &html[last..];
    if literal_depth == 0 {
        out.push_str(&replace(rest));
    } else {
        out.push_str(rest);
    }
    out
}

/// `*` inside bold text would close the span early.
pub fn bold(html: &str) -> String {
    replace_outside_tags(html, |text| text.replace('*', "\u{2217}"))
}

/// `_` inside italic text, except within emoji shorthand like `:white_check_mark:`.
pub fn italic(html: &str) -> String {
    replace_outside_tags(html, |text| {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for emoji in EMOJI_SHORTHAND.find_iter(text) {
            out.push_str(&text[last..emoji.start()].replace('_', "\u{02cd}"));
            out.push_str(emoji.as_str());
            last = emoji.end();
        }
        out.push_str(&text[last..].replace('_', "\u{02cd}"));
        out
    })
}

pub fn strikethrough(html: &str) -> String {
    replace_outside_tags(html, |text| text.replace('~', "\u{223c}"))
}

pub fn code(html: &str) -> String {
    replace_outside_tags(html, |text| text.replace('`', "\u{02cb}"))
}

/// A quoted line that itself starts with `&gt;` would read as a nested quote.
pub fn blockquote(html: &str) -> String {
    QUOTE_LINE.replace_all(html, "\u{00ad}&gt;").into_owned()
}
