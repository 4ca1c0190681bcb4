//! String-level replacement rules used by the converter.

use crate::markup::mention::detect_special_link;
use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::{Captures, Regex};

static QUOTED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^((?:&gt; ?)?)(.*)$").expect("quoted line pattern"));
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<<pre:(\d+)(s?)>>").expect("placeholder pattern"));
static LINK_BREAKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:(?:<br />)?\n)+").expect("link break pattern"));
static NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").expect("newline pattern"));

/// Characters `encodeURI` leaves alone.
const URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

pub const BULLET: &str = "\u{2022} ";
const FIGURE_SPACE: char = '\u{2007}';

/// Wrap every non-blank line of `target` in `delimiter`.
///
/// A leading quote marker stays outside the delimiters, so styles survive
/// inside block quotes. With `wrap_pre` unset, lines holding only a code block
/// placeholder are left unwrapped.
pub fn apply_markup(delimiter: &str, target: &str, wrap_pre: bool) -> String {
    QUOTED_LINE
        .replace_all(target, |caps: &Captures| {
            let quote = &caps[1];
            let line = &caps[2];
            let mut filtered = line.replace("<br />", "");
            if !wrap_pre {
                filtered = PLACEHOLDER.replace_all(&filtered, "").into_owned();
            }
            if filtered.trim().is_empty() {
                caps[0].to_string()
            } else {
                format!("{quote}{delimiter}{line}{delimiter}")
            }
        })
        .into_owned()
}

pub fn blockquote(content: &str) -> String {
    let body = content.trim_matches('\n');
    let quoted: Vec<_> = body.split('\n').map(|line| format!("&gt; {line}")).collect();
    format!("\n\n{}\n\n", quoted.join("\n"))
}

/// Blockquote nested in a link; links are a single line.
pub fn quote(content: &str) -> String {
    format!("&gt; {content}")
}

pub fn paragraph(content: &str) -> String {
    format!("\n\n{content}\n\n")
}

/// Where a list item sits in its list.
pub struct ItemPosition {
    /// `start` attribute of the enclosing `<ol>`; `None` for `<ul>`.
    pub ordered: Option<Option<i64>>,
    /// Index among the list's element children
    pub index: usize,
    pub has_next_sibling: bool,
}

pub fn list_item(content: &str, position: &ItemPosition) -> String {
    let had_trailing_newline = content.ends_with('\n');
    let body = content.trim_start_matches('\n').trim_end_matches('\n');

    let (prefix, indent) = match position.ordered {
        Some(start) => {
            let number = match start {
                Some(start) => start.saturating_add(position.index as i64),
                None => (position.index as i64).saturating_add(1),
            }
            .to_string();
            let mut indent: String = std::iter::repeat(FIGURE_SPACE)
                .take(number.chars().count())
                .collect();
            indent.push_str("  ");
            (format!("{number}. "), indent)
        }
        None => (BULLET.to_string(), format!("{FIGURE_SPACE} ")),
    };

    let mut item = format!("{prefix}{}", body.replace('\n', &format!("\n{indent}")));
    if had_trailing_newline || position.has_next_sibling {
        item.push('\n');
    }
    item
}

/// `nested_last` is set for a list that closes the item it is nested in.
pub fn list(content: &str, nested_last: bool) -> String {
    if nested_last {
        format!("\n{content}")
    } else {
        format!("\n\n{content}\n\n")
    }
}

/// `encodeURI`-style percent encoding.
pub fn encode_uri(href: &str) -> String {
    utf8_percent_encode(href, URI).to_string()
}

pub fn link(content: &str, href: &str) -> String {
    if let Some(special) = detect_special_link(href) {
        return special.to_mrkdwn();
    }
    let label = LINK_BREAKS.replace_all(content, " ");
    format!("<{}|{}>", encode_uri(href), label.trim())
}

pub fn time(content: &str, datetime: &str, fallback: &str) -> String {
    format!("<!date^{datetime}^{content}|{fallback}>")
}

pub fn placeholder(index: usize, single_line: bool) -> String {
    format!("\n<<pre:{index}{}>>\n", if single_line { "s" } else { "" })
}

/// Put fenced code back in place of its placeholder.
pub fn restore_fences(text: &str, fences: &[String]) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            let fence = caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| fences.get(i));
            match (fence, &caps[2]) {
                (Some(code), "s") => format!("```{}```", NEWLINES.replace_all(code, " ")),
                (Some(code), _) => format!("```\n{code}\n```"),
                (None, _) => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Join two pieces, keeping the larger of the newline runs at the seam, capped
/// at a blank line.
pub fn join(output: &str, replacement: &str) -> String {
    let left = output.trim_end_matches('\n');
    let right = replacement.trim_start_matches('\n');
    let newlines = (output.len() - left.len())
        .max(replacement.len() - right.len())
        .min(2);
    let mut joined = String::with_capacity(left.len() + newlines + right.len());
    joined.push_str(left);
    joined.push_str(&"\n".repeat(newlines));
    joined.push_str(right);
    joined
}
