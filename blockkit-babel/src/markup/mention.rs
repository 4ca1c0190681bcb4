//! Recognition of link targets that are mentions rather than URLs.

use once_cell::sync::Lazy;
use regex::Regex;

static CHANNEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#([A-Z0-9]{8,})$").expect("channel"));
static USER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@([UW][A-Z0-9]{8,})$").expect("user"));
static USER_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@(S[A-Z0-9]{8,})$").expect("user group"));
static KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@(here|channel|everyone)$").expect("keyword"));

/// A link `href` that refers to a conversation member or audience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialLink {
    /// `#C0123ABCD`
    Channel(String),
    /// `@U0123ABCD`
    User(String),
    /// `@S0123ABCD`
    UserGroup(String),
    /// `@here`, `@channel`, `@everyone`
    Keyword(String),
}

impl SpecialLink {
    /// mrkdwn mention syntax for this link.
    pub fn to_mrkdwn(&self) -> String {
        match self {
            SpecialLink::Channel(id) => format!("<#{id}>"),
            SpecialLink::User(id) => format!("<@{id}>"),
            SpecialLink::UserGroup(id) => format!("<!subteam^{id}>"),
            SpecialLink::Keyword(word) => format!("<!{word}|{word}>"),
        }
    }
}

/// Detect a mention-shaped `href`.
pub fn detect_special_link(href: &str) -> Option<SpecialLink> {
    let capture = |re: &Regex| {
        re.captures(href)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
    };

    if let Some(id) = capture(&CHANNEL) {
        return Some(SpecialLink::Channel(id));
    }
    if let Some(id) = capture(&USER) {
        return Some(SpecialLink::User(id));
    }
    if let Some(id) = capture(&USER_GROUP) {
        return Some(SpecialLink::UserGroup(id));
    }
    capture(&KEYWORD).map(SpecialLink::Keyword)
}
