//! Inline formatting, from tags to mrkdwn.

mod code;
mod emphasis;
mod links;
mod lists;
mod time;
