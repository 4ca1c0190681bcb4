use crate::common::{el, link, mrkdwn};
use blockkit_babel::ChildInput;

#[test]
fn test_channel_mention() {
    assert_eq!(mrkdwn(link("#C12345678", ())), "<#C12345678>");
}

#[test]
fn test_user_and_group_mentions() {
    assert_eq!(mrkdwn(link("@U12345678", ())), "<@U12345678>");
    assert_eq!(mrkdwn(link("@SAMPLEGRP", ())), "<!subteam^SAMPLEGRP>");
}

#[test]
fn test_special_mentions() {
    assert_eq!(mrkdwn(link("@here", ())), "<!here|here>");
    assert_eq!(mrkdwn(link("@everyone", "ignored")), "<!everyone|everyone>");
}

#[test]
fn test_url_link() {
    assert_eq!(
        mrkdwn(link("https://example.com/", "Example")),
        "<https://example.com/|Example>"
    );
}

#[test]
fn test_url_is_percent_encoded() {
    assert_eq!(
        mrkdwn(link("https://example.com/?q=日本 語", "q")),
        "<https://example.com/?q=%E6%97%A5%E6%9C%AC%20%E8%AA%9E|q>"
    );
}

#[test]
fn test_formatting_inside_link_label() {
    assert_eq!(
        mrkdwn(link("https://example.com/", el("b", "bold"))),
        "<https://example.com/|*bold*>"
    );
}

#[test]
fn test_blockquote_in_link_becomes_inline_quote() {
    assert_eq!(
        mrkdwn(link("https://example.com/", el("blockquote", "q"))),
        "<https://example.com/|&gt; q>"
    );
}

#[test]
fn test_nested_mention_is_flattened_to_text() {
    let out = mrkdwn(link(
        "https://example.com/",
        vec![ChildInput::from("see "), link("@U12345678", "user").into()],
    ));
    assert_eq!(out, "<https://example.com/|see user>");
}
