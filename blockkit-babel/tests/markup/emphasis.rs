use crate::common::{br, el, mrkdwn};
use blockkit_babel::{render_mrkdwn, render_plain_text, ChildInput, FormatOptions, RenderError};
use insta::assert_snapshot;

#[test]
fn test_bold_inside_bold_is_not_doubled() {
    let out = mrkdwn(el(
        "b",
        vec![
            ChildInput::from("a "),
            el("strong", "b").into(),
            ChildInput::from(" c"),
        ],
    ));
    assert_eq!(out, "*a b c*");
}

#[test]
fn test_different_styles_nest() {
    assert_eq!(mrkdwn(el("b", el("i", "x"))), "*_x_*");
    assert_eq!(mrkdwn(el("s", el("em", "x"))), "~_x_~");
}

#[test]
fn test_delimiters_inside_a_span_are_replaced() {
    assert_eq!(mrkdwn(el("b", "2*3")), "*2\u{2217}3*");
    assert_eq!(mrkdwn(el("s", "~tilde~")), "~\u{223c}tilde\u{223c}~");
    assert_eq!(
        mrkdwn(el("i", "snake_case :white_check_mark:")),
        "_snake\u{02cd}case :white_check_mark:_"
    );
}

#[test]
fn test_text_is_entity_escaped() {
    assert_eq!(mrkdwn("a & b <c>"), "a &amp; b &lt;c&gt;");
}

#[test]
fn test_exact_mode_guards_mid_word_styles() {
    let children = vec![ChildInput::from("foo"), el("b", "bar").into(), ChildInput::from("baz")];
    let exact = render_mrkdwn(children.clone(), &FormatOptions::exact()).unwrap();
    assert_eq!(exact, "foo\u{200b}*\u{200b}bar\u{200b}*\u{200b}baz");
    assert_eq!(exact.replace('\u{200b}', ""), mrkdwn(children));
}

#[test]
fn test_blockquote_prefixes_each_line() {
    let out = mrkdwn(el("blockquote", vec!["a".into(), br(), "b".into()]));
    assert_snapshot!(out, @r"
    &gt; a
    &gt; b
    ");
}

#[test]
fn test_styles_inside_blockquote_stay_after_the_marker() {
    let out = mrkdwn(el("blockquote", el("b", vec!["a".into(), br(), "b".into()])));
    assert_eq!(out, "&gt; *a*\n&gt; *b*");
}

#[test]
fn test_paragraphs_are_separated_by_a_blank_line() {
    assert_eq!(mrkdwn(vec![el("p", "a"), el("p", "b")]), "a\n\nb");
}

#[test]
fn test_plain_text_drops_tags() {
    let out = render_plain_text(vec!["a".into(), br(), el("b", "b").into()]).unwrap();
    assert_eq!(out, "a\nb");
}

#[test]
fn test_unknown_tag_is_rejected() {
    assert_eq!(
        render_mrkdwn(el("marquee", "x"), &FormatOptions::default()),
        Err(RenderError::UnknownElement("marquee".into()))
    );
}

#[test]
fn test_whitespace_only_span_keeps_the_word_break() {
    let children = vec![ChildInput::from("Hello"), el("b", " ").into(), ChildInput::from("world")];
    assert_eq!(mrkdwn(children), "Hello world");
    let children = vec![ChildInput::from("Hello "), el("i", " ").into(), ChildInput::from(" world")];
    assert_eq!(mrkdwn(children), "Hello world");
}
