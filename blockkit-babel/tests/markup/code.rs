use crate::common::{el, mrkdwn};
use blockkit_babel::ChildInput;

#[test]
fn test_inline_code_keeps_other_delimiters() {
    assert_eq!(mrkdwn(el("code", "a*b*c")), "`a*b*c`");
}

#[test]
fn test_code_inside_emphasis_stays_literal() {
    assert_eq!(
        mrkdwn(el("b", vec![ChildInput::from("x "), el("code", "a*b*c").into()])),
        "*x `a*b*c`*"
    );
    assert_eq!(
        mrkdwn(el("i", vec![el("code", "snake_case").into(), ChildInput::from(" ok")])),
        "_`snake_case` ok_"
    );
}

#[test]
fn test_styles_inside_code_pass_through() {
    assert_eq!(mrkdwn(el("code", el("b", "x"))), "`x`");
    assert_eq!(mrkdwn(el("b", el("code", "x"))), "*`x`*");
}

#[test]
fn test_backtick_inside_code_is_replaced() {
    assert_eq!(mrkdwn(el("code", "a`b")), "`a\u{02cb}b`");
}

#[test]
fn test_preformatted_block_keeps_whitespace() {
    assert_eq!(
        mrkdwn(el("pre", "line1\n  line2 <tag>")),
        "```\nline1\n  line2 &lt;tag&gt;\n```"
    );
}

#[test]
fn test_strikethrough_does_not_wrap_code_block() {
    assert_eq!(mrkdwn(el("s", el("pre", "x"))), "```\nx\n```");
}
