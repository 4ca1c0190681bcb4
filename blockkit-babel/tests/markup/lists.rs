use crate::common::{br, el, el_with, mrkdwn};
use blockkit_babel::ChildInput;

fn items(texts: &[&str]) -> Vec<blockkit_babel::Node> {
    texts.iter().map(|text| el("li", *text)).collect()
}

#[test]
fn test_unordered_list() {
    assert_eq!(mrkdwn(el("ul", items(&["a", "b"]))), "\u{2022} a\n\u{2022} b");
}

#[test]
fn test_ordered_list_counts_from_one() {
    assert_eq!(mrkdwn(el("ol", items(&["a", "b"]))), "1. a\n2. b");
}

#[test]
fn test_ordered_list_start() {
    let list = el_with("ol", vec![("start", 5)], items(&["a", "b", "c"]));
    assert_eq!(mrkdwn(list), "5. a\n6. b\n7. c");
}

#[test]
fn test_nested_list_is_indented() {
    let list = el(
        "ul",
        vec![
            el("li", vec![ChildInput::from("a"), el("ul", items(&["b"])).into()]),
            el("li", "c"),
        ],
    );
    assert_eq!(mrkdwn(list), "\u{2022} a\n\u{2007} \u{2022} b\n\u{2022} c");
}

#[test]
fn test_continuation_lines_align_with_item_text() {
    let list = el_with(
        "ol",
        vec![("start", 9)],
        vec![
            el("li", vec!["a".into(), br(), "b".into()]),
            el("li", vec!["c".into(), br(), "d".into()]),
        ],
    );
    assert_eq!(
        mrkdwn(list),
        "9. a\n\u{2007}  b\n10. c\n\u{2007}\u{2007}  d"
    );
}

#[test]
fn test_list_after_paragraph() {
    let out = mrkdwn(vec![el("p", "intro"), el("ul", items(&["a"]))]);
    assert_eq!(out, "intro\n\n\u{2022} a");
}

#[test]
fn test_huge_start_does_not_overflow() {
    let list = el_with("ol", vec![("start", i64::MAX)], items(&["a", "b"]));
    let out = mrkdwn(list);
    assert!(out.starts_with(&format!("{}. a\n", i64::MAX)));
    assert!(out.ends_with(&format!("{}. b", i64::MAX)));
}
