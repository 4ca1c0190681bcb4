use crate::common::{el, el_with};
use blockkit_babel::builders::{blocks, context, image, modal, plain_text_input, ModalProps};
use blockkit_babel::{render, ChildInput, FormatOptions, Node, RenderError, Surface};
use serde_json::json;

const URL: &str = "https://example.com/icon.png";

fn render_default(node: &Node) -> Result<serde_json::Value, RenderError> {
    render(node, &FormatOptions::default())
}

#[test]
fn test_inline_runs_become_one_element() {
    let block = context(
        None,
        vec![
            ChildInput::from("Hello "),
            el("b", "world").into(),
            image(URL, "icon").into(),
            ChildInput::from("after"),
        ],
    );
    assert_eq!(
        render_default(&blocks(block)).unwrap(),
        json!([{
            "type": "context",
            "elements": [
                {"type": "mrkdwn", "text": "Hello *world*", "verbatim": true},
                {"type": "image", "image_url": URL, "alt_text": "icon"},
                {"type": "mrkdwn", "text": "after", "verbatim": true}
            ]
        }])
    );
}

#[test]
fn test_span_and_img_are_separate_elements() {
    let block = context(
        Some("ctx"),
        vec![
            el("span", "a"),
            el("span", "b"),
            el_with("img", vec![("src", URL), ("alt", "i")], ()),
        ],
    );
    let out = render_default(&blocks(block)).unwrap();
    assert_eq!(
        out[0]["elements"],
        json!([
            {"type": "mrkdwn", "text": "a", "verbatim": true},
            {"type": "mrkdwn", "text": "b", "verbatim": true},
            {"type": "image", "image_url": URL, "alt_text": "i"}
        ])
    );
}

#[test]
fn test_ten_elements_fit() {
    let images: Vec<_> = (0..10).map(|_| image(URL, "i")).collect();
    let out = render_default(&blocks(context(None, images))).unwrap();
    assert_eq!(out[0]["elements"].as_array().map(Vec::len), Some(10));
}

#[test]
fn test_eleven_elements_do_not() {
    let images: Vec<_> = (0..11).map(|_| image(URL, "i")).collect();
    assert_eq!(
        render_default(&blocks(context(None, images))),
        Err(RenderError::TooManyElements { count: 11, limit: 10 })
    );
}

#[test]
fn test_input_elements_only_in_modal_context() {
    let block = || context(None, plain_text_input(Some("x")));

    assert_eq!(
        render_default(&blocks(block())),
        Err(RenderError::IncompatibleContextElement {
            surface: Surface::Message,
            kind: "plain_text_input".into()
        })
    );
    let view = modal(
        ModalProps {
            title: "T".into(),
            ..Default::default()
        },
        block(),
    );
    assert!(render_default(&view).is_ok());
}
