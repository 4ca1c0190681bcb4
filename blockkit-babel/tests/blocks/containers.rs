use crate::common::{br, el, el_with};
use blockkit_babel::builders::{
    actions, blocks, button, divider, header, home, input, modal, plain_text_input, section,
    HomeProps, ModalProps,
};
use blockkit_babel::{render, ChildInput, FormatOptions, Node, RenderError, Surface};
use serde_json::json;

fn render_default(node: &Node) -> Result<serde_json::Value, RenderError> {
    render(node, &FormatOptions::default())
}

fn name_input() -> Node {
    input("Name", plain_text_input(Some("name")))
}

#[test]
fn test_message_blocks() {
    let tree = blocks(vec![
        section(None, vec![ChildInput::from("Hello "), el("b", "world").into()]),
        divider(),
    ]);
    assert_eq!(
        render_default(&tree).unwrap(),
        json!([
            {"type": "section", "text": {"type": "mrkdwn", "text": "Hello *world*", "verbatim": true}},
            {"type": "divider"}
        ])
    );
}

#[test]
fn test_output_keeps_attribute_order() {
    let tree = blocks(section(Some("intro"), "x"));
    let text = serde_json::to_string(&render_default(&tree).unwrap()).unwrap();
    assert_eq!(
        text,
        r#"[{"type":"section","block_id":"intro","text":{"type":"mrkdwn","text":"x","verbatim":true}}]"#
    );
}

#[test]
fn test_input_block_rejected_in_message() {
    assert_eq!(
        render_default(&blocks(name_input())),
        Err(RenderError::IncompatibleBlock {
            surface: Surface::Message,
            kind: "input".into()
        })
    );
}

#[test]
fn test_input_block_accepted_in_modal() {
    let view = modal(
        ModalProps {
            title: "Form".into(),
            submit: Some("Send".into()),
            ..Default::default()
        },
        name_input(),
    );
    assert_eq!(
        render_default(&view).unwrap(),
        json!({
            "type": "modal",
            "title": {"type": "plain_text", "text": "Form", "emoji": true},
            "submit": {"type": "plain_text", "text": "Send", "emoji": true},
            "blocks": [{
                "type": "input",
                "label": {"type": "plain_text", "text": "Name", "emoji": true},
                "element": {"type": "plain_text_input", "action_id": "name"}
            }]
        })
    );
}

#[test]
fn test_radio_buttons_only_on_home() {
    let radio = || actions(None, Node::object().attr("type", "radio_buttons"));

    assert_eq!(
        render_default(&blocks(radio())),
        Err(RenderError::IncompatibleAction {
            surface: Surface::Message,
            kind: "radio_buttons".into()
        })
    );
    let view = render_default(&home(HomeProps::default(), radio())).unwrap();
    assert_eq!(view["type"], "home");
    assert_eq!(view["blocks"][0]["elements"][0]["type"], "radio_buttons");
}

#[test]
fn test_section_accessory() {
    let tree = blocks(section(None, "Approve?").attr("accessory", button(Some("ok"), "OK")));
    let out = render_default(&tree).unwrap();
    assert_eq!(
        out[0]["accessory"],
        json!({"type": "button", "text": {"type": "plain_text", "text": "OK", "emoji": true}, "action_id": "ok"})
    );
}

#[test]
fn test_header_uses_plain_text() {
    let tree = blocks(header(vec![ChildInput::from("a"), br(), el("b", "b").into()]));
    assert_eq!(render_default(&tree).unwrap()[0]["text"]["text"], "a\nb");
}

#[test]
fn test_inline_tag_in_container_is_rejected() {
    assert_eq!(
        render_default(&blocks(el("b", "x"))),
        Err(RenderError::NotABlock {
            surface: Surface::Message,
            tag: "b".into()
        })
    );
}

#[test]
fn test_inline_tag_outside_text_is_rejected() {
    let tree = blocks(section(None, "x").attr("accessory", el("b", "x")));
    assert_eq!(
        render_default(&tree),
        Err(RenderError::UnexpectedElement("b".into()))
    );
}

#[test]
fn test_intrinsic_tags_alias_to_blocks() {
    let tree = blocks(vec![
        el("section", vec![ChildInput::from("Hi "), el("b", "there").into()]),
        el_with("hr", vec![("id", "rule")], ()),
        el_with("img", vec![("src", "https://example.com/a.png"), ("alt", "a")], ()),
    ]);
    assert_eq!(
        render_default(&tree).unwrap(),
        json!([
            {"type": "section", "text": {"type": "mrkdwn", "text": "Hi *there*", "verbatim": true}},
            {"type": "divider", "block_id": "rule"},
            {"type": "image", "image_url": "https://example.com/a.png", "alt_text": "a"}
        ])
    );
}

#[test]
fn test_input_tag_aliases_only_in_modal() {
    let field = || {
        el_with(
            "input",
            vec![("label", "Name"), ("name", "name"), ("placeholder", "Jane")],
            (),
        )
    };
    assert_eq!(
        render_default(&blocks(field())),
        Err(RenderError::IncompatibleBlock {
            surface: Surface::Message,
            kind: "input".into()
        })
    );

    let view = modal(
        ModalProps {
            title: "Form".into(),
            ..Default::default()
        },
        field(),
    );
    assert_eq!(
        render_default(&view).unwrap()["blocks"][0],
        json!({
            "type": "input",
            "label": {"type": "plain_text", "text": "Name", "emoji": true},
            "element": {
                "type": "plain_text_input",
                "action_id": "name",
                "placeholder": {"type": "plain_text", "text": "Jane", "emoji": true}
            }
        })
    );
}

#[test]
fn test_rendering_does_not_change_the_tree() {
    let tree = blocks(section(None, el("i", "x")));
    let before = tree.clone();
    let first = render_default(&tree).unwrap();
    let second = render_default(&tree).unwrap();
    assert_eq!(first, second);
    assert_eq!(tree, before);
}
