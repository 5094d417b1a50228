// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Blocks renderer tests

use cacao_core::blocks::{plain_text, render_blocks};
use proptest::prelude::*;
use serde_json::{json, Value};

#[test]
fn test_paragraph() {
    let html = render_blocks(&json!([
        {"type": "paragraph", "children": [{"text": "Hello"}]}
    ]));
    assert_eq!(html, "<p>Hello</p>");
}

#[test]
fn test_heading_with_level() {
    let html = render_blocks(&json!([
        {"type": "heading", "level": 3, "children": [{"text": "Hi"}]}
    ]));
    assert_eq!(html, "<h3>Hi</h3>");
}

#[test]
fn test_heading_level_as_string_or_float() {
    let html = render_blocks(&json!([
        {"type": "heading", "level": "4", "children": [{"text": "Praline"}]},
        {"type": "heading", "level": 1.0, "children": [{"text": "Ganache"}]}
    ]));
    assert_eq!(html, "<h4>Praline</h4><h1>Ganache</h1>");
}

#[test]
fn test_ordered_list() {
    let html = render_blocks(&json!([
        {"type": "list", "format": "ordered", "children": [
            {"children": [{"text": "A"}]},
            {"children": [{"text": "B"}]}
        ]}
    ]));
    assert_eq!(html, "<ol><li>A</li><li>B</li></ol>");
}

#[test]
fn test_unordered_list() {
    let html = render_blocks(&json!([
        {"type": "list", "format": "unordered", "children": [
            {"type": "list-item", "children": [{"text": "Dark"}]}
        ]}
    ]));
    assert_eq!(html, "<ul><li>Dark</li></ul>");
}

#[test]
fn test_null_is_empty() {
    assert_eq!(render_blocks(&Value::Null), "");
}

#[test]
fn test_string_unchanged() {
    let text = "<p>Already <b>rendered</b></p>";
    assert_eq!(render_blocks(&json!(text)), text);
}

#[test]
fn test_order_preserved() {
    let html = render_blocks(&json!([
        {"type": "heading", "level": 1, "children": [{"text": "Pralines"}]},
        {"type": "paragraph", "children": [{"text": "Hazelnut "}, {"text": "and almond"}]},
        {"type": "quote", "children": [{"text": "Best in town"}]}
    ]));
    assert_eq!(
        html,
        "<h1>Pralines</h1><p>Hazelnut and almond</p>Best in town"
    );
}

#[test]
fn test_inline_link_text_included() {
    let html = render_blocks(&json!([
        {"type": "paragraph", "children": [
            {"text": "Book a "},
            {"type": "link", "url": "/school", "children": [{"text": "class"}]}
        ]}
    ]));
    assert_eq!(html, "<p>Book a class</p>");
}

#[test]
fn test_object_with_text() {
    assert_eq!(render_blocks(&json!({"text": "Plain"})), "Plain");
}

#[test]
fn test_unknown_shape_serialized() {
    assert_eq!(render_blocks(&json!({"foo": 1})), r#"{"foo":1}"#);
    assert_eq!(render_blocks(&json!(42)), "42");
    assert_eq!(render_blocks(&json!(true)), "true");
}

#[test]
fn test_malformed_nodes_degrade() {
    let html = render_blocks(&json!([
        null,
        {"type": "paragraph"},
        {"type": "list", "children": "oops"},
        {"type": "heading", "level": "big", "children": [{"text": "T"}]}
    ]));
    assert_eq!(html, "<p></p><ul></ul><h2>T</h2>");
}

#[test]
fn test_plain_text_of_string() {
    assert_eq!(plain_text(&json!("Ganache")), "Ganache");
    assert_eq!(plain_text(&Value::Null), "");
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        ".{0,12}".prop_map(Value::String),
        prop_oneof![
            Just("paragraph"),
            Just("heading"),
            Just("list"),
            Just("ordered"),
            Just("text"),
            Just("children"),
        ]
        .prop_map(|s| Value::String(s.to_string())),
    ];
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(
                (
                    prop_oneof![
                        Just("type".to_string()),
                        Just("children".to_string()),
                        Just("text".to_string()),
                        Just("level".to_string()),
                        Just("format".to_string()),
                        "[a-z]{1,5}",
                    ],
                    inner
                ),
                0..5
            )
            .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_render_never_panics(value in arb_json()) {
        let _ = render_blocks(&value);
        let _ = plain_text(&value);
    }

    #[test]
    fn prop_render_is_deterministic(value in arb_json()) {
        prop_assert_eq!(render_blocks(&value), render_blocks(&value));
    }

    #[test]
    fn prop_strings_verbatim(text in ".{1,40}") {
        prop_assert_eq!(render_blocks(&Value::String(text.clone())), text);
    }
}
