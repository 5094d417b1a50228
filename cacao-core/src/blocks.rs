// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rich-text blocks renderer
//!
//! Turns the CMS block format into HTML. Recognized nodes are `paragraph`,
//! `heading` and `list`; any other node contributes its plain text. The
//! renderer never fails: unexpected shapes degrade to text or to their JSON
//! form.

use serde_json::Value;

/// Heading level used when a node does not declare one
pub const DEFAULT_HEADING_LEVEL: u64 = 2;

/// Renders a rich-text value to HTML.
///
/// - falsy (`null`, `false`, `0`, `""`) renders as `""`
/// - a string is returned verbatim (already rendered or plain text)
/// - an array is rendered node by node, in order
/// - an object with a string `text` field yields that text
/// - anything else yields its compact JSON form
pub fn render_blocks(value: &Value) -> String {
    if is_falsy(value) {
        return String::new();
    }

    match value {
        Value::String(s) => s.clone(),
        Value::Array(nodes) => nodes.iter().map(render_node).collect(),
        Value::Object(map) => match map.get("text") {
            Some(Value::String(text)) => text.clone(),
            _ => value.to_string(),
        },
        other => other.to_string(),
    }
}

/// Plain text of a rich-text value, without markup.
pub fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(nodes) => nodes
            .iter()
            .map(|n| node_text(n, false))
            .collect::<Vec<_>>()
            .join(" "),
        Value::Object(_) => node_text(value, false),
        _ => String::new(),
    }
}

/// Escapes `&`, `<`, `>`, `"` and `'` for HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn render_node(node: &Value) -> String {
    let Value::Object(map) = node else {
        return match node {
            Value::String(s) => escape_html(s),
            _ => String::new(),
        };
    };

    match map.get("type").and_then(Value::as_str) {
        Some("paragraph") => format!("<p>{}</p>", node_text(node, true)),
        Some("heading") => {
            let level = map
                .get("level")
                .and_then(heading_level)
                .map(|l| l.clamp(1, 6))
                .unwrap_or(DEFAULT_HEADING_LEVEL);
            format!("<h{level}>{}</h{level}>", node_text(node, true))
        }
        Some("list") => {
            let tag = match map.get("format").and_then(Value::as_str) {
                Some("ordered") => "ol",
                _ => "ul",
            };
            let items: String = map
                .get("children")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .map(|item| format!("<li>{}</li>", node_text(item, true)))
                        .collect()
                })
                .unwrap_or_default();
            format!("<{tag}>{items}</{tag}>")
        }
        _ => node_text(node, true),
    }
}

/// Heading level from an integer, a whole float (`3.0`) or a numeric string (`"3"`).
fn heading_level(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Concatenated text of a node: its own `text`, else its children's.
fn node_text(node: &Value, escape: bool) -> String {
    match node {
        Value::Object(map) => {
            if let Some(Value::String(text)) = map.get("text") {
                return if escape {
                    escape_html(text)
                } else {
                    text.clone()
                };
            }
            map.get("children")
                .and_then(Value::as_array)
                .map(|children| children.iter().map(|c| node_text(c, escape)).collect())
                .unwrap_or_default()
        }
        Value::String(s) if escape => escape_html(s),
        Value::String(s) => s.clone(),
        _ => String::new(),
    }
}
