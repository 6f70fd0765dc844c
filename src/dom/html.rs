//! Deterministic HTML serialization of page subtrees.
//!
//! Attribute order is fixed (id, class, other attributes in insertion order,
//! style) so the output is stable enough for snapshot tests.

use super::node::NodeId;
use super::page::Page;
use std::fmt::Write as _;

const VOID_ELEMENTS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];

/// Serialize `id` and its descendants. Stale handles serialize to "".
pub fn to_html(page: &Page, id: NodeId) -> String {
    let mut out = String::new();
    write_node(page, id, &mut out);
    out
}

fn write_node(page: &Page, id: NodeId, out: &mut String) {
    let Some(node) = page.node(id) else {
        return;
    };

    out.push('<');
    out.push_str(node.tag());
    if let Some(node_id) = node.id() {
        let _ = write!(out, " id=\"{}\"", escape(node_id));
    }
    if !node.classes().is_empty() {
        let _ = write!(out, " class=\"{}\"", escape(&node.classes().join(" ")));
    }
    for (name, value) in node.attributes() {
        let _ = write!(out, " {}=\"{}\"", name, escape(value));
    }
    if node.tag() == "input" && !node.value().is_empty() {
        let _ = write!(out, " value=\"{}\"", escape(node.value()));
    }
    if !node.styles().is_empty() {
        let style = node
            .styles()
            .iter()
            .map(|(p, v)| format!("{}: {}", p, v))
            .collect::<Vec<_>>()
            .join("; ");
        let _ = write!(out, " style=\"{}\"", escape(&style));
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&node.tag()) {
        return;
    }

    if let Some(text) = node.text() {
        out.push_str(&escape(text));
    }
    for child in node.children() {
        write_node(page, *child, out);
    }
    let _ = write!(out, "</{}>", node.tag());
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
