//! Small XML helpers shared by the assembler, the cropper and the pipeline.

use roxmltree::{Document, Node, NodeType};
use std::fmt::Write as _;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Escapes the five reserved XML characters.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Formats a number for an SVG attribute: shortest round-trippable form, no `-0`, and no float
/// noise from our own arithmetic.
pub fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

/// Formats a number with at most `decimals` fractional digits, trimming trailing zeros.
pub fn fmt_decimals(v: f64, decimals: u8) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut s = format!("{:.*}", decimals as usize, v);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

pub fn count_path_elements(doc: &Document<'_>) -> usize {
    doc.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "path")
        .count()
}

/// Attribute edits applied while re-serializing a parsed document.
#[derive(Debug, Default)]
pub struct Rewrite<'a> {
    /// Attributes set on the root element, replacing existing values in place.
    pub root_attributes: Vec<(&'a str, String)>,
    pub strip_group_transforms: bool,
}

/// Serializes `doc` back to markup with `rewrite` applied.
///
/// The XML declaration and processing instructions are dropped; elements, attributes, text and
/// comments are kept in document order.
pub fn serialize(doc: &Document<'_>, rewrite: &Rewrite<'_>) -> String {
    let mut out = String::new();
    write_element(&mut out, doc.root_element(), rewrite, true);
    out
}

fn qualified_name(node: Node<'_, '_>, namespace: Option<&str>, local: &str) -> String {
    let prefix = namespace.and_then(|ns| node.lookup_prefix(ns));
    match prefix {
        Some(p) if !p.is_empty() => format!("{p}:{local}"),
        _ => local.to_string(),
    }
}

fn write_namespace_declarations(out: &mut String, node: Node<'_, '_>) {
    let inherited: Vec<(Option<&str>, &str)> = node
        .parent_element()
        .map(|p| p.namespaces().map(|ns| (ns.name(), ns.uri())).collect())
        .unwrap_or_default();

    for ns in node.namespaces() {
        if ns.name() == Some("xml") || inherited.contains(&(ns.name(), ns.uri())) {
            continue;
        }
        match ns.name() {
            Some(prefix) => {
                let _ = write!(out, r#" xmlns:{prefix}="{}""#, escape_xml(ns.uri()));
            }
            None => {
                let _ = write!(out, r#" xmlns="{}""#, escape_xml(ns.uri()));
            }
        }
    }
}

fn write_element(out: &mut String, node: Node<'_, '_>, rewrite: &Rewrite<'_>, is_root: bool) {
    let tag = node.tag_name();
    let name = qualified_name(node, tag.namespace(), tag.name());
    let is_group = tag.name() == "g";

    out.push('<');
    out.push_str(&name);
    write_namespace_declarations(out, node);

    let mut pending_root: Vec<&(&str, String)> = if is_root {
        rewrite.root_attributes.iter().collect()
    } else {
        Vec::new()
    };

    for attr in node.attributes() {
        if is_group && rewrite.strip_group_transforms && attr.name() == "transform" {
            continue;
        }
        let attr_name = qualified_name(node, attr.namespace(), attr.name());
        let value = match pending_root
            .iter()
            .position(|(k, _)| attr.namespace().is_none() && *k == attr.name())
        {
            Some(idx) => pending_root.remove(idx).1.clone(),
            None => attr.value().to_string(),
        };
        let _ = write!(out, r#" {attr_name}="{}""#, escape_xml(&value));
    }
    for (k, v) in pending_root {
        let _ = write!(out, r#" {k}="{}""#, escape_xml(v));
    }

    let mut children = node.children().peekable();
    if children.peek().is_none() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    for child in children {
        match child.node_type() {
            NodeType::Element => write_element(out, child, rewrite, false),
            NodeType::Text => out.push_str(&escape_xml(child.text().unwrap_or_default())),
            NodeType::Comment => {
                let _ = write!(out, "<!--{}-->", child.text().unwrap_or_default());
            }
            NodeType::Root | NodeType::PI => {}
        }
    }
    let _ = write!(out, "</{name}>");
}
