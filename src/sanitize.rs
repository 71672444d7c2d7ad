//! Allow-list sanitizer for translation markup.
//!
//! Author-supplied translation payloads are HTML fragments and must never be
//! injected into the page as-is. This module parses a payload with an
//! error-tolerant HTML5 parser into a detached tree (nothing is ever executed
//! or attached to a live document), keeps only the allow-listed tags, and
//! re-serializes the result.
//!
//! Allow-list: `<br>` and `<span>`. A `<span>` may keep a single `class`
//! attribute, and only when its value is exactly the red-text marker; every
//! other attribute is stripped. Any element outside the allow-list is
//! flattened to a text node holding its text content, at any nesting depth —
//! the tag is destroyed, the visible text survives. This includes `<script>`
//! and `<style>` bodies, which come out as inert escaped text.

use html5ever::driver::ParseOpts;
use html5ever::tendril::TendrilSink;
use html5ever::{local_name, namespace_url, ns, parse_fragment, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// The one class value a `<span>` is allowed to keep.
const ALLOWED_SPAN_CLASS: &str = "text-red";

/// Sanitize a raw translation fragment down to the allow-listed subset.
///
/// Empty input returns the empty string. Malformed markup is handled by the
/// parser's normal error recovery; this function never fails — worst case is
/// an empty or best-effort-cleaned string.
pub fn sanitize_translation(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let dom = parse_fragment(
        RcDom::default(),
        ParseOpts::default(),
        QualName::new(None, ns!(html), local_name!("body")),
        vec![],
    )
    .one(raw);

    // The fragment parser wraps the parsed nodes in a synthetic <html> root.
    let mut out = String::new();
    for root in dom.document.children.borrow().iter() {
        if let NodeData::Element { .. } = &root.data {
            for child in root.children.borrow().iter() {
                clean_node(child, &mut out);
            }
        }
    }
    out
}

/// Serialize one cleaned node into `out`.
fn clean_node(node: &Handle, out: &mut String) {
    match &node.data {
        NodeData::Text { contents } => escape_into(&contents.borrow(), out),
        NodeData::Element { name, attrs, .. } => match &*name.local {
            "br" => out.push_str("<br>"),
            "span" => {
                let keep_class = attrs.borrow().iter().any(|attr| {
                    &*attr.name.local == "class" && &*attr.value == ALLOWED_SPAN_CLASS
                });
                if keep_class {
                    out.push_str("<span class=\"text-red\">");
                } else {
                    out.push_str("<span>");
                }
                for child in node.children.borrow().iter() {
                    clean_node(child, out);
                }
                out.push_str("</span>");
            }
            // Not allow-listed: flatten to text content, tag discarded.
            _ => {
                let mut text = String::new();
                text_content(node, &mut text);
                escape_into(&text, out);
            }
        },
        // Comments, processing instructions and friends are dropped.
        _ => {}
    }
}

/// Collect the text content of a subtree in document order.
fn text_content(node: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &node.data {
        out.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        text_content(child, out);
    }
}

/// Escape text for serialization as markup.
fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}
