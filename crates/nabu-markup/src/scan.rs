//! Tag-scanning parser backend.
//!
//! Scans the source for tag tokens with a regex and resolves nesting with a
//! stack. Deliberately loose: it never fails. Mismatched closing tags are
//! ignored, unsupported opening tags vanish (their children reattach to the
//! nearest supported ancestor), and anything after the root closes is
//! skipped. The strict alternative lives in [`crate::xml`].

use std::sync::LazyLock;

use regex::Regex;

use crate::UnknownAttrs;
use crate::element::Element;
use crate::vocab::{is_supported_attribute, is_supported_tag};

/// Matches `<tag …>`, `</tag>`, and `<tag … />` tokens. The third capture
/// holds everything between the tag name and the closing `>`, including a
/// trailing `/` for self-closing tags.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(/?)(\w+)([^>]*?)>").expect("tag pattern is valid")
});

/// Matches `name="value"` and `name='value'` pairs inside a tag token.
static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\w+)\s*=\s*["'](.*?)["']"#).expect("attribute pattern is valid")
});

/// Parse `src` into an element tree.
///
/// Returns `None` when the source contains no tag tokens at all — a null
/// tree, not an error.
pub fn parse(src: &str, unknown_attrs: UnknownAttrs) -> Option<Element> {
    let matches: Vec<regex::Captures<'_>> = TAG_RE.captures_iter(src).collect();
    let first = matches.first()?;

    // The first token establishes the root, whatever its tag is.
    let mut root = Element::new(&first[2]);
    root.attributes = parse_attributes(&first[3], unknown_attrs);

    let mut stack = vec![root];
    let mut last_end = first.get(0).map(|m| m.end()).unwrap_or(0);
    let mut finished: Option<Element> = None;

    for m in &matches[1..] {
        let token = m.get(0).expect("whole-match group always present");

        // Text strictly between the previous token and this one belongs to
        // the element currently on top of the stack.
        let text = src[last_end..token.start()].trim();
        if !text.is_empty() {
            if let Some(top) = stack.last_mut() {
                top.text = Some(text.to_string());
            }
        }
        last_end = token.end();

        if finished.is_some() {
            // Root already closed; trailing tags are skipped.
            continue;
        }

        let closing = &m[1] == "/";
        let tag = &m[2];
        let body = &m[3];

        if closing {
            // Pop only when the top matches; a stray close is ignored.
            if stack.last().is_some_and(|top| top.tag == tag) {
                let done = stack.pop().expect("stack top checked above");
                match stack.last_mut() {
                    Some(parent) => parent.children.push(done),
                    None => finished = Some(done),
                }
            }
        } else if is_supported_tag(tag) {
            let mut el = Element::new(tag);
            el.attributes = parse_attributes(body, unknown_attrs);

            if body.trim_end().ends_with('/') {
                // Self-closing: complete immediately, never on the stack.
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(el);
                }
            } else {
                stack.push(el);
            }
        } else {
            log::debug!("dropping unsupported tag <{tag}>");
        }
    }

    // Unclosed elements at EOF fold into their parents.
    while let Some(done) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.children.push(done),
            None => return Some(done),
        }
    }
    finished
}

fn parse_attributes(body: &str, unknown_attrs: UnknownAttrs) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    for cap in ATTR_RE.captures_iter(body) {
        let name = &cap[1];
        if unknown_attrs == UnknownAttrs::Drop && !is_supported_attribute(name) {
            log::debug!("dropping unsupported attribute {name:?}");
            continue;
        }
        attrs.push((name.to_string(), cap[2].to_string()));
    }
    attrs
}
