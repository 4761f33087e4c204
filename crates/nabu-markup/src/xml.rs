//! Structured XML parser backend.
//!
//! Delegates to a standards-compliant XML parser and converts the result
//! into the shared [`Element`] tree. Unlike [`crate::scan`], this backend
//! rejects ill-formed input outright and validates the root tag, but it is
//! permissive about attributes: everything the document carries is passed
//! through (under its default options).

use crate::UnknownAttrs;
use crate::element::Element;
use crate::error::ParseError;
use crate::vocab::{ROOT_TAG, is_supported_attribute};

/// Parse `src` as XML into an element tree.
pub fn parse(src: &str, unknown_attrs: UnknownAttrs) -> Result<Element, ParseError> {
    let doc = roxmltree::Document::parse(src).map_err(|e| ParseError::MalformedMarkup {
        message: e.to_string(),
    })?;

    let root = doc.root_element();
    if root.tag_name().name() != ROOT_TAG {
        return Err(ParseError::InvalidRoot {
            found: root.tag_name().name().to_string(),
        });
    }

    Ok(convert(root, unknown_attrs))
}

fn convert(node: roxmltree::Node<'_, '_>, unknown_attrs: UnknownAttrs) -> Element {
    let mut el = Element::new(node.tag_name().name());

    for attr in node.attributes() {
        if unknown_attrs == UnknownAttrs::Drop && !is_supported_attribute(attr.name()) {
            log::debug!("dropping unsupported attribute {:?}", attr.name());
            continue;
        }
        el.attributes.push((attr.name().to_string(), attr.value().to_string()));
    }

    // Text before the first child element, trimmed; empty means none.
    if let Some(text) = node.text() {
        let text = text.trim();
        if !text.is_empty() {
            el.text = Some(text.to_string());
        }
    }

    el.children = node
        .children()
        .filter(|c| c.is_element())
        .map(|c| convert(c, unknown_attrs))
        .collect();

    el
}
