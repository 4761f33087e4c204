//! The fixed tag and attribute vocabulary of the markup language.
//!
//! Both tables are process-wide constants. The tag-scanning parser consults
//! them while building the tree; the renderer consults them again when
//! coercing attribute values.

// ── Tags ──────────────────────────────────────────────────────────────────

/// The root element of every document must carry this tag.
pub const ROOT_TAG: &str = "window";

/// Every tag the renderer knows how to realize.
pub const SUPPORTED_TAGS: &[&str] = &[
    "window",
    "frame",
    "label",
    "button",
    "entry",
    "text",
    "checkbox",
    "radio",
    "combobox",
    "separator",
];

pub fn is_supported_tag(name: &str) -> bool {
    SUPPORTED_TAGS.contains(&name)
}

// ── Attributes ────────────────────────────────────────────────────────────

/// How an attribute value is coerced before it reaches the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Passed through as a string.
    Str,
    /// Parsed as an integer (`width`, `height`, `padx`, `pady`).
    Int,
}

/// One entry of the attribute whitelist.
#[derive(Debug, Clone, Copy)]
pub struct AttrDef {
    pub name: &'static str,
    pub coercion: Coercion,
    /// Toolkit property the value maps onto, when it maps onto one directly.
    /// `None` for attributes the renderer consumes itself (`id`, `command`,
    /// `variable`, `values`, `title`, `layout`, `padx`, `pady`).
    pub property: Option<&'static str>,
}

/// The attribute whitelist. Attribute names outside this table are dropped
/// by the tag-scanning parser (under its default options) and ignored by
/// the renderer.
pub const ATTRIBUTES: &[AttrDef] = &[
    AttrDef { name: "id",       coercion: Coercion::Str, property: None },
    AttrDef { name: "text",     coercion: Coercion::Str, property: Some("text") },
    AttrDef { name: "width",    coercion: Coercion::Int, property: Some("width") },
    AttrDef { name: "height",   coercion: Coercion::Int, property: Some("height") },
    AttrDef { name: "bg",       coercion: Coercion::Str, property: Some("background") },
    AttrDef { name: "fg",       coercion: Coercion::Str, property: Some("foreground") },
    AttrDef { name: "font",     coercion: Coercion::Str, property: Some("font") },
    AttrDef { name: "command",  coercion: Coercion::Str, property: None },
    AttrDef { name: "variable", coercion: Coercion::Str, property: None },
    AttrDef { name: "value",    coercion: Coercion::Str, property: None },
    AttrDef { name: "values",   coercion: Coercion::Str, property: None },
    AttrDef { name: "orient",   coercion: Coercion::Str, property: Some("orient") },
    AttrDef { name: "title",    coercion: Coercion::Str, property: None },
    AttrDef { name: "layout",   coercion: Coercion::Str, property: None },
    AttrDef { name: "padx",     coercion: Coercion::Int, property: None },
    AttrDef { name: "pady",     coercion: Coercion::Int, property: None },
];

/// Look up a whitelist entry by attribute name.
pub fn attribute(name: &str) -> Option<&'static AttrDef> {
    ATTRIBUTES.iter().find(|a| a.name == name)
}

pub fn is_supported_attribute(name: &str) -> bool {
    attribute(name).is_some()
}
