// ── Element ───────────────────────────────────────────────────────────────

/// A parsed markup node.
///
/// ```xml
/// <frame layout="horizontal" padx="3">
///     <label text="Name:" />
///     <entry id="name_entry" width="30" />
/// </frame>
/// ```
///
/// Attributes keep their source order; lookup is by first match, which is
/// also the only match for well-formed input.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name: `"window"`, `"frame"`, `"label"`, …
    pub tag: String,
    /// Raw `name="value"` pairs in source order.
    pub attributes: Vec<(String, String)>,
    /// Trimmed text content between this tag's open and close, if any.
    pub text: Option<String>,
    /// Nested child elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Look up an attribute value, falling back to `default` when absent.
    pub fn attr_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.attr(name).unwrap_or(default)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }
}
