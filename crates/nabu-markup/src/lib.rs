//! Element tree and parser backends for the **Nabu widget markup language**.
//!
//! The language is a small XML-like dialect describing a widget tree:
//!
//! ```xml
//! <window title="Sample form" width="400" height="300">
//!     <label text="Enter your details:" />
//!     <frame layout="horizontal" padx="3" pady="3">
//!         <label text="Name:" />
//!         <entry id="name_entry" width="30" />
//!     </frame>
//! </window>
//! ```
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`element`] | `Element` tree node |
//! | [`vocab`] | supported tag set and attribute whitelist |
//! | [`scan`] | loose tag-scanning backend |
//! | [`xml`] | strict structured-XML backend |
//! | [`error`] | `ParseError` |
//!
//! # Quick start
//!
//! ```rust
//! use nabu_markup::{Backend, parse};
//!
//! let src = r#"<window><label text="hi" /></window>"#;
//! let root = parse(src, &Backend::TagScan.default_options()).unwrap().unwrap();
//! assert_eq!(root.tag, "window");
//! assert_eq!(root.children[0].attr("text"), Some("hi"));
//! ```
//!
//! # Two backends, two temperaments
//!
//! [`Backend::TagScan`] mirrors the loose historical scanner: it cannot
//! fail, silently drops what it does not recognize, and filters attributes
//! against the whitelist. [`Backend::Xml`] delegates to a real XML parser:
//! ill-formed input and a wrong root tag are hard errors, and attributes
//! pass through unfiltered. Both temperaments are observable behavior and
//! are kept selectable rather than unified; [`ParseOptions`] pins each
//! backend's historical attribute policy while letting hosts override it.

pub mod element;
pub mod error;
pub mod scan;
pub mod vocab;
pub mod xml;

pub use element::Element;
pub use error::ParseError;
pub use vocab::ROOT_TAG;

// ── Parse options ─────────────────────────────────────────────────────────

/// Which parser implementation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Regex tag scanner with stack-based nesting. Never fails.
    TagScan,
    /// Standards-compliant XML parsing with root validation.
    Xml,
}

/// What to do with attribute names outside the whitelist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownAttrs {
    /// Discard them without error (historical tag-scan behavior).
    Drop,
    /// Keep them; the renderer ignores what it does not use (historical
    /// XML-backend behavior).
    Passthrough,
}

/// Parser configuration: a backend plus its attribute policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub backend: Backend,
    pub unknown_attrs: UnknownAttrs,
}

impl Backend {
    /// The historical pairing: tag-scan filters attributes, XML passes
    /// them through.
    pub fn default_options(self) -> ParseOptions {
        let unknown_attrs = match self {
            Backend::TagScan => UnknownAttrs::Drop,
            Backend::Xml => UnknownAttrs::Passthrough,
        };
        ParseOptions { backend: self, unknown_attrs }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Backend::TagScan.default_options()
    }
}

// ── Entry point ───────────────────────────────────────────────────────────

/// Parse markup into an element tree.
///
/// `Ok(None)` means the source contained nothing to parse (tag-scan backend
/// only — the XML backend reports empty input as malformed).
pub fn parse(src: &str, options: &ParseOptions) -> Result<Option<Element>, ParseError> {
    match options.backend {
        Backend::TagScan => Ok(scan::parse(src, options.unknown_attrs)),
        Backend::Xml => xml::parse(src, options.unknown_attrs).map(Some),
    }
}
