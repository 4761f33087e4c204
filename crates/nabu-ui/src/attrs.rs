//! Attribute resolution: raw markup strings → toolkit-ready typed values.

use nabu_markup::Element;

use crate::error::RenderError;
use crate::toolkit::Spacing;

// ── FontSpec ──────────────────────────────────────────────────────────────

/// A parsed `font` attribute: `"family size [bold] [italic]"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    pub family: String,
    pub size: i32,
    pub bold: bool,
    pub italic: bool,
}

impl FontSpec {
    /// Parse a font string. An empty string yields `None`; a size that is
    /// not a number disables the font override entirely, matching the
    /// forgiving historical behavior.
    pub fn parse(s: &str) -> Option<FontSpec> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let family = (*parts.first()?).to_string();
        let size = match parts.get(1) {
            Some(p) => p.parse::<i32>().ok()?,
            None => 10,
        };
        Some(FontSpec {
            family,
            size,
            bold: parts.contains(&"bold"),
            italic: parts.contains(&"italic"),
        })
    }
}

// ── Per-kind resolved attributes ──────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerAttrs {
    pub width: Option<i32>,
    pub height: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelAttrs {
    pub text: String,
    pub font: Option<FontSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonAttrs {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputAttrs {
    pub width: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextAreaAttrs {
    pub width: Option<i32>,
    pub height: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckboxAttrs {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadioAttrs {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownAttrs {
    pub width: Option<i32>,
}

// ── Policies ──────────────────────────────────────────────────────────────

/// How integer-coerced attributes behave when absent or non-numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericPolicy {
    /// Absent stays absent; a non-numeric value is fatal for the render.
    Strict,
    /// Absent or non-numeric falls back to a fixed per-kind constant.
    Defaulting,
}

/// Where child spacing comes from when a container carries no explicit
/// `padx`/`pady`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingPolicy {
    /// One value everywhere (the tag-scan renderer's default of 5).
    Uniform(i32),
    /// Fixed constants per child tag (the XML renderer's defaults).
    PerTag,
}

impl SpacingPolicy {
    /// The fallback spacing for a child with the given tag.
    pub fn for_tag(self, tag: &str) -> Spacing {
        match self {
            SpacingPolicy::Uniform(v) => Spacing::uniform(v),
            SpacingPolicy::PerTag => match tag {
                "label" | "text" | "separator" => Spacing::new(0, 5),
                "entry" | "radio" | "checkbox" | "combobox" => Spacing::new(2, 0),
                "button" => Spacing::new(5, 0),
                _ => Spacing::new(0, 0),
            },
        }
    }
}

/// The renderer's behavioral knobs, bundled. [`strict`](RenderPolicy::strict)
/// matches the tag-scan lineage, [`defaulting`](RenderPolicy::defaulting)
/// the XML lineage. The two are deliberately not unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPolicy {
    pub numeric: NumericPolicy,
    pub spacing: SpacingPolicy,
}

impl RenderPolicy {
    pub fn strict() -> Self {
        Self { numeric: NumericPolicy::Strict, spacing: SpacingPolicy::Uniform(5) }
    }

    pub fn defaulting() -> Self {
        Self { numeric: NumericPolicy::Defaulting, spacing: SpacingPolicy::PerTag }
    }
}

impl Default for RenderPolicy {
    fn default() -> Self {
        Self::strict()
    }
}

// ── Resolver ──────────────────────────────────────────────────────────────

/// Resolves raw element attributes under a [`NumericPolicy`].
#[derive(Debug, Clone, Copy)]
pub struct AttrResolver {
    pub numeric: NumericPolicy,
}

impl AttrResolver {
    /// Resolve an integer-coerced attribute. `default` applies only under
    /// the defaulting policy.
    pub fn int(
        &self,
        el: &Element,
        name: &str,
        default: Option<i32>,
    ) -> Result<Option<i32>, RenderError> {
        match el.attr(name) {
            None => Ok(match self.numeric {
                NumericPolicy::Strict => None,
                NumericPolicy::Defaulting => default,
            }),
            Some(raw) => match raw.trim().parse::<i32>() {
                Ok(n) => Ok(Some(n)),
                Err(_) => match self.numeric {
                    NumericPolicy::Strict => Err(RenderError::BadNumericAttribute {
                        tag: el.tag.clone(),
                        attribute: name.to_string(),
                        value: raw.to_string(),
                    }),
                    NumericPolicy::Defaulting => Ok(default),
                },
            },
        }
    }
}

/// Split a combobox `values` attribute. Split on `,` with no trimming —
/// embedded spaces are preserved. A documented quirk, not a bug.
pub fn split_values(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_full_spec() {
        let f = FontSpec::parse("Arial 14 bold italic").unwrap();
        assert_eq!(f.family, "Arial");
        assert_eq!(f.size, 14);
        assert!(f.bold && f.italic);
    }

    #[test]
    fn font_family_only_defaults_size() {
        let f = FontSpec::parse("Consolas").unwrap();
        assert_eq!(f.size, 10);
        assert!(!f.bold);
    }

    #[test]
    fn font_bad_size_disables_override() {
        assert!(FontSpec::parse("Arial big bold").is_none());
        assert!(FontSpec::parse("").is_none());
    }

    #[test]
    fn values_keep_embedded_spaces() {
        assert_eq!(split_values("a, b,c "), vec!["a", " b", "c "]);
    }

    #[test]
    fn strict_flags_non_numeric() {
        let mut el = Element::new("entry");
        el.attributes.push(("width".into(), "wide".into()));
        let r = AttrResolver { numeric: NumericPolicy::Strict };
        assert!(matches!(
            r.int(&el, "width", Some(20)),
            Err(RenderError::BadNumericAttribute { .. })
        ));
    }

    #[test]
    fn defaulting_falls_back() {
        let mut el = Element::new("entry");
        el.attributes.push(("width".into(), "wide".into()));
        let r = AttrResolver { numeric: NumericPolicy::Defaulting };
        assert_eq!(r.int(&el, "width", Some(20)).unwrap(), Some(20));
        assert_eq!(r.int(&el, "height", Some(5)).unwrap(), Some(5));
    }

    #[test]
    fn strict_leaves_absent_absent() {
        let el = Element::new("entry");
        let r = AttrResolver { numeric: NumericPolicy::Strict };
        assert_eq!(r.int(&el, "width", Some(20)).unwrap(), None);
    }
}
