use thiserror::Error;

/// A fatal failure while realizing an element tree.
///
/// Most renderer lapses are deliberately non-fatal (unsupported tags vanish,
/// unknown commands become no-ops); what remains is the strict numeric
/// policy rejecting garbage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("attribute {attribute}={value:?} on <{tag}> is not an integer")]
    BadNumericAttribute {
        tag: String,
        attribute: String,
        value: String,
    },
}

/// Anything [`crate::surface::Surface`] can surface to the user. Parse and
/// render failures are reported without crashing the host; the surface
/// recovers to its cleared state first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error(transparent)]
    Parse(#[from] nabu_markup::ParseError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
