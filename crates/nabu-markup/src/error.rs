use thiserror::Error;

use crate::vocab::ROOT_TAG;

/// A parse failure from one of the markup backends.
///
/// The tag-scanning backend never fails — it drops what it does not
/// understand — so these variants are only produced by the XML backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The XML parser rejected the input. The message is the underlying
    /// parser's own, so the user sees the real position and reason.
    #[error("malformed markup: {message}")]
    MalformedMarkup { message: String },

    /// The document parsed, but its root tag is not [`ROOT_TAG`].
    #[error("invalid root tag <{found}>, expected <{ROOT_TAG}>")]
    InvalidRoot { found: String },
}
