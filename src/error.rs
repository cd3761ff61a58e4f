//! Error types for reference extraction and link rendering.

use std::string::FromUtf8Error;

/// Error raised while extracting documentation references.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReferenceError {
    /// No documentable entity was supplied.
    #[error("missing documentable")]
    MissingInput,

    /// The `docs` field is neither a string nor a sequence of strings.
    #[error("documentation field must be a string or an array of strings")]
    InvalidShape,

    /// A candidate reference is empty.
    #[error("undefined documentation reference")]
    UndefinedReference,

    /// A candidate reference does not look like a URL.
    #[error("invalid documentation url: {0}")]
    InvalidReference(String),
}

/// Violation of the single pending link invariant.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LinkStateError {
    /// A link opened while another link was still pending.
    #[error("link opened before pending link to {pending:?} was closed")]
    AlreadyPending {
        /// Href of the link that was never closed.
        pending: String,
    },

    /// A link closed with no pending link.
    #[error("link closed with no pending link")]
    NotPending,

    /// Rendering finished with a link still pending.
    #[error("rendering finished with unclosed link to {pending:?}")]
    Unclosed {
        /// Href of the link that was never closed.
        pending: String,
    },
}

/// Error raised while rendering markdown.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Link boundaries arrived out of order.
    #[error("renderer state error")]
    RendererState(#[from] LinkStateError),

    /// HTML formatter failed to write output.
    #[error("HTML formatting failed")]
    Format(#[from] std::io::Error),

    /// HTML formatter produced invalid UTF-8.
    #[error("rendered HTML is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),
}
