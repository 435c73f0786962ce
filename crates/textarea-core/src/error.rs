use crate::position::Position;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors produced by [`Document`](crate::Document) operations.
pub enum DocumentError {
    #[error("position {position} is outside the document")]
    /// A row or column does not address the document.
    OutOfRange {
        /// The rejected position.
        position: Position,
    },

    #[error("range start {start} is after its end {end}")]
    /// The start of a range comes after its end in document order.
    UnorderedRange {
        /// Range start.
        start: Position,
        /// Range end.
        end: Position,
    },

    #[error("invalid content: {0}")]
    /// Bulk-loaded content cannot be represented as a line sequence.
    InvalidContent(String),
}

impl DocumentError {
    /// Whether this error is a positional rejection (`OutOfRange` in the broad sense).
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::UnorderedRange { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors produced while selecting a language or building a parser.
pub enum SyntaxError {
    #[error("unknown language '{0}'")]
    /// The registry has no language under this name.
    UnknownLanguage(String),

    #[error("language error: {0}")]
    /// The parser rejected the language (e.g. ABI mismatch).
    Language(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors surfaced by [`TextEditor`](crate::TextEditor).
pub enum EditorError {
    #[error(transparent)]
    /// A document edit or load was rejected.
    Document(#[from] DocumentError),

    #[error(transparent)]
    /// Language selection failed.
    Syntax(#[from] SyntaxError),
}
