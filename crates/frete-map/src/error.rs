//! Error types for document analysis.

use std::fmt;

/// Errors from document analysis operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The payload text is not a syntactically valid document.
    /// Carries the underlying parser's message verbatim.
    Parse { message: String },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { message } => write!(f, "document parse error: {message}"),
        }
    }
}

impl std::error::Error for DocumentError {}
