//! Error types for rate-table ingestion.

use thiserror::Error;

/// Errors that can occur while ingesting a delimited rate table.
///
/// Both variants are fatal to the current ingest attempt and are surfaced
/// verbatim to the operator; nothing here retries.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The text is not a usable table: too few lines, or too few columns.
    #[error("format error: {reason}")]
    Format { reason: String },

    /// The table has a header but no data rows.
    #[error("empty input: no data rows after the header line")]
    EmptyInput,
}

impl IngestError {
    pub(crate) fn format(reason: impl Into<String>) -> Self {
        Self::Format {
            reason: reason.into(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
