//! Rate-table ingestion.
//!
//! This crate implements the table path of the schema-inference engine:
//! turning delimited text exported by logistics carriers into normalized
//! shipping-rate rows with no compile-time knowledge of the export's
//! layout.
//!
//! # Features
//!
//! - **Delimiter detection**: tab/semicolon/comma sniffing on the first line
//! - **Tokenization**: quote-aware splitting into headers and rows
//! - **Column mapping**: alias-table matching of headers to semantic fields,
//!   with a positional postal-range fallback
//! - **Numeric coercion**: locale-aware number parsing and fixed-width
//!   range-code formatting
//!
//! # Example
//!
//! ```
//! use frete_ingest::{DecimalSeparator, build_rate_rows, ingest_table};
//!
//! let text = "cep_inicio;cep_fim;valor;prazo\n01000000;01999999;25,90;5";
//! let analysis = ingest_table(text, None)?;
//! let rows = build_rate_rows(&analysis.table, &analysis.mapping, analysis.decimal_separator);
//! assert_eq!(rows[0].price, 25.9);
//! # Ok::<(), frete_ingest::IngestError>(())
//! ```

mod columns;
mod delimiter;
mod error;
mod header;
mod numeric;
mod rows;
mod tokenizer;

// === Error Types ===
pub use error::{IngestError, Result};

// === Tokenization ===
pub use delimiter::detect_delimiter;
pub use tokenizer::{split_line, tokenize};

// === Column Mapping ===
pub use columns::detect_columns;
pub use header::normalize_header;

// === Numeric Coercion ===
pub use numeric::{
    DecimalSeparator, RANGE_CODE_WIDTH, coerce_decimal, coerce_integer, format_range_code,
};

// === Row Building ===
pub use rows::build_rate_rows;

use frete_model::{ColumnMapping, RawTable};
use tracing::debug;

/// Result of ingesting one rate-table text.
#[derive(Debug, Clone)]
pub struct TableAnalysis {
    /// The tokenized table, as authored.
    pub table: RawTable,
    /// Auto-detected column bindings, editable before being applied.
    pub mapping: ColumnMapping,
    /// The decimal convention rows will be coerced under.
    pub decimal_separator: DecimalSeparator,
}

/// Ingests raw rate-table text: detects the delimiter, tokenizes, and
/// auto-detects column bindings.
///
/// `separator` is the operator-declared decimal convention; comma when
/// omitted.
///
/// # Errors
///
/// Propagates the tokenizer's [`IngestError::Format`] and
/// [`IngestError::EmptyInput`] contracts.
pub fn ingest_table(text: &str, separator: Option<DecimalSeparator>) -> Result<TableAnalysis> {
    let delimiter = detect_delimiter(text);
    let table = tokenize(text, delimiter)?;
    let mapping = detect_columns(&table.headers);

    debug!(
        delimiter = %delimiter.escape_debug(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "rate table ingested"
    );

    Ok(TableAnalysis {
        table,
        mapping,
        decimal_separator: separator.unwrap_or_default(),
    })
}
