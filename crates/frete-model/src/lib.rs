//! Shared data model for rate ingestion.
//!
//! This crate defines the types exchanged between the table-path engine
//! (`frete-ingest`), the document-path engine (`frete-map`), and their
//! callers: raw tokenized tables, column/field mappings, discovered
//! structure descriptors, and normalized output records.

pub mod document;
pub mod mapping;
pub mod table;

pub use document::{DocumentValue, ValueKind};
pub use mapping::{
    ArrayCandidate, FieldDescriptor, FieldMapping, FieldRole, MISSING_VALUE, NormalizedOption,
};
pub use table::{
    ColumnMapping, NormalizedRateRow, RawTable, SemanticField, WEIGHT_UNBOUNDED,
};
