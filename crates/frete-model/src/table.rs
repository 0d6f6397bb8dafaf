//! Types for the table path: tokenized rate tables, column bindings, and
//! normalized rate rows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentinel meaning "no upper weight bound" on a rate row.
pub const WEIGHT_UNBOUNDED: f64 = 9999.0;

/// A tokenized delimited-text table, exactly as authored.
///
/// The tokenizer neither pads nor truncates rows; consumers index cells
/// through a [`ColumnMapping`] and treat missing cells as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// Header cells from the first non-blank line.
    pub headers: Vec<String>,
    /// Data rows, one `Vec<String>` per line.
    pub rows: Vec<Vec<String>>,
    /// The detected field separator.
    pub delimiter: char,
}

/// The fixed vocabulary of semantic rate-table fields.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SemanticField {
    RangeStart,
    RangeEnd,
    WeightMin,
    WeightMax,
    Price,
    LeadTime,
}

impl SemanticField {
    /// All fields, in binding order.
    pub const ALL: [SemanticField; 6] = [
        SemanticField::RangeStart,
        SemanticField::RangeEnd,
        SemanticField::WeightMin,
        SemanticField::WeightMax,
        SemanticField::Price,
        SemanticField::LeadTime,
    ];

    /// Canonical snake_case name; also a valid alias for itself.
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticField::RangeStart => "range_start",
            SemanticField::RangeEnd => "range_end",
            SemanticField::WeightMin => "weight_min",
            SemanticField::WeightMax => "weight_max",
            SemanticField::Price => "price",
            SemanticField::LeadTime => "lead_time",
        }
    }
}

impl std::fmt::Display for SemanticField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binding of semantic fields to zero-based column indices.
///
/// Produced by auto-detection, editable by the operator before being
/// applied. Auto-detection never binds two fields to one column; explicit
/// edits may, and are accepted as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    #[serde(flatten)]
    bindings: BTreeMap<SemanticField, usize>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a field to a column index, replacing any previous binding.
    pub fn bind(&mut self, field: SemanticField, index: usize) {
        self.bindings.insert(field, index);
    }

    /// The bound column index for a field, if any.
    pub fn column(&self, field: SemanticField) -> Option<usize> {
        self.bindings.get(&field).copied()
    }

    /// True if the field has a bound column.
    pub fn is_bound(&self, field: SemanticField) -> bool {
        self.bindings.contains_key(&field)
    }

    /// Number of bound fields.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates bindings in field order.
    pub fn iter(&self) -> impl Iterator<Item = (SemanticField, usize)> + '_ {
        self.bindings.iter().map(|(field, index)| (*field, *index))
    }
}

/// A normalized shipping-rate row derived from one table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRateRow {
    /// Zero-padded 8-digit postal-range start.
    pub range_start: String,
    /// Zero-padded 8-digit postal-range end.
    pub range_end: String,
    /// Minimum weight covered by the row (kg); 0 when unmapped.
    pub weight_min: f64,
    /// Maximum weight covered; [`WEIGHT_UNBOUNDED`] when unmapped.
    pub weight_max: f64,
    /// Shipping price; 0 when unmapped or unparseable.
    pub price: f64,
    /// Delivery lead time in whole days; 0 when unmapped or unparseable.
    pub lead_time_days: i64,
}
