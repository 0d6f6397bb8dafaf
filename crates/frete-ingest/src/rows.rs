//! Application of a [`ColumnMapping`] to a tokenized table.

use frete_model::{ColumnMapping, NormalizedRateRow, RawTable, SemanticField, WEIGHT_UNBOUNDED};
use tracing::debug;

use crate::numeric::{DecimalSeparator, coerce_decimal, coerce_integer, format_range_code};

/// Derives normalized rate rows from a table under an applied mapping.
///
/// Rows whose range endpoints are empty after digit-stripping are
/// discarded. Unbound weight fields default to 0 / [`WEIGHT_UNBOUNDED`];
/// unbound price and lead time default to 0.
pub fn build_rate_rows(
    table: &RawTable,
    mapping: &ColumnMapping,
    separator: DecimalSeparator,
) -> Vec<NormalizedRateRow> {
    let mut rows = Vec::with_capacity(table.rows.len());
    let mut discarded = 0usize;

    for cells in &table.rows {
        let range_start = format_range_code(cell(cells, mapping, SemanticField::RangeStart));
        let range_end = format_range_code(cell(cells, mapping, SemanticField::RangeEnd));

        let (Some(range_start), Some(range_end)) = (range_start, range_end) else {
            discarded += 1;
            continue;
        };

        rows.push(NormalizedRateRow {
            range_start,
            range_end,
            weight_min: bound_decimal(cells, mapping, SemanticField::WeightMin, separator, 0.0),
            weight_max: bound_decimal(
                cells,
                mapping,
                SemanticField::WeightMax,
                separator,
                WEIGHT_UNBOUNDED,
            ),
            price: bound_decimal(cells, mapping, SemanticField::Price, separator, 0.0),
            lead_time_days: match mapping.column(SemanticField::LeadTime) {
                Some(_) => coerce_integer(cell(cells, mapping, SemanticField::LeadTime), separator),
                None => 0,
            },
        });
    }

    if discarded > 0 {
        debug!(discarded, kept = rows.len(), "rows without range endpoints dropped");
    }
    rows
}

fn cell<'a>(cells: &'a [String], mapping: &ColumnMapping, field: SemanticField) -> &'a str {
    mapping
        .column(field)
        .and_then(|index| cells.get(index))
        .map_or("", String::as_str)
}

fn bound_decimal(
    cells: &[String],
    mapping: &ColumnMapping,
    field: SemanticField,
    separator: DecimalSeparator,
    default: f64,
) -> f64 {
    match mapping.column(field) {
        Some(_) => coerce_decimal(cell(cells, mapping, field), separator),
        None => default,
    }
}
