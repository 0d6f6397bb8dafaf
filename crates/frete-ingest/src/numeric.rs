//! Locale-aware numeric coercion and fixed-width range-code formatting.
//!
//! Carrier tables mix decimal conventions ("25,90" vs "25.90") and decorate
//! numbers with currency symbols and units. Coercion cleanses first, parses
//! second, and falls back to 0 rather than failing the ingest.

/// Decimal-separator convention declared for (or defaulted on) a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecimalSeparator {
    /// Comma decimals, dot thousands ("1.234,56").
    #[default]
    Comma,
    /// Dot decimals ("1234.56").
    Dot,
}

/// Width of a normalized postal range code.
pub const RANGE_CODE_WIDTH: usize = 8;

/// Coerces a cell to a floating-point number.
///
/// Empty/whitespace-only input yields 0. Everything but digits, dots,
/// commas, and minus signs is stripped; under the comma convention dots
/// are dropped as thousands separators and the comma becomes the decimal
/// point. Unparseable remainders yield 0 — a silent fallback, not an error.
pub fn coerce_decimal(raw: &str, separator: DecimalSeparator) -> f64 {
    let cleansed = match cleanse(raw, separator) {
        Some(cleansed) => cleansed,
        None => return 0.0,
    };
    cleansed.parse().unwrap_or(0.0)
}

/// Coerces a cell to an integer with the same cleansing rules.
pub fn coerce_integer(raw: &str, separator: DecimalSeparator) -> i64 {
    let cleansed = match cleanse(raw, separator) {
        Some(cleansed) => cleansed,
        None => return 0,
    };
    cleansed.parse().unwrap_or(0)
}

fn cleanse(raw: &str, separator: DecimalSeparator) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }

    let stripped: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(*c, '.' | ',' | '-'))
        .collect();

    Some(match separator {
        DecimalSeparator::Comma => stripped.replace('.', "").replace(',', "."),
        DecimalSeparator::Dot => stripped,
    })
}

/// Formats a raw cell as a zero-padded numeric range identifier (CEP).
///
/// Strips every non-digit character and left-pads to
/// [`RANGE_CODE_WIDTH`]. Returns `None` when no digits remain — the row
/// carrying such an endpoint is discarded by the row builder.
pub fn format_range_code(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    Some(format!("{digits:0>width$}", width = RANGE_CODE_WIDTH))
}
