//! Quote-aware tokenization of delimited text into a [`RawTable`].

use frete_model::RawTable;

use crate::error::{IngestError, Result};

/// Tokenizes raw text into headers and data rows.
///
/// A leading byte-order mark is stripped and surrounding whitespace
/// trimmed before splitting on line breaks; blank lines are discarded.
/// Fields honor double-quote quoting with `""` as an escaped quote, and
/// every field is trimmed on emission.
///
/// # Errors
///
/// - [`IngestError::Format`] if fewer than two non-blank lines remain, or
///   the first line yields fewer than two columns.
/// - [`IngestError::EmptyInput`] if no data rows follow the header.
pub fn tokenize(text: &str, delimiter: char) -> Result<RawTable> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text).trim();

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(IngestError::format(
            "expected a header line and at least one data row",
        ));
    }

    let headers = split_line(lines[0], delimiter);
    if headers.len() < 2 {
        return Err(IngestError::format(format!(
            "header line has {} column(s); at least two are required",
            headers.len()
        )));
    }

    let rows: Vec<Vec<String>> = lines[1..]
        .iter()
        .map(|line| split_line(line, delimiter))
        .collect();

    if rows.is_empty() {
        return Err(IngestError::EmptyInput);
    }

    Ok(RawTable {
        headers,
        rows,
        delimiter,
    })
}

/// Splits a single line into trimmed fields, honoring quoted values.
///
/// A `"` toggles the in-quotes state; inside quotes, `""` emits a literal
/// quote. The delimiter only splits outside quotes.
pub fn split_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                // Check for escaped quote ("")
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            c if c == delimiter && !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => {
                current.push(c);
            }
        }
    }

    // Don't forget the last field
    fields.push(current.trim().to_string());
    fields
}
