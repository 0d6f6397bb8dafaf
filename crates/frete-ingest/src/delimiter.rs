//! Field-separator detection from the first line of raw text.

/// Picks the most likely field separator for a delimited rate table.
///
/// Only the first line is examined. Tab wins when present and at least as
/// frequent as comma and semicolon; semicolon beats comma when strictly
/// more frequent; comma is the default. Always returns a delimiter.
pub fn detect_delimiter(text: &str) -> char {
    let first_line = text.lines().next().unwrap_or("");

    let tabs = first_line.matches('\t').count();
    let commas = first_line.matches(',').count();
    let semicolons = first_line.matches(';').count();

    if tabs > 0 && tabs >= commas && tabs >= semicolons {
        '\t'
    } else if semicolons > commas {
        ';'
    } else {
        ','
    }
}
