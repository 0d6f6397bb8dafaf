//! Path resolution and preview building.
//!
//! A preview is a pure derivation from the (document, mapping) pair; an
//! operator override simply re-runs it with the edited mapping.

use frete_model::{DocumentValue, FieldMapping, FieldRole, MISSING_VALUE, NormalizedOption};

/// Default number of options shown in a preview.
pub const PREVIEW_LIMIT: usize = 10;
/// Hard cap on options extracted in one pass, whatever the caller asks.
pub const MAX_SAMPLE_OPTIONS: usize = 500;

/// Walks a dot-separated path into a document.
///
/// Segments are object-key lookups; numeric segments index into arrays.
/// The empty path resolves to the document itself.
pub fn resolve_path<'a>(document: &'a DocumentValue, path: &str) -> Option<&'a DocumentValue> {
    if path.is_empty() {
        return Some(document);
    }

    let mut current = document;
    for segment in path.split('.') {
        current = match current {
            DocumentValue::Object(entries) => entries.get(segment)?,
            DocumentValue::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Applies a mapping to a document, producing up to `limit` normalized
/// options.
///
/// An unresolvable options path, or one that does not land on an array,
/// yields an empty preview. Unmapped or missing fields fall back to the
/// em-dash placeholder (text) or 0 (numerics) — silent, non-fatal misses.
pub fn build_preview(
    document: &DocumentValue,
    mapping: &FieldMapping,
    limit: usize,
) -> Vec<NormalizedOption> {
    let options = match resolve_path(document, &mapping.options_path) {
        Some(DocumentValue::Array(items)) => items,
        _ => return Vec::new(),
    };

    options
        .iter()
        .take(limit.min(MAX_SAMPLE_OPTIONS))
        .map(|element| NormalizedOption {
            carrier_name: text_field(element, mapping.slot(FieldRole::CarrierName)),
            price: decimal_field(element, mapping.slot(FieldRole::Price)),
            delivery_days: integer_field(element, mapping.slot(FieldRole::LeadTime)),
            carrier_id: text_field(element, mapping.slot(FieldRole::Identifier)),
        })
        .collect()
}

fn lookup<'a>(element: &'a DocumentValue, key: Option<&str>) -> Option<&'a DocumentValue> {
    element.get(key?)
}

fn text_field(element: &DocumentValue, key: Option<&str>) -> String {
    match lookup(element, key) {
        Some(DocumentValue::String(text)) => text.clone(),
        Some(DocumentValue::Number(number)) => format_number(*number),
        Some(DocumentValue::Bool(flag)) => flag.to_string(),
        _ => MISSING_VALUE.to_string(),
    }
}

fn decimal_field(element: &DocumentValue, key: Option<&str>) -> f64 {
    match lookup(element, key) {
        Some(DocumentValue::Number(number)) => *number,
        Some(DocumentValue::String(text)) => text.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn integer_field(element: &DocumentValue, key: Option<&str>) -> i64 {
    match lookup(element, key) {
        Some(DocumentValue::Number(number)) => *number as i64,
        Some(DocumentValue::String(text)) => {
            let text = text.trim();
            text.parse()
                .unwrap_or_else(|_| text.parse::<f64>().map_or(0, |value| value as i64))
        }
        _ => 0,
    }
}

/// Renders identifiers held as numbers without a spurious ".0".
fn format_number(number: f64) -> String {
    if number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{}", number as i64)
    } else {
        number.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_document;

    fn mapping() -> FieldMapping {
        FieldMapping {
            options_path: "options".to_string(),
            carrier_name: Some("name".to_string()),
            price: Some("price".to_string()),
            delivery_days: Some("days".to_string()),
            carrier_id: Some("id".to_string()),
            error_field: None,
        }
    }

    #[test]
    fn extracts_mapped_fields() {
        let document = parse_document(
            r#"{"options": [{"name": "PAC", "price": 25.9, "days": 5, "id": 104}]}"#,
        )
        .unwrap();
        let preview = build_preview(&document, &mapping(), PREVIEW_LIMIT);

        assert_eq!(preview.len(), 1);
        let option = &preview[0];
        assert_eq!(option.carrier_name, "PAC");
        assert_eq!(option.price, 25.9);
        assert_eq!(option.delivery_days, 5);
        assert_eq!(option.carrier_id, "104");
    }

    #[test]
    fn numeric_strings_coerce() {
        let document = parse_document(
            r#"{"options": [{"name": "SEDEX", "price": "45.00", "days": "2", "id": "x"}]}"#,
        )
        .unwrap();
        let preview = build_preview(&document, &mapping(), PREVIEW_LIMIT);
        assert_eq!(preview[0].price, 45.0);
        assert_eq!(preview[0].delivery_days, 2);
    }

    #[test]
    fn missing_and_unmapped_fields_fall_back() {
        let document = parse_document(r#"{"options": [{"price": 9.9}]}"#).unwrap();
        let sparse = FieldMapping {
            options_path: "options".to_string(),
            price: Some("price".to_string()),
            ..FieldMapping::default()
        };
        let preview = build_preview(&document, &sparse, PREVIEW_LIMIT);

        let option = &preview[0];
        assert_eq!(option.carrier_name, MISSING_VALUE);
        assert_eq!(option.carrier_id, MISSING_VALUE);
        assert_eq!(option.price, 9.9);
        assert_eq!(option.delivery_days, 0);
    }

    #[test]
    fn unresolvable_path_yields_empty_preview() {
        let document = parse_document(r#"{"options": {"not": "an array"}}"#).unwrap();
        assert!(build_preview(&document, &mapping(), PREVIEW_LIMIT).is_empty());

        let document = parse_document(r#"{"other": []}"#).unwrap();
        assert!(build_preview(&document, &mapping(), PREVIEW_LIMIT).is_empty());
    }

    #[test]
    fn empty_path_treats_the_document_as_the_array() {
        let document = parse_document(r#"[{"price": 1.5}]"#).unwrap();
        let root = FieldMapping {
            options_path: String::new(),
            price: Some("price".to_string()),
            ..FieldMapping::default()
        };
        assert_eq!(build_preview(&document, &root, PREVIEW_LIMIT)[0].price, 1.5);
    }

    #[test]
    fn numeric_segments_index_arrays() {
        let document = parse_document(r#"{"pages": [{"quotes": [{"price": 3.0}]}]}"#).unwrap();
        let resolved = resolve_path(&document, "pages.0.quotes").unwrap();
        assert!(matches!(resolved, DocumentValue::Array(_)));
    }

    #[test]
    fn preview_is_capped() {
        let elements: Vec<String> = (0..25).map(|i| format!(r#"{{"price": {i}}}"#)).collect();
        let document =
            parse_document(&format!(r#"{{"options": [{}]}}"#, elements.join(","))).unwrap();
        let preview = build_preview(&document, &mapping(), PREVIEW_LIMIT);
        assert_eq!(preview.len(), PREVIEW_LIMIT);
    }
}
