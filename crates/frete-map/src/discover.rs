//! Recursive structure discovery over quote payloads.

use frete_model::{ArrayCandidate, DocumentValue, FieldDescriptor};

use crate::detect::detect_role;
use crate::score::score_candidate;

/// Maximum depth the discoverer walks into a document.
pub const MAX_DISCOVERY_DEPTH: usize = 5;
/// How many elements of each array are scanned for nested structure.
pub const ARRAY_RECURSE_LIMIT: usize = 3;

/// Enumerates every array-of-records location in a document, in discovery
/// order.
///
/// An array becomes a candidate when it holds at least one object-shaped
/// element; the first such element is the representative record and its
/// entries become the candidate's field descriptors. The walk continues
/// into every object entry and the first [`ARRAY_RECURSE_LIMIT`] elements
/// of every array, down to [`MAX_DISCOVERY_DEPTH`].
pub fn discover_candidates(document: &DocumentValue) -> Vec<ArrayCandidate> {
    let mut candidates = Vec::new();
    walk(document, String::new(), 0, &mut candidates);
    candidates
}

fn walk(value: &DocumentValue, path: String, depth: usize, out: &mut Vec<ArrayCandidate>) {
    if depth > MAX_DISCOVERY_DEPTH {
        return;
    }

    match value {
        DocumentValue::Array(items) => {
            if let Some(record) = items.iter().find(|item| item.is_record()) {
                let fields = describe_record(record);
                let length = items.iter().filter(|item| item.is_record()).count();
                let score = score_candidate(&fields, length);
                out.push(ArrayCandidate {
                    path: path.clone(),
                    length,
                    fields,
                    score,
                });
            }
            for (index, item) in items.iter().take(ARRAY_RECURSE_LIMIT).enumerate() {
                walk(item, join(&path, &index.to_string()), depth + 1, out);
            }
        }
        DocumentValue::Object(entries) => {
            for (key, child) in entries {
                walk(child, join(&path, key), depth + 1, out);
            }
        }
        DocumentValue::Null
        | DocumentValue::Bool(_)
        | DocumentValue::Number(_)
        | DocumentValue::String(_) => {}
    }
}

/// Builds field descriptors from a representative record's entries.
fn describe_record(record: &DocumentValue) -> Vec<FieldDescriptor> {
    let Some(entries) = record.as_object() else {
        return Vec::new();
    };

    entries
        .iter()
        .map(|(key, value)| {
            let detected = detect_role(key, value);
            FieldDescriptor {
                path: key.clone(),
                key: key.clone(),
                value_kind: value.kind(),
                sample_value: value.clone(),
                detected_role: detected.map(|(role, _)| role),
                confidence: detected.map_or(0.0, |(_, confidence)| confidence),
            }
        })
        .collect()
}

fn join(path: &str, segment: &str) -> String {
    if path.is_empty() {
        segment.to_string()
    } else {
        format!("{path}.{segment}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_document;

    #[test]
    fn root_array_has_empty_path() {
        let document = parse_document(r#"[{"price": 10}]"#).unwrap();
        let candidates = discover_candidates(&document);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].path, "");
        assert_eq!(candidates[0].length, 1);
    }

    #[test]
    fn scalar_arrays_are_not_candidates() {
        let document = parse_document(r#"{"tags": [1, 2, 3]}"#).unwrap();
        assert!(discover_candidates(&document).is_empty());
    }

    #[test]
    fn length_counts_only_record_shaped_elements() {
        let document = parse_document(r#"[null, {"a": 1}, 7, {"b": 2}]"#).unwrap();
        let candidates = discover_candidates(&document);
        assert_eq!(candidates[0].length, 2);
        // Representative record is the first object-shaped element.
        assert_eq!(candidates[0].fields[0].key, "a");
    }

    #[test]
    fn nested_candidates_are_all_reported() {
        let document = parse_document(
            r#"{"data": {"quotes": [{"price": 1}]}, "errors": [{"msg": "x"}]}"#,
        )
        .unwrap();
        let candidates = discover_candidates(&document);
        let paths: Vec<&str> = candidates
            .iter()
            .map(|c| c.path.as_str())
            .collect();
        assert_eq!(paths, vec!["data.quotes", "errors"]);
    }

    #[test]
    fn arrays_inside_arrays_use_position_segments() {
        let document = parse_document(r#"[[{"price": 1}]]"#).unwrap();
        let candidates = discover_candidates(&document);
        let paths: Vec<&str> = candidates
            .iter()
            .map(|c| c.path.as_str())
            .collect();
        assert_eq!(paths, vec!["0"]);
    }

    #[test]
    fn recursion_scans_only_the_first_three_array_elements() {
        let document = parse_document(
            r#"{"outer": [1, 2, 3, {"inner": [{"price": 1}]}]}"#,
        )
        .unwrap();
        let candidates = discover_candidates(&document);
        // "outer" itself qualifies (it holds an object element), but that
        // element sits at index 3 and is never recursed into.
        let paths: Vec<&str> = candidates.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, vec!["outer"]);
    }

    #[test]
    fn recursion_stops_at_the_depth_bound() {
        let shallow = parse_document(
            r#"{"a": {"b": {"c": {"d": {"e": [{"price": 1}]}}}}}"#,
        )
        .unwrap();
        assert_eq!(discover_candidates(&shallow).len(), 1);

        let deep = parse_document(
            r#"{"a": {"b": {"c": {"d": {"e": {"f": [{"price": 1}]}}}}}}"#,
        )
        .unwrap();
        assert!(discover_candidates(&deep).is_empty());
    }
}
