//! Conversion of parsed JSON into the engine's document representation.

use std::collections::BTreeMap;

use frete_model::DocumentValue;

use crate::error::DocumentError;

/// Parses quote-payload text into a [`DocumentValue`].
///
/// Syntax errors carry the parser's message verbatim; they are fatal to
/// the current ingest attempt only.
pub fn parse_document(text: &str) -> Result<DocumentValue, DocumentError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|error| DocumentError::Parse {
            message: error.to_string(),
        })?;
    Ok(from_json(value))
}

/// Converts a `serde_json` value into the explicit tagged union.
pub fn from_json(value: serde_json::Value) -> DocumentValue {
    match value {
        serde_json::Value::Null => DocumentValue::Null,
        serde_json::Value::Bool(flag) => DocumentValue::Bool(flag),
        serde_json::Value::Number(number) => {
            DocumentValue::Number(number.as_f64().unwrap_or(0.0))
        }
        serde_json::Value::String(text) => DocumentValue::String(text),
        serde_json::Value::Array(items) => {
            DocumentValue::Array(items.into_iter().map(from_json).collect())
        }
        serde_json::Value::Object(entries) => DocumentValue::Object(
            entries
                .into_iter()
                .map(|(key, child)| (key, from_json(child)))
                .collect::<BTreeMap<_, _>>(),
        ),
    }
}
