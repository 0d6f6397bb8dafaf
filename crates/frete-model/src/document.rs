//! Generic in-memory representation of a deserialized quote payload.
//!
//! Quoting services return arbitrarily shaped responses; the engine never
//! sees their schemas at compile time. `DocumentValue` is the explicit
//! tagged union those payloads are normalized into before structure
//! discovery runs, so every traversal is an exhaustive match rather than
//! runtime duck-typing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A deserialized document value.
///
/// Objects are keyed by `BTreeMap`: key order in the source payload carries
/// no meaning, and sorted iteration keeps discovery deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<DocumentValue>),
    Object(BTreeMap<String, DocumentValue>),
}

/// The six value kinds a [`DocumentValue`] can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DocumentValue {
    /// Returns the kind tag for this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            DocumentValue::Null => ValueKind::Null,
            DocumentValue::Bool(_) => ValueKind::Boolean,
            DocumentValue::Number(_) => ValueKind::Number,
            DocumentValue::String(_) => ValueKind::String,
            DocumentValue::Array(_) => ValueKind::Array,
            DocumentValue::Object(_) => ValueKind::Object,
        }
    }

    /// Returns the elements if this is an array.
    pub fn as_array(&self) -> Option<&[DocumentValue]> {
        match self {
            DocumentValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries if this is an object.
    pub fn as_object(&self) -> Option<&BTreeMap<String, DocumentValue>> {
        match self {
            DocumentValue::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Direct key lookup on an object value.
    pub fn get(&self, key: &str) -> Option<&DocumentValue> {
        self.as_object().and_then(|entries| entries.get(key))
    }

    /// True for object values: the record shape structure discovery looks for.
    pub fn is_record(&self) -> bool {
        matches!(self, DocumentValue::Object(_))
    }

    /// True if the value is a number, or a string that parses as one.
    ///
    /// Quote payloads frequently carry prices and lead times as strings
    /// ("32.50", "4"); role detection and extraction treat those as numeric.
    pub fn is_numeric_like(&self) -> bool {
        match self {
            DocumentValue::Number(_) => true,
            DocumentValue::String(text) => text.trim().parse::<f64>().is_ok(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_are_exhaustive() {
        assert_eq!(DocumentValue::Null.kind(), ValueKind::Null);
        assert_eq!(DocumentValue::Bool(true).kind(), ValueKind::Boolean);
        assert_eq!(DocumentValue::Number(1.0).kind(), ValueKind::Number);
        assert_eq!(DocumentValue::String("x".into()).kind(), ValueKind::String);
        assert_eq!(DocumentValue::Array(vec![]).kind(), ValueKind::Array);
        assert_eq!(
            DocumentValue::Object(BTreeMap::new()).kind(),
            ValueKind::Object
        );
    }

    #[test]
    fn numeric_like_accepts_numeric_strings() {
        assert!(DocumentValue::Number(25.9).is_numeric_like());
        assert!(DocumentValue::String("32.50".into()).is_numeric_like());
        assert!(DocumentValue::String(" 4 ".into()).is_numeric_like());
        assert!(!DocumentValue::String("Jadlog".into()).is_numeric_like());
        assert!(!DocumentValue::Bool(true).is_numeric_like());
    }

    #[test]
    fn get_looks_up_object_keys_only() {
        let mut entries = BTreeMap::new();
        entries.insert("price".to_string(), DocumentValue::Number(10.0));
        let object = DocumentValue::Object(entries);

        assert_eq!(object.get("price"), Some(&DocumentValue::Number(10.0)));
        assert_eq!(object.get("missing"), None);
        assert_eq!(DocumentValue::Array(vec![]).get("price"), None);
    }
}
