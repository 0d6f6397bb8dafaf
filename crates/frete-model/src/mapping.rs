//! Types for the document path: field descriptors, array candidates, and
//! the persisted field mapping applied to live quote payloads.

use serde::{Deserialize, Serialize};

use crate::document::{DocumentValue, ValueKind};

/// Placeholder shown for unmapped or missing text fields in previews.
pub const MISSING_VALUE: &str = "—";

/// Semantic role a document field can play in a quote option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    CarrierName,
    Price,
    LeadTime,
    Identifier,
    ErrorFlag,
}

impl FieldRole {
    /// Detection order; also the slot order in [`FieldMapping`].
    pub const ALL: [FieldRole; 5] = [
        FieldRole::CarrierName,
        FieldRole::Price,
        FieldRole::LeadTime,
        FieldRole::Identifier,
        FieldRole::ErrorFlag,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldRole::CarrierName => "carrier_name",
            FieldRole::Price => "price",
            FieldRole::LeadTime => "lead_time",
            FieldRole::Identifier => "identifier",
            FieldRole::ErrorFlag => "error_flag",
        }
    }
}

impl std::fmt::Display for FieldRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FieldRole {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "carrier_name" => Ok(FieldRole::CarrierName),
            "price" => Ok(FieldRole::Price),
            "lead_time" => Ok(FieldRole::LeadTime),
            "identifier" => Ok(FieldRole::Identifier),
            "error_flag" => Ok(FieldRole::ErrorFlag),
            other => Err(format!("unknown field role: {other}")),
        }
    }
}

/// One field of a representative record, as seen during discovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Dot-joined key path from the candidate array's record root.
    pub path: String,
    /// The field's own key.
    pub key: String,
    /// Kind of the sampled value.
    pub value_kind: ValueKind,
    /// The sampled value itself, for operator inspection.
    pub sample_value: DocumentValue,
    /// Role assigned by the detector, if any pattern matched.
    pub detected_role: Option<FieldRole>,
    /// Detection confidence, 0.0 when no role was assigned.
    pub confidence: f32,
}

/// An array-of-records location discovered in a document.
///
/// Only produced for arrays holding at least one object-shaped element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayCandidate {
    /// Dot/position notation from the document root; empty means the root.
    pub path: String,
    /// Count of object-shaped elements in the array.
    pub length: usize,
    /// Descriptors for the first object-shaped element's fields.
    pub fields: Vec<FieldDescriptor>,
    /// Relevance score; see the scorer for the formula.
    pub score: i32,
}

/// Persisted field mapping: where the options array lives and which record
/// keys feed each normalized field.
///
/// Built once from a sample document's best candidate, hand-editable, then
/// stored as configuration and reused against live documents until replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    /// Dot-separated path to the options array; empty string for the root.
    pub options_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_days: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_field: Option<String>,
}

impl FieldMapping {
    /// The record key bound to a role slot, if any.
    pub fn slot(&self, role: FieldRole) -> Option<&str> {
        match role {
            FieldRole::CarrierName => self.carrier_name.as_deref(),
            FieldRole::Price => self.price.as_deref(),
            FieldRole::LeadTime => self.delivery_days.as_deref(),
            FieldRole::Identifier => self.carrier_id.as_deref(),
            FieldRole::ErrorFlag => self.error_field.as_deref(),
        }
    }

    /// Rebinds a role slot to a record key.
    pub fn set_slot(&mut self, role: FieldRole, key: Option<String>) {
        match role {
            FieldRole::CarrierName => self.carrier_name = key,
            FieldRole::Price => self.price = key,
            FieldRole::LeadTime => self.delivery_days = key,
            FieldRole::Identifier => self.carrier_id = key,
            FieldRole::ErrorFlag => self.error_field = key,
        }
    }
}

/// A normalized quote option produced by applying a [`FieldMapping`].
///
/// Transient: built for previews and downstream consumption, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedOption {
    pub carrier_name: String,
    pub price: f64,
    pub delivery_days: i64,
    pub carrier_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_round_trip_through_roles() {
        let mut mapping = FieldMapping {
            options_path: "options".to_string(),
            ..FieldMapping::default()
        };
        mapping.set_slot(FieldRole::Price, Some("preco".to_string()));
        mapping.set_slot(FieldRole::LeadTime, Some("prazo_dias".to_string()));

        assert_eq!(mapping.slot(FieldRole::Price), Some("preco"));
        assert_eq!(mapping.slot(FieldRole::LeadTime), Some("prazo_dias"));
        assert_eq!(mapping.slot(FieldRole::CarrierName), None);
    }

    #[test]
    fn role_parses_from_canonical_name() {
        assert_eq!("price".parse::<FieldRole>(), Ok(FieldRole::Price));
        assert!("freight".parse::<FieldRole>().is_err());
    }
}
