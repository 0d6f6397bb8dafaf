//! Assembly of a persisted [`FieldMapping`] from the best candidate.

use frete_model::{ArrayCandidate, FieldMapping};

/// Builds a field mapping from a candidate's detected roles.
///
/// For each role slot the first-seen field carrying that role (in field
/// order) wins; slots with no matching field stay unset.
pub fn build_field_mapping(candidate: &ArrayCandidate) -> FieldMapping {
    let mut mapping = FieldMapping {
        options_path: candidate.path.clone(),
        ..FieldMapping::default()
    };

    for field in &candidate.fields {
        let Some(role) = field.detected_role else {
            continue;
        };
        if mapping.slot(role).is_none() {
            mapping.set_slot(role, Some(field.key.clone()));
        }
    }

    mapping
}

#[cfg(test)]
mod tests {
    use super::*;
    use frete_model::{DocumentValue, FieldDescriptor, FieldRole, ValueKind};

    fn field(key: &str, role: Option<FieldRole>) -> FieldDescriptor {
        FieldDescriptor {
            path: key.to_string(),
            key: key.to_string(),
            value_kind: ValueKind::String,
            sample_value: DocumentValue::String("x".to_string()),
            detected_role: role,
            confidence: 0.95,
        }
    }

    #[test]
    fn first_seen_field_wins_each_slot() {
        let candidate = ArrayCandidate {
            path: "options".to_string(),
            length: 2,
            fields: vec![
                field("preco", Some(FieldRole::Price)),
                field("valor", Some(FieldRole::Price)),
                field("obs", None),
            ],
            score: 5,
        };

        let mapping = build_field_mapping(&candidate);
        assert_eq!(mapping.options_path, "options");
        assert_eq!(mapping.price.as_deref(), Some("preco"));
        assert_eq!(mapping.carrier_name, None);
        assert_eq!(mapping.error_field, None);
    }
}
