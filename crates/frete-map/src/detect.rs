//! Field-role detection over record keys.

use frete_model::{DocumentValue, FieldRole};

use crate::patterns::{EXACT_MATCH_CONFIDENCE, PARTIAL_MATCH_CONFIDENCE, ROLE_PATTERNS};
use crate::utils::normalize_key;

/// Detects the semantic role of one record field.
///
/// The key is normalized and tested against the ordered rule list: per
/// group, the exact tier first (always accepted, confidence 0.95), then
/// the substring tier (confidence 0.6, accepted only when the sample
/// value satisfies the group's expected kind). Returns `None` when no
/// rule matches.
pub fn detect_role(key: &str, sample: &DocumentValue) -> Option<(FieldRole, f32)> {
    let normalized = normalize_key(key);
    if normalized.is_empty() {
        return None;
    }

    for pattern in ROLE_PATTERNS.iter() {
        if pattern.exact.is_match(&normalized) {
            return Some((pattern.role, EXACT_MATCH_CONFIDENCE));
        }
        if pattern.partial.is_match(&normalized) && pattern.expects.accepts(sample) {
            return Some((pattern.role, PARTIAL_MATCH_CONFIDENCE));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> DocumentValue {
        DocumentValue::String(value.to_string())
    }

    #[test]
    fn exact_matches_win_with_high_confidence() {
        assert_eq!(
            detect_role("transportadora", &text("Jadlog")),
            Some((FieldRole::CarrierName, 0.95))
        );
        assert_eq!(
            detect_role("price", &DocumentValue::Number(25.9)),
            Some((FieldRole::Price, 0.95))
        );
        assert_eq!(
            detect_role("delivery_days", &DocumentValue::Number(5.0)),
            Some((FieldRole::LeadTime, 0.95))
        );
    }

    #[test]
    fn keys_are_normalized_before_matching() {
        assert_eq!(
            detect_role("Preço", &text("32.50")),
            Some((FieldRole::Price, 0.95))
        );
    }

    #[test]
    fn substring_matches_carry_lower_confidence() {
        assert_eq!(
            detect_role("valor_com_imposto", &DocumentValue::Number(10.0)),
            Some((FieldRole::Price, 0.6))
        );
    }

    #[test]
    fn substring_match_rejected_when_sample_kind_mismatches() {
        // "valor_descricao" looks price-ish but holds prose; not a price.
        assert_eq!(detect_role("valor_descricao", &text("tabela promocional")), None);
    }

    #[test]
    fn exact_match_overrides_kind_expectation() {
        // Exact tier accepts even when the sample is not numeric-looking.
        assert_eq!(
            detect_role("preco", &text("consultar")),
            Some((FieldRole::Price, 0.95))
        );
    }

    #[test]
    fn numeric_looking_strings_satisfy_numeric_roles() {
        assert_eq!(
            detect_role("prazo_estimado", &text("4")),
            Some((FieldRole::LeadTime, 0.6))
        );
    }

    #[test]
    fn unknown_keys_get_no_role() {
        assert_eq!(detect_role("observacao", &text("x")), None);
        assert_eq!(detect_role("", &text("x")), None);
    }

    #[test]
    fn identifier_and_error_groups_detect() {
        assert_eq!(
            detect_role("carrier_id", &text("jad-01")),
            Some((FieldRole::Identifier, 0.95))
        );
        assert_eq!(
            detect_role("id_cotacao", &text("abc")),
            Some((FieldRole::Identifier, 0.6))
        );
        assert_eq!(
            detect_role("error", &DocumentValue::Bool(false)),
            Some((FieldRole::ErrorFlag, 0.95))
        );
    }
}
