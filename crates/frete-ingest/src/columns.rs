//! Alias-based binding of semantic fields to header columns.

use frete_model::{ColumnMapping, SemanticField};
use tracing::debug;

use crate::header::normalize_header;

/// Known aliases per semantic field, in normalized form.
///
/// Covers the abbreviations and language variants seen across carrier
/// exports. Process-wide, read-only data; the field's own canonical name
/// always matches in addition to these.
const fn aliases(field: SemanticField) -> &'static [&'static str] {
    match field {
        SemanticField::RangeStart => &[
            "cep_inicio",
            "cep_inicial",
            "cep_de",
            "inicio",
            "inicial",
            "de",
            "from",
            "start",
            "origem",
            "faixa_inicio",
        ],
        SemanticField::RangeEnd => &[
            "cep_fim",
            "cep_final",
            "cep_ate",
            "fim",
            "final",
            "ate",
            "to",
            "end",
            "destino",
            "faixa_fim",
        ],
        SemanticField::WeightMin => &[
            "peso_min",
            "peso_minimo",
            "peso_de",
            "peso_inicial",
            "min_weight",
            "kg_de",
        ],
        SemanticField::WeightMax => &[
            "peso_max",
            "peso_maximo",
            "peso_ate",
            "peso_final",
            "max_weight",
            "kg_ate",
        ],
        SemanticField::Price => &[
            "valor", "preco", "valor_frete", "frete", "price", "tarifa", "custo", "vlr", "total",
        ],
        SemanticField::LeadTime => &[
            "prazo",
            "prazo_entrega",
            "prazo_dias",
            "dias",
            "dias_uteis",
            "delivery_days",
            "deadline",
        ],
    }
}

/// Terms marking a column as a postal-range boundary, for the positional
/// fallback when no range alias matched.
const POSTAL_RANGE_TERMS: [&str; 4] = ["cep", "faixa", "zip", "postal"];

/// Auto-detects a [`ColumnMapping`] from raw headers.
///
/// For each semantic field, headers are scanned left to right and the
/// first whose normalized form equals the field name or one of its
/// aliases is bound; fields with no match stay unbound. If neither range
/// boundary was bound and there are at least two headers, the first two
/// headers containing a postal-range term are bound to range-start and
/// range-end, in that order.
pub fn detect_columns(headers: &[String]) -> ColumnMapping {
    let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();

    let mut mapping = ColumnMapping::new();
    for field in SemanticField::ALL {
        let known = aliases(field);
        let bound = normalized
            .iter()
            .position(|header| header == field.as_str() || known.contains(&header.as_str()));
        if let Some(index) = bound {
            mapping.bind(field, index);
        }
    }

    if !mapping.is_bound(SemanticField::RangeStart)
        && !mapping.is_bound(SemanticField::RangeEnd)
        && normalized.len() >= 2
    {
        apply_postal_fallback(&mut mapping, &normalized);
    }

    debug!(
        headers = headers.len(),
        bound = mapping.len(),
        "column auto-detection finished"
    );
    mapping
}

/// Binds the first two postal-range-looking columns to the range fields.
fn apply_postal_fallback(mapping: &mut ColumnMapping, normalized: &[String]) {
    let mut slots = [SemanticField::RangeStart, SemanticField::RangeEnd].into_iter();
    let mut next = slots.next();

    for (index, header) in normalized.iter().enumerate() {
        let Some(field) = next else {
            break;
        };
        if POSTAL_RANGE_TERMS.iter().any(|term| header.contains(term)) {
            mapping.bind(field, index);
            next = slots.next();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|h| (*h).to_string()).collect()
    }

    #[test]
    fn binds_first_alias_match_per_field() {
        let mapping = detect_columns(&headers(&["cep_de", "cep_ate", "valor"]));
        assert_eq!(mapping.column(SemanticField::RangeStart), Some(0));
        assert_eq!(mapping.column(SemanticField::RangeEnd), Some(1));
        assert_eq!(mapping.column(SemanticField::Price), Some(2));
        assert_eq!(mapping.column(SemanticField::LeadTime), None);
    }

    #[test]
    fn canonical_field_name_matches_itself() {
        let mapping = detect_columns(&headers(&["range_start", "range_end"]));
        assert_eq!(mapping.column(SemanticField::RangeStart), Some(0));
        assert_eq!(mapping.column(SemanticField::RangeEnd), Some(1));
    }

    #[test]
    fn headers_are_normalized_before_comparison() {
        let mapping = detect_columns(&headers(&["CEP Início", "CEP Fim", "Preço", "Prazo"]));
        assert_eq!(mapping.column(SemanticField::RangeStart), Some(0));
        assert_eq!(mapping.column(SemanticField::RangeEnd), Some(1));
        assert_eq!(mapping.column(SemanticField::Price), Some(2));
        assert_eq!(mapping.column(SemanticField::LeadTime), Some(3));
    }

    #[test]
    fn postal_fallback_binds_first_two_matches_in_order() {
        let mapping = detect_columns(&headers(&["faixa1", "faixa2"]));
        assert_eq!(mapping.column(SemanticField::RangeStart), Some(0));
        assert_eq!(mapping.column(SemanticField::RangeEnd), Some(1));
    }

    #[test]
    fn postal_fallback_skips_unrelated_columns() {
        let mapping = detect_columns(&headers(&["obs", "zip_low", "zip_high", "zip_extra"]));
        assert_eq!(mapping.column(SemanticField::RangeStart), Some(1));
        assert_eq!(mapping.column(SemanticField::RangeEnd), Some(2));
    }

    #[test]
    fn postal_fallback_needs_two_headers() {
        let mapping = detect_columns(&headers(&["faixa1"]));
        assert!(mapping.is_empty());
    }

    #[test]
    fn postal_fallback_not_applied_when_a_range_field_bound() {
        // range-start bound by alias; fallback must not rebind range-end.
        let mapping = detect_columns(&headers(&["cep_inicio", "faixa_qualquer"]));
        assert_eq!(mapping.column(SemanticField::RangeStart), Some(0));
        assert_eq!(mapping.column(SemanticField::RangeEnd), None);
    }
}
