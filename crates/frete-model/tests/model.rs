//! Serialization round-trips for the persisted configuration shapes.

use frete_model::{
    ColumnMapping, DocumentValue, FieldMapping, NormalizedOption, NormalizedRateRow,
    SemanticField, WEIGHT_UNBOUNDED,
};

#[test]
fn field_mapping_persists_with_camel_case_keys() {
    let mapping = FieldMapping {
        options_path: "cotacoes".to_string(),
        carrier_name: Some("transportadora".to_string()),
        price: Some("preco".to_string()),
        delivery_days: Some("prazo_dias".to_string()),
        carrier_id: None,
        error_field: None,
    };

    let json = serde_json::to_value(&mapping).expect("serialize mapping");
    assert_eq!(json["optionsPath"], "cotacoes");
    assert_eq!(json["carrierName"], "transportadora");
    assert_eq!(json["deliveryDays"], "prazo_dias");
    // Unset slots are omitted entirely from the persisted shape.
    assert!(json.get("carrierId").is_none());
    assert!(json.get("errorField").is_none());

    let round: FieldMapping = serde_json::from_value(json).expect("deserialize mapping");
    assert_eq!(round, mapping);
}

#[test]
fn field_mapping_accepts_minimal_persisted_shape() {
    let mapping: FieldMapping =
        serde_json::from_str(r#"{"optionsPath":""}"#).expect("deserialize");
    assert_eq!(mapping.options_path, "");
    assert_eq!(mapping.carrier_name, None);
}

#[test]
fn column_mapping_serializes_field_names() {
    let mut mapping = ColumnMapping::new();
    mapping.bind(SemanticField::RangeStart, 0);
    mapping.bind(SemanticField::Price, 2);

    let json = serde_json::to_value(&mapping).expect("serialize");
    assert_eq!(json["range_start"], 0);
    assert_eq!(json["price"], 2);

    let round: ColumnMapping = serde_json::from_value(json).expect("deserialize");
    assert_eq!(round, mapping);
}

#[test]
fn normalized_records_use_camel_case() {
    let row = NormalizedRateRow {
        range_start: "01000000".to_string(),
        range_end: "01999999".to_string(),
        weight_min: 0.0,
        weight_max: WEIGHT_UNBOUNDED,
        price: 25.9,
        lead_time_days: 5,
    };
    let json = serde_json::to_value(&row).expect("serialize row");
    assert_eq!(json["rangeStart"], "01000000");
    assert_eq!(json["leadTimeDays"], 5);

    let option = NormalizedOption {
        carrier_name: "Jadlog".to_string(),
        price: 32.5,
        delivery_days: 4,
        carrier_id: "—".to_string(),
    };
    let json = serde_json::to_value(&option).expect("serialize option");
    assert_eq!(json["carrierName"], "Jadlog");
    assert_eq!(json["deliveryDays"], 4);
}

#[test]
fn document_value_serializes_as_plain_json() {
    let value = DocumentValue::Array(vec![
        DocumentValue::Number(1.0),
        DocumentValue::String("two".to_string()),
        DocumentValue::Null,
    ]);
    let json = serde_json::to_string(&value).expect("serialize");
    assert_eq!(json, r#"[1.0,"two",null]"#);
}
