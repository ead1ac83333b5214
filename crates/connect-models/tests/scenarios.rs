//! End-to-end decode/encode behaviour of the public models.

use connect_models::{
    find, registry, CatalogIdMapping, ListPaymentRefundsResponse, Model, Money, Payment,
    SearchCatalogObjectsRequest,
};
use connect_schema::{DecodeError, ValueKind, Wire};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[test]
fn id_mapping_with_only_object_id() {
    let mapping = CatalogIdMapping::from_json_str(r#"{"object_id":"abc123"}"#).unwrap();
    assert_eq!(
        mapping,
        CatalogIdMapping {
            client_object_id: None,
            object_id: Some("abc123".into()),
        }
    );
    assert_eq!(mapping.to_value(), json!({"object_id": "abc123"}));
}

#[test]
fn refunds_response_with_empty_errors_and_null_refunds() {
    let response =
        ListPaymentRefundsResponse::from_json_str(r#"{"errors":[],"refunds":null}"#).unwrap();
    assert_eq!(response.errors, Some(vec![]));
    assert_eq!(response.refunds, None);
    assert_eq!(response.cursor, None);
    assert_eq!(response.to_value(), json!({"errors": []}));
}

#[test]
fn error_text_is_the_same_before_and_after_first_successful_decode() {
    let bad = json!({"refunds": 5});
    let first = ListPaymentRefundsResponse::from_value(&bad).unwrap_err().to_string();
    ListPaymentRefundsResponse::from_value(&json!({
        "refunds": [{"id": "R1", "amount_money": {"amount": 100, "currency": "USD"}}]
    }))
    .unwrap();
    let second = ListPaymentRefundsResponse::from_value(&bad).unwrap_err().to_string();
    assert_eq!(first, second);
    assert_eq!(first, "refunds: expected array<object PaymentRefund>, found number");
}

#[test]
fn integral_float_search_limit_is_accepted() {
    let request = SearchCatalogObjectsRequest::from_json_str(r#"{"limit":10.0}"#).unwrap();
    assert_eq!(request.limit, Some(10));
    assert!(SearchCatalogObjectsRequest::from_json_str(r#"{"limit":10.5}"#).is_err());
}

#[test]
fn negative_search_limit_is_preserved() {
    let request = SearchCatalogObjectsRequest::from_json_str(r#"{"limit":-5}"#).unwrap();
    assert_eq!(request.limit, Some(-5));
    assert_eq!(request.to_value(), json!({"limit": -5}));
}

#[test]
fn malformed_json_is_distinguished_from_invalid_shape() {
    assert!(matches!(
        Payment::from_json_str("{\"id\":"),
        Err(DecodeError::Json(_))
    ));
    match Payment::from_json_str(r#"{"amount_money":{"amount":"100"}}"#) {
        Err(DecodeError::Validation(err)) => {
            assert_eq!(err.path().to_string(), "amount_money.amount");
            assert_eq!(err.expected(), "integer");
            assert_eq!(err.actual(), ValueKind::String);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn every_registered_model_accepts_an_empty_object_or_names_the_missing_field() {
    for entry in registry() {
        match entry.normalize(&json!({})) {
            Ok(out) => assert_eq!(out, json!({}), "{}", entry.name),
            Err(err) => {
                assert_eq!(err.actual(), ValueKind::Missing, "{}", entry.name);
                assert!(!err.path().is_root(), "{}", entry.name);
            }
        }
    }
}

#[test]
fn registry_rejects_non_objects_at_root() {
    let entry = find("payment").unwrap();
    let err = entry.normalize(&json!([1, 2])).unwrap_err();
    assert!(err.path().is_root());
    assert_eq!(err.actual(), ValueKind::Array);
    assert_eq!(err.to_string(), "(root): expected object Payment, found array");
}

#[derive(Debug, Serialize, Deserialize)]
struct LedgerLine {
    memo: String,
    total: Wire<Money>,
}

#[test]
fn models_embed_in_serde_structs() {
    let line: LedgerLine =
        serde_json::from_value(json!({"memo": "tip", "total": {"amount": 250, "currency": "USD"}}))
            .unwrap();
    assert_eq!(line.total.0, Money::new(250, "USD"));
    assert_eq!(
        serde_json::to_value(&line).unwrap(),
        json!({"memo": "tip", "total": {"amount": 250, "currency": "USD"}})
    );

    let err = serde_json::from_value::<LedgerLine>(json!({"memo": "tip", "total": {"amount": 2.5}}))
        .unwrap_err();
    assert!(err.to_string().contains("amount"), "{err}");
}
