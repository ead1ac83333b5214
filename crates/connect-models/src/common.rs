//! Shared value types referenced across the API: errors, money, addresses.

use connect_schema::{integer, optional, string};

/// An error encountered while processing a request.
///
/// Wire name `Error`. `category` and `code` are always present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiError {
    /// High-level grouping, e.g. `INVALID_REQUEST_ERROR`.
    pub category: String,
    /// Specific error code, e.g. `VALUE_TOO_LOW`.
    pub code: String,
    /// Human-readable explanation.
    pub detail: Option<String>,
    /// Request field the error relates to, if any.
    pub field: Option<String>,
}

impl_model!(ApiError {
    category: "category" => string(),
    code: "code" => string(),
    detail: "detail" => optional(string()),
    field: "field" => optional(string()),
});

/// An amount of money in the smallest denomination of `currency`.
///
/// Money fields can be signed or unsigned depending on where they appear;
/// this type carries no sign policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Money {
    pub amount: Option<i64>,
    /// ISO 4217 currency code.
    pub currency: Option<String>,
}

impl_model!(Money {
    amount: "amount" => optional(integer()),
    currency: "currency" => optional(string()),
});

impl Money {
    /// Convenience constructor for a fully specified amount.
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount: Some(amount),
            currency: Some(currency.into()),
        }
    }
}

/// A physical address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub address_line_3: Option<String>,
    pub locality: Option<String>,
    pub sublocality: Option<String>,
    pub administrative_district_level_1: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl_model!(Address {
    address_line_1: "address_line_1" => optional(string()),
    address_line_2: "address_line_2" => optional(string()),
    address_line_3: "address_line_3" => optional(string()),
    locality: "locality" => optional(string()),
    sublocality: "sublocality" => optional(string()),
    administrative_district_level_1: "administrative_district_level_1" => optional(string()),
    postal_code: "postal_code" => optional(string()),
    country: "country" => optional(string()),
    first_name: "first_name" => optional(string()),
    last_name: "last_name" => optional(string()),
});

#[cfg(test)]
mod tests {
    use super::*;
    use connect_schema::{Model, ValueKind};
    use serde_json::json;

    #[test]
    fn api_error_requires_category_and_code() {
        let err = ApiError::from_value(&json!({"category": "API_ERROR"})).unwrap_err();
        assert_eq!(err.path().to_string(), "code");
        assert_eq!(err.actual(), ValueKind::Missing);
    }

    #[test]
    fn api_error_round_trips() {
        let doc = json!({
            "category": "INVALID_REQUEST_ERROR",
            "code": "VALUE_TOO_LOW",
            "field": "amount_money.amount",
        });
        let error = ApiError::from_value(&doc).unwrap();
        assert_eq!(error.detail, None);
        assert_eq!(error.to_value(), doc);
    }

    #[test]
    fn money_accepts_negative_amounts() {
        let money = Money::from_value(&json!({"amount": -250, "currency": "USD"})).unwrap();
        assert_eq!(money, Money::new(-250, "USD"));
    }

    #[test]
    fn money_rejects_fractional_amounts() {
        let err = Money::from_value(&json!({"amount": 12.5})).unwrap_err();
        assert_eq!(err.to_string(), "amount: expected integer, found number");
    }

    #[test]
    fn address_keeps_numbered_wire_keys() {
        let address = Address {
            address_line_1: Some("500 Electric Ave".into()),
            administrative_district_level_1: Some("NY".into()),
            ..Address::default()
        };
        assert_eq!(
            address.to_value(),
            json!({
                "address_line_1": "500 Electric Ave",
                "administrative_district_level_1": "NY",
            })
        );
    }
}
