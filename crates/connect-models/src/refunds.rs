//! Payment refunds and the refund endpoints' response envelopes.

use connect_schema::{array, lazy, optional, string, Model};

use crate::common::{ApiError, Money};
use crate::payments::ProcessingFee;

/// A refund of all or part of a payment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentRefund {
    /// Always present.
    pub id: String,
    /// `PENDING`, `COMPLETED`, `REJECTED` or `FAILED`.
    pub status: Option<String>,
    pub location_id: Option<String>,
    /// Amount refunded. Always present.
    pub amount_money: Money,
    pub app_fee_money: Option<Money>,
    pub processing_fee: Option<Vec<ProcessingFee>>,
    pub payment_id: Option<String>,
    pub order_id: Option<String>,
    pub reason: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl_model!(PaymentRefund {
    id: "id" => string(),
    status: "status" => optional(string()),
    location_id: "location_id" => optional(string()),
    amount_money: "amount_money" => lazy(Money::schema),
    app_fee_money: "app_fee_money" => optional(lazy(Money::schema)),
    processing_fee: "processing_fee" => optional(array(lazy(ProcessingFee::schema))),
    payment_id: "payment_id" => optional(string()),
    order_id: "order_id" => optional(string()),
    reason: "reason" => optional(string()),
    created_at: "created_at" => optional(string()),
    updated_at: "updated_at" => optional(string()),
});

/// Response body of the RefundPayment endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefundPaymentResponse {
    pub errors: Option<Vec<ApiError>>,
    pub refund: Option<PaymentRefund>,
}

impl_model!(RefundPaymentResponse {
    errors: "errors" => optional(array(lazy(ApiError::schema))),
    refund: "refund" => optional(lazy(PaymentRefund::schema)),
});

/// Response body of the ListPaymentRefunds endpoint.
///
/// One of `errors` or `refunds` is present in a given response, never both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPaymentRefundsResponse {
    pub errors: Option<Vec<ApiError>>,
    pub refunds: Option<Vec<PaymentRefund>>,
    /// Pagination cursor for the next page. Unset on the final page.
    pub cursor: Option<String>,
}

impl_model!(ListPaymentRefundsResponse {
    errors: "errors" => optional(array(lazy(ApiError::schema))),
    refunds: "refunds" => optional(array(lazy(PaymentRefund::schema))),
    cursor: "cursor" => optional(string()),
});
