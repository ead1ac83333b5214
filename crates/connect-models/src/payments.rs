//! Payments and the fragments a payment embeds.

use connect_schema::{array, integer, lazy, optional, string, Model};

use crate::common::{Address, ApiError, Money};

/// A payment processed by the Connect API.
///
/// Timestamps (`created_at`, `updated_at`, `delayed_until`) are RFC 3339
/// strings and durations (`delay_duration`) are RFC 3339 durations; both are
/// kept as received.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payment {
    /// Unique ID for the payment.
    pub id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    /// Amount processed, excluding tips.
    pub amount_money: Option<Money>,
    pub tip_money: Option<Money>,
    /// Total amount, including tips.
    pub total_money: Option<Money>,
    /// Amount the developer application takes from the payment.
    pub app_fee_money: Option<Money>,
    /// Processing fees and fee adjustments assessed on this payment.
    pub processing_fee: Option<Vec<ProcessingFee>>,
    /// Total amount refunded so far.
    pub refunded_money: Option<Money>,
    /// `APPROVED`, `COMPLETED`, `CANCELED` or `FAILED`.
    pub status: Option<String>,
    /// Time after creation at which `delay_action` is applied automatically.
    pub delay_duration: Option<String>,
    /// `CANCEL` or `COMPLETE`.
    pub delay_action: Option<String>,
    pub delayed_until: Option<String>,
    /// `CARD`, `BANK_ACCOUNT`, `WALLET`, `CASH` or `EXTERNAL`.
    pub source_type: Option<String>,
    pub card_details: Option<CardPaymentDetails>,
    pub location_id: Option<String>,
    pub order_id: Option<String>,
    pub reference_id: Option<String>,
    pub customer_id: Option<String>,
    pub employee_id: Option<String>,
    /// IDs of refunds issued against this payment.
    pub refund_ids: Option<Vec<String>>,
    pub buyer_email_address: Option<String>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
    pub note: Option<String>,
    /// Identifier that appears on the buyer's card statement.
    pub statement_description_identifier: Option<String>,
    pub receipt_number: Option<String>,
    pub receipt_url: Option<String>,
}

impl_model!(Payment {
    id: "id" => optional(string()),
    created_at: "created_at" => optional(string()),
    updated_at: "updated_at" => optional(string()),
    amount_money: "amount_money" => optional(lazy(Money::schema)),
    tip_money: "tip_money" => optional(lazy(Money::schema)),
    total_money: "total_money" => optional(lazy(Money::schema)),
    app_fee_money: "app_fee_money" => optional(lazy(Money::schema)),
    processing_fee: "processing_fee" => optional(array(lazy(ProcessingFee::schema))),
    refunded_money: "refunded_money" => optional(lazy(Money::schema)),
    status: "status" => optional(string()),
    delay_duration: "delay_duration" => optional(string()),
    delay_action: "delay_action" => optional(string()),
    delayed_until: "delayed_until" => optional(string()),
    source_type: "source_type" => optional(string()),
    card_details: "card_details" => optional(lazy(CardPaymentDetails::schema)),
    location_id: "location_id" => optional(string()),
    order_id: "order_id" => optional(string()),
    reference_id: "reference_id" => optional(string()),
    customer_id: "customer_id" => optional(string()),
    employee_id: "employee_id" => optional(string()),
    refund_ids: "refund_ids" => optional(array(string())),
    buyer_email_address: "buyer_email_address" => optional(string()),
    billing_address: "billing_address" => optional(lazy(Address::schema)),
    shipping_address: "shipping_address" => optional(lazy(Address::schema)),
    note: "note" => optional(string()),
    statement_description_identifier: "statement_description_identifier" => optional(string()),
    receipt_number: "receipt_number" => optional(string()),
    receipt_url: "receipt_url" => optional(string()),
});

/// A processing fee or fee adjustment assessed on a payment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessingFee {
    pub effective_at: Option<String>,
    /// `INITIAL` or `ADJUSTMENT`. Wire key `type`.
    pub fee_type: Option<String>,
    pub amount_money: Option<Money>,
}

impl_model!(ProcessingFee {
    effective_at: "effective_at" => optional(string()),
    fee_type: "type" => optional(string()),
    amount_money: "amount_money" => optional(lazy(Money::schema)),
});

/// Card-specific details of a payment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardPaymentDetails {
    /// `AUTHORIZED`, `CAPTURED`, `VOIDED` or `FAILED`.
    pub status: Option<String>,
    pub card: Option<Card>,
    pub entry_method: Option<String>,
    pub cvv_status: Option<String>,
    pub avs_status: Option<String>,
    pub auth_result_code: Option<String>,
    pub statement_description: Option<String>,
    /// Errors encountered while processing the card.
    pub errors: Option<Vec<ApiError>>,
}

impl_model!(CardPaymentDetails {
    status: "status" => optional(string()),
    card: "card" => optional(lazy(Card::schema)),
    entry_method: "entry_method" => optional(string()),
    cvv_status: "cvv_status" => optional(string()),
    avs_status: "avs_status" => optional(string()),
    auth_result_code: "auth_result_code" => optional(string()),
    statement_description: "statement_description" => optional(string()),
    errors: "errors" => optional(array(lazy(ApiError::schema))),
});

/// A payment card. Never carries the full card number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Card {
    pub id: Option<String>,
    pub card_brand: Option<String>,
    /// Last four digits of the card number. Wire key `last_4`.
    pub last_4: Option<String>,
    pub exp_month: Option<i64>,
    pub exp_year: Option<i64>,
    pub cardholder_name: Option<String>,
    pub billing_address: Option<Address>,
    pub fingerprint: Option<String>,
}

impl_model!(Card {
    id: "id" => optional(string()),
    card_brand: "card_brand" => optional(string()),
    last_4: "last_4" => optional(string()),
    exp_month: "exp_month" => optional(integer()),
    exp_year: "exp_year" => optional(integer()),
    cardholder_name: "cardholder_name" => optional(string()),
    billing_address: "billing_address" => optional(lazy(Address::schema)),
    fingerprint: "fingerprint" => optional(string()),
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentBalanceActivityThirdPartyFeeDetail {
    /// The ID of the payment associated with this activity.
    pub payment_id: Option<String>,
}

impl_model!(PaymentBalanceActivityThirdPartyFeeDetail {
    payment_id: "payment_id" => optional(string()),
});
