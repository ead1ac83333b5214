//! Invoices.

use connect_schema::{array, integer, lazy, optional, string, Model};

use crate::common::{ApiError, Money};

/// An invoice sent to a customer for an order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invoice {
    pub id: Option<String>,
    /// Incremented on every update; required for optimistic concurrency on
    /// update calls.
    pub version: Option<i64>,
    pub location_id: Option<String>,
    pub order_id: Option<String>,
    pub invoice_number: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub scheduled_at: Option<String>,
    pub public_url: Option<String>,
    pub next_payment_amount_money: Option<Money>,
    /// `DRAFT`, `UNPAID`, `SCHEDULED`, `PAID`, `CANCELED`, ...
    pub status: Option<String>,
    pub timezone: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub sale_or_service_date: Option<String>,
}

impl_model!(Invoice {
    id: "id" => optional(string()),
    version: "version" => optional(integer()),
    location_id: "location_id" => optional(string()),
    order_id: "order_id" => optional(string()),
    invoice_number: "invoice_number" => optional(string()),
    title: "title" => optional(string()),
    description: "description" => optional(string()),
    scheduled_at: "scheduled_at" => optional(string()),
    public_url: "public_url" => optional(string()),
    next_payment_amount_money: "next_payment_amount_money" => optional(lazy(Money::schema)),
    status: "status" => optional(string()),
    timezone: "timezone" => optional(string()),
    created_at: "created_at" => optional(string()),
    updated_at: "updated_at" => optional(string()),
    sale_or_service_date: "sale_or_service_date" => optional(string()),
});

/// Response body of the UpdateInvoice endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateInvoiceResponse {
    pub invoice: Option<Invoice>,
    pub errors: Option<Vec<ApiError>>,
}

impl_model!(UpdateInvoiceResponse {
    invoice: "invoice" => optional(lazy(Invoice::schema)),
    errors: "errors" => optional(array(lazy(ApiError::schema))),
});
