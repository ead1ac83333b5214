//! Name-indexed table of the top-level request/response models.
//!
//! Tools that receive a document and a model name (rather than a Rust type)
//! look the name up here and run the entry's [`ModelEntry::normalize`]: decode
//! into the typed model, then encode back. The result is the canonical wire
//! form with unknown keys and explicit nulls removed.

use serde_json::Value;

use connect_schema::{Model, ValidationError};

use crate::{
    AdjustLoyaltyPointsResponse, CatalogIdMapping, CreateCustomerResponse, ListCatalogResponse,
    ListPaymentRefundsResponse, Payment, PaymentBalanceActivityThirdPartyFeeDetail,
    RefundPaymentResponse, SearchCatalogObjectsRequest, UpdateBreakTypeResponse,
    UpdateInvoiceResponse,
};

/// One registered model.
#[derive(Clone, Copy)]
pub struct ModelEntry {
    /// Kebab-case lookup name, e.g. `list-payment-refunds-response`.
    pub name: &'static str,
    /// Rust type name, e.g. `ListPaymentRefundsResponse`.
    pub type_name: &'static str,
    normalize: fn(&Value) -> Result<Value, ValidationError>,
    describe: fn() -> String,
}

impl ModelEntry {
    /// Decode `input` as this model and re-encode it.
    pub fn normalize(&self, input: &Value) -> Result<Value, ValidationError> {
        (self.normalize)(input)
    }

    /// Human-readable description of the model's schema.
    pub fn describe(&self) -> String {
        (self.describe)()
    }
}

impl std::fmt::Debug for ModelEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelEntry")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .finish()
    }
}

fn normalize<T: Model>(input: &Value) -> Result<Value, ValidationError> {
    let record = T::from_value(input)?;
    Ok(record.to_value())
}

fn describe<T: Model>() -> String {
    T::schema().describe().into_owned()
}

macro_rules! entries {
    ($($name:literal => $record:ident),* $(,)?) => {
        &[$(ModelEntry {
            name: $name,
            type_name: stringify!($record),
            normalize: normalize::<$record>,
            describe: describe::<$record>,
        }),*]
    };
}

static REGISTRY: &[ModelEntry] = entries![
    "adjust-loyalty-points-response" => AdjustLoyaltyPointsResponse,
    "catalog-id-mapping" => CatalogIdMapping,
    "create-customer-response" => CreateCustomerResponse,
    "list-catalog-response" => ListCatalogResponse,
    "list-payment-refunds-response" => ListPaymentRefundsResponse,
    "payment" => Payment,
    "payment-balance-activity-third-party-fee-detail" => PaymentBalanceActivityThirdPartyFeeDetail,
    "refund-payment-response" => RefundPaymentResponse,
    "search-catalog-objects-request" => SearchCatalogObjectsRequest,
    "update-break-type-response" => UpdateBreakTypeResponse,
    "update-invoice-response" => UpdateInvoiceResponse,
];

/// Every registered model, sorted by name.
pub fn registry() -> &'static [ModelEntry] {
    REGISTRY
}

/// Look up a model by its kebab-case name or, ignoring case, its type name.
pub fn find(name: &str) -> Option<&'static ModelEntry> {
    REGISTRY
        .iter()
        .find(|entry| entry.name == name || entry.type_name.eq_ignore_ascii_case(name))
}
