//! # connect-models: Typed Connect API Payloads
//!
//! Request payloads, response envelopes and entity fragments of the Connect
//! payments/commerce API. Every model is a plain struct whose fields are
//! decoded from and encoded to snake_case wire keys by a
//! [`connect_schema::Schema`] built once per type.
//!
//! ## Conventions
//!
//! - Nearly every wire field is optional and modeled as `Option<_>`. A
//!   missing key and an explicit `null` both decode to `None`; `None` is
//!   omitted on encode.
//! - The few fields the API always returns (identifiers, error categories)
//!   are plain values and fail validation when absent.
//! - Cross-model references always go through [`connect_schema::lazy`], so
//!   models may reference each other in any order, including cycles
//!   (`CatalogObject` → `CatalogItem` → `CatalogObject`).
//! - Response envelopes carry `errors` alongside the payload; a response has
//!   one or the other.
//!
//! ## Registry
//!
//! [`registry`] lists every top-level request/response model by name so
//! tools can check arbitrary documents without knowing the Rust type.

/// Implement [`connect_schema::Model`] for a record from its field table,
/// memoizing the built schema in a per-type static.
macro_rules! impl_model {
    ($record:ident { $($table:tt)* }) => {
        impl connect_schema::Model for $record {
            fn schema() -> connect_schema::Schema<Self> {
                static SCHEMA: std::sync::OnceLock<connect_schema::Schema<$record>> =
                    std::sync::OnceLock::new();
                SCHEMA
                    .get_or_init(|| {
                        tracing::debug!(model = stringify!($record), "building model schema");
                        connect_schema::object!($record { $($table)* })
                    })
                    .clone()
            }
        }
    };
}

pub mod catalog;
pub mod common;
pub mod customers;
pub mod invoices;
pub mod labor;
pub mod loyalty;
pub mod payments;
pub mod refunds;
pub mod registry;

pub use catalog::{
    CatalogCategory, CatalogCustomAttributeValue, CatalogIdMapping, CatalogItem, CatalogObject,
    CatalogQuery, CatalogQueryExact, CatalogQueryPrefix, CatalogQueryRange, CatalogQueryText,
    ListCatalogResponse, SearchCatalogObjectsRequest,
};
pub use common::{Address, ApiError, Money};
pub use customers::{CreateCustomerResponse, Customer};
pub use invoices::{Invoice, UpdateInvoiceResponse};
pub use labor::{BreakType, UpdateBreakTypeResponse};
pub use loyalty::{AdjustLoyaltyPointsResponse, LoyaltyEvent, LoyaltyEventAdjustPoints};
pub use payments::{
    Card, CardPaymentDetails, Payment, PaymentBalanceActivityThirdPartyFeeDetail, ProcessingFee,
};
pub use refunds::{ListPaymentRefundsResponse, PaymentRefund, RefundPaymentResponse};
pub use registry::{find, registry, ModelEntry};

pub use connect_schema::Model;
