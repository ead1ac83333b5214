//! Customer profiles.

use connect_schema::{array, integer, lazy, optional, string, Model};

use crate::common::{Address, ApiError};

/// A customer profile kept by a seller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Customer {
    pub id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub nickname: Option<String>,
    pub company_name: Option<String>,
    pub email_address: Option<String>,
    pub address: Option<Address>,
    pub phone_number: Option<String>,
    /// `YYYY-MM-DD`, or `0000-MM-DD` when the year is unknown.
    pub birthday: Option<String>,
    pub reference_id: Option<String>,
    pub note: Option<String>,
    /// `THIRD_PARTY`, `INSTANT_PROFILE`, ...
    pub creation_source: Option<String>,
    pub group_ids: Option<Vec<String>>,
    pub segment_ids: Option<Vec<String>>,
    pub version: Option<i64>,
}

impl_model!(Customer {
    id: "id" => optional(string()),
    created_at: "created_at" => optional(string()),
    updated_at: "updated_at" => optional(string()),
    given_name: "given_name" => optional(string()),
    family_name: "family_name" => optional(string()),
    nickname: "nickname" => optional(string()),
    company_name: "company_name" => optional(string()),
    email_address: "email_address" => optional(string()),
    address: "address" => optional(lazy(Address::schema)),
    phone_number: "phone_number" => optional(string()),
    birthday: "birthday" => optional(string()),
    reference_id: "reference_id" => optional(string()),
    note: "note" => optional(string()),
    creation_source: "creation_source" => optional(string()),
    group_ids: "group_ids" => optional(array(string())),
    segment_ids: "segment_ids" => optional(array(string())),
    version: "version" => optional(integer()),
});

/// Response body of the CreateCustomer endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateCustomerResponse {
    pub errors: Option<Vec<ApiError>>,
    pub customer: Option<Customer>,
}

impl_model!(CreateCustomerResponse {
    errors: "errors" => optional(array(lazy(ApiError::schema))),
    customer: "customer" => optional(lazy(Customer::schema)),
});
