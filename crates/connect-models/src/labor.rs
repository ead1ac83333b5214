//! Labor: break types used when tracking shifts.

use connect_schema::{array, boolean, integer, lazy, optional, string, Model};

use crate::common::ApiError;

/// A break template that can be applied to shifts at a location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakType {
    pub id: Option<String>,
    pub location_id: String,
    /// Human-readable name, e.g. `Lunch Break`.
    pub break_name: String,
    /// RFC 3339 duration, e.g. `PT30M`.
    pub expected_duration: String,
    pub is_paid: bool,
    pub version: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl_model!(BreakType {
    id: "id" => optional(string()),
    location_id: "location_id" => string(),
    break_name: "break_name" => string(),
    expected_duration: "expected_duration" => string(),
    is_paid: "is_paid" => boolean(),
    version: "version" => optional(integer()),
    created_at: "created_at" => optional(string()),
    updated_at: "updated_at" => optional(string()),
});

/// Response body of the UpdateBreakType endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateBreakTypeResponse {
    pub break_type: Option<BreakType>,
    pub errors: Option<Vec<ApiError>>,
}

impl_model!(UpdateBreakTypeResponse {
    break_type: "break_type" => optional(lazy(BreakType::schema)),
    errors: "errors" => optional(array(lazy(ApiError::schema))),
});
