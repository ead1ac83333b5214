//! Loyalty events.

use connect_schema::{array, integer, lazy, optional, string, Model};

use crate::common::ApiError;

/// An event that affected the point balance of a loyalty account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoyaltyEvent {
    pub id: String,
    /// `ACCUMULATE_POINTS`, `ADJUST_POINTS`, `REDEEM_REWARD`, ... Wire key `type`.
    pub event_type: String,
    pub created_at: String,
    pub adjust_points: Option<LoyaltyEventAdjustPoints>,
    pub loyalty_account_id: String,
    pub location_id: Option<String>,
    /// Origin of the event, e.g. `LOYALTY_API`.
    pub source: String,
}

impl_model!(LoyaltyEvent {
    id: "id" => string(),
    event_type: "type" => string(),
    created_at: "created_at" => string(),
    adjust_points: "adjust_points" => optional(lazy(LoyaltyEventAdjustPoints::schema)),
    loyalty_account_id: "loyalty_account_id" => string(),
    location_id: "location_id" => optional(string()),
    source: "source" => string(),
});

/// Details of a manual point adjustment. `points` may be negative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoyaltyEventAdjustPoints {
    pub loyalty_program_id: Option<String>,
    pub points: i64,
    pub reason: Option<String>,
}

impl_model!(LoyaltyEventAdjustPoints {
    loyalty_program_id: "loyalty_program_id" => optional(string()),
    points: "points" => integer(),
    reason: "reason" => optional(string()),
});

/// Response body of the AdjustLoyaltyPoints endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjustLoyaltyPointsResponse {
    pub errors: Option<Vec<ApiError>>,
    pub event: Option<LoyaltyEvent>,
}

impl_model!(AdjustLoyaltyPointsResponse {
    errors: "errors" => optional(array(lazy(ApiError::schema))),
    event: "event" => optional(lazy(LoyaltyEvent::schema)),
});
