//! # Directory Entity Data Transfer Objects

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for the public entity listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntityListQuery {
    /// Filter on entity type; "all" or absent means no filter
    #[serde(rename = "type")]
    pub entity_type: Option<String>,

    /// Include inactive records when "true" (admin views)
    pub include_inactive: Option<String>,
}

/// Request body for entity creation and update; update treats every field as
/// optional and only overwrites what is present.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EntityUpsertRequest {
    #[validate(length(min = 1, max = 255, message = "Entity name is required"))]
    pub name: Option<String>,

    /// Directory category; defaults to "Startup"
    #[serde(rename = "type")]
    pub entity_type: Option<String>,

    pub icon:              Option<String>,
    pub logo:              Option<String>,
    pub color:             Option<String>,
    pub description:       Option<String>,
    pub short_description: Option<String>,
    pub website:           Option<String>,
    pub location:          Option<String>,
    pub address:           Option<String>,
    pub wilaya:            Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email:             Option<String>,
    pub phone:             Option<String>,
    pub linkedin:          Option<String>,
    pub twitter:           Option<String>,
    pub facebook:          Option<String>,
    pub instagram:         Option<String>,
    pub founded_year:      Option<i32>,
    pub team_size:         Option<String>,
    pub sector:            Option<String>,
    pub stage:             Option<String>,
    pub tags:              Option<Vec<String>>,
    pub is_active:         Option<bool>,
    pub is_featured:       Option<bool>,
}

/// Response for entity listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityListResponse {
    pub success:  bool,
    pub count:    usize,
    pub entities: Vec<entity::entities::Model>,
}

/// Response wrapping a single entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityResponse {
    pub success: bool,
    pub entity:  entity::entities::Model,
}

/// One row of the per-type aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub count:       i64,
}

/// Response for the public statistics endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub success:        bool,
    pub total_entities: u64,
    pub by_type:        Vec<TypeCount>,
}

/// Response for the admin dashboard statistics endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatsResponse {
    pub success:             bool,
    pub total_entities:      u64,
    pub active_entities:     u64,
    pub total_users:         u64,
    pub pending_users:       u64,
    pub pending_claims:      u64,
    pub total_announcements: u64,
}
