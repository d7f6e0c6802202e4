//! # Announcement Data Transfer Objects

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for the public announcement listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnnouncementListQuery {
    /// Filter on category; "all" or absent means no filter
    pub category: Option<String>,

    /// Maximum number of records to return
    pub limit: Option<u64>,
}

/// Request body for announcement creation and update
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementUpsertRequest {
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: Option<String>,

    /// Listing excerpt; derived from content when absent
    pub excerpt: Option<String>,

    pub category:       Option<String>,
    pub author:         Option<String>,
    pub author_avatar:  Option<String>,
    pub image:          Option<String>,
    pub tags:           Option<Vec<String>>,
    pub event_date:     Option<chrono::DateTime<chrono::Utc>>,
    pub event_location: Option<String>,
    pub company:        Option<String>,
    pub job_type:       Option<String>,
    pub deadline:       Option<chrono::DateTime<chrono::Utc>>,
    pub funding_amount: Option<String>,
    pub external_link:  Option<String>,
    pub apply_link:     Option<String>,
    pub is_published:   Option<bool>,
    pub is_pinned:      Option<bool>,
}

/// Response for announcement listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnouncementListResponse {
    pub success:       bool,
    pub count:         usize,
    pub announcements: Vec<entity::announcements::Model>,
}

/// Response wrapping a single announcement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnouncementResponse {
    pub success:      bool,
    pub announcement: entity::announcements::Model,
}

/// One row of the per-category aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count:    i64,
}

/// Response for announcement statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementStatsResponse {
    pub success:     bool,
    pub total:       u64,
    pub published:   u64,
    pub total_views: i64,
    pub by_category: Vec<CategoryCount>,
}
