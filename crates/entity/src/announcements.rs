//! Announcements Entity
//!
//! Editorial content: news, events, job and funding announcements. The
//! `excerpt` is derived from the content when not supplied; `views` counts
//! public detail reads. Listings order pinned items first, then most
//! recently published.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::entities::TagList;

/// Auto-derived excerpt length in characters.
pub const EXCERPT_LEN: usize = 280;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "announcements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id:            String,
    pub title:         String,
    #[sea_orm(column_type = "Text")]
    pub content:       String,
    pub excerpt:       String,
    /// Free-form category, e.g. "news", "event", "job", "funding".
    pub category:      String,
    pub author:        String,
    pub author_avatar: Option<String>,
    pub image:         Option<String>,
    pub tags:          TagList,
    pub event_date:    Option<chrono::DateTime<chrono::Utc>>,
    pub event_location: Option<String>,
    pub company:       Option<String>,
    pub job_type:      Option<String>,
    pub deadline:      Option<chrono::DateTime<chrono::Utc>>,
    pub funding_amount: Option<String>,
    pub external_link: Option<String>,
    pub apply_link:    Option<String>,
    pub is_published:  bool,
    pub is_pinned:     bool,
    pub views:         i64,
    pub published_at:  chrono::DateTime<chrono::Utc>,
    pub created_at:    chrono::DateTime<chrono::Utc>,
    pub updated_at:    chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Derives the listing excerpt from full content: the first 280 characters,
/// with a trailing ellipsis when the content was truncated.
#[must_use]
pub fn derive_excerpt(content: &str) -> String {
    let truncated: String = content.chars().take(EXCERPT_LEN).collect();
    if content.chars().count() > EXCERPT_LEN {
        format!("{truncated}...")
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_content_kept_whole() {
        assert_eq!(derive_excerpt("Appel à candidatures"), "Appel à candidatures");
    }

    #[test]
    fn test_long_content_truncated_with_ellipsis() {
        let content = "x".repeat(300);
        let excerpt = derive_excerpt(&content);
        assert_eq!(excerpt.len(), EXCERPT_LEN + 3);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn test_exact_length_has_no_ellipsis() {
        let content = "y".repeat(EXCERPT_LEN);
        assert_eq!(derive_excerpt(&content), content);
    }
}
