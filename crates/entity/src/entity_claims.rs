//! Entity Claims Entity
//!
//! A claim asserts that a user owns or represents a directory entity. Claims
//! are moderated: they start pending and move exactly once to approved or
//! rejected. A user may not hold more than one live (pending or approved)
//! claim for the same entity; the table enforces this with a partial unique
//! index over `(user_id, entity_id)` restricted to those two statuses.

use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "entity_claims")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id:                     String,
    pub user_id:                String,
    /// Absent until approval for new-entity claims.
    pub entity_id:              Option<String>,
    pub is_new_entity:          bool,
    /// Draft payload consumed on approval of a new-entity claim.
    pub new_entity_data:        Option<NewEntityDraft>,
    pub claim_role:             ClaimRole,
    pub work_email:             Option<String>,
    pub linkedin_profile:       Option<String>,
    pub verification_documents: DocumentList,
    pub additional_notes:       Option<String>,
    pub status:                 ClaimStatus,
    pub rejection_reason:       Option<String>,
    pub reviewed_at:            Option<chrono::DateTime<chrono::Utc>>,
    pub reviewed_by:            Option<String>,
    pub created_at:             chrono::DateTime<chrono::Utc>,
    pub updated_at:             chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::entities::Entity",
        from = "Column::EntityId",
        to = "super::entities::Column::Id"
    )]
    Entities,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef { Relation::Users.def() }
}

impl Related<super::entities::Entity> for Entity {
    fn to() -> RelationDef { Relation::Entities.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Draft of the entity to create when a new-entity claim is approved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct NewEntityDraft {
    pub name:         String,
    /// Directory category; defaults to "Startup" when absent.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub entity_type:  Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description:  Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website:      Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin:     Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city:         Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo:         Option<String>,
}

/// Uploaded evidence URLs attached to a claim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct DocumentList(pub Vec<String>);

/// Asserted relationship between the claimant and the entity
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "claim_role")]
pub enum ClaimRole {
    #[sea_orm(string_value = "owner")]
    Owner,
    #[sea_orm(string_value = "founder")]
    Founder,
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "manager")]
    Manager,
    /// Default when the submission omits a role.
    #[sea_orm(string_value = "team_member")]
    TeamMember,
}

impl ClaimRole {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimRole::Owner => "owner",
            ClaimRole::Founder => "founder",
            ClaimRole::Admin => "admin",
            ClaimRole::Manager => "manager",
            ClaimRole::TeamMember => "team_member",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "owner" => Some(ClaimRole::Owner),
            "founder" => Some(ClaimRole::Founder),
            "admin" => Some(ClaimRole::Admin),
            "manager" => Some(ClaimRole::Manager),
            "team_member" => Some(ClaimRole::TeamMember),
            _ => None,
        }
    }
}

impl Default for ClaimRole {
    fn default() -> Self { ClaimRole::TeamMember }
}

impl std::fmt::Display for ClaimRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.as_str()) }
}

/// Claim moderation status
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "claim_status")]
pub enum ClaimStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Terminal.
    #[sea_orm(string_value = "approved")]
    Approved,
    /// Terminal.
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl ClaimStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
        }
    }

    /// Parse a query-string filter value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(ClaimStatus::Pending),
            "approved" => Some(ClaimStatus::Approved),
            "rejected" => Some(ClaimStatus::Rejected),
            _ => None,
        }
    }

    /// Live claims block a duplicate submission for the same entity.
    #[must_use]
    pub fn is_live(&self) -> bool { matches!(self, ClaimStatus::Pending | ClaimStatus::Approved) }
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.as_str()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_role_default() {
        assert_eq!(ClaimRole::default(), ClaimRole::TeamMember);
    }

    #[test]
    fn test_live_statuses() {
        assert!(ClaimStatus::Pending.is_live());
        assert!(ClaimStatus::Approved.is_live());
        assert!(!ClaimStatus::Rejected.is_live());
    }

    #[test]
    fn test_new_entity_draft_json_field_names() {
        let draft = NewEntityDraft {
            name: "DevFactory".to_string(),
            entity_type: Some("Incubator".to_string()),
            founded_year: Some(2021),
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["name"], "DevFactory");
        assert_eq!(json["type"], "Incubator");
        assert_eq!(json["foundedYear"], 2021);
        assert!(json.get("website").is_none());
    }
}
