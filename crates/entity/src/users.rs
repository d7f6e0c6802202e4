//! Users Entity
//!
//! End-user accounts. Email is globally unique across all auth providers;
//! OAuth lookups must match by external id OR email so a previously
//! email-registered address is linked rather than duplicated. Accounts are
//! never hard-deleted; suspension is the deletion analogue.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id:                            String,
    /// Stored lowercase; globally unique across providers.
    #[sea_orm(unique)]
    pub email:                         String,
    /// Absent for OAuth-only accounts.
    pub password_hash:                 Option<String>,
    pub first_name:                    Option<String>,
    pub last_name:                     Option<String>,
    pub phone:                         Option<String>,
    pub profile_picture:               Option<String>,
    pub auth_provider:                 AuthProvider,
    /// Sparse: unique when present.
    pub google_id:                     Option<String>,
    pub linkedin_id:                   Option<String>,
    pub user_type:                     UserType,
    pub public_role:                   PublicRole,
    pub status:                        UserStatus,
    /// Free text set on reject/suspend.
    pub status_reason:                 Option<String>,
    pub email_verification_token:      Option<String>,
    pub email_verification_expires_at: Option<chrono::DateTime<chrono::Utc>>,
    pub password_reset_token:          Option<String>,
    pub password_reset_expires_at:     Option<chrono::DateTime<chrono::Utc>>,
    pub approved_at:                   Option<chrono::DateTime<chrono::Utc>>,
    /// Audit back-reference to the reviewing admin.
    pub approved_by:                   Option<String>,
    pub last_login_at:                 Option<chrono::DateTime<chrono::Utc>>,
    pub created_at:                    chrono::DateTime<chrono::Utc>,
    pub updated_at:                    chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::entity_claims::Entity")]
    EntityClaims,
}

impl Related<super::entity_claims::Entity> for Entity {
    fn to() -> RelationDef { Relation::EntityClaims.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// User account status enumeration
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_status")]
pub enum UserStatus {
    /// Account is visible and fully capable
    #[sea_orm(string_value = "active")]
    Active,
    /// Awaiting admin moderation
    #[sea_orm(string_value = "pending_review")]
    PendingReview,
    /// Rejected by an admin
    #[sea_orm(string_value = "rejected")]
    Rejected,
    /// Suspended by an admin (deletion analogue)
    #[sea_orm(string_value = "suspended")]
    Suspended,
}

impl UserStatus {
    /// Initial status on account creation, driven by the declared intent.
    #[must_use]
    pub fn initial_for(user_type: UserType) -> Self {
        match user_type {
            UserType::Browser => UserStatus::Active,
            UserType::EntityRepresentative | UserType::IndividualPublic => UserStatus::PendingReview,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::PendingReview => "pending_review",
            UserStatus::Rejected => "rejected",
            UserStatus::Suspended => "suspended",
        }
    }

    /// Parse a query-string filter value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(UserStatus::Active),
            "pending_review" => Some(UserStatus::PendingReview),
            "rejected" => Some(UserStatus::Rejected),
            "suspended" => Some(UserStatus::Suspended),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.as_str()) }
}

/// Declared intent of the account
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_type")]
pub enum UserType {
    /// Read-only visitor; active immediately
    #[sea_orm(string_value = "browser")]
    Browser,
    /// Claims to represent an organization; moderated
    #[sea_orm(string_value = "entity_representative")]
    EntityRepresentative,
    /// Public individual profile (mentor, coach, ...); moderated
    #[sea_orm(string_value = "individual_public")]
    IndividualPublic,
}

impl UserType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Browser => "browser",
            UserType::EntityRepresentative => "entity_representative",
            UserType::IndividualPublic => "individual_public",
        }
    }

    /// Parse a query-string filter value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "browser" => Some(UserType::Browser),
            "entity_representative" => Some(UserType::EntityRepresentative),
            "individual_public" => Some(UserType::IndividualPublic),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.as_str()) }
}

/// Public role displayed on individual profiles
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "public_role")]
pub enum PublicRole {
    #[sea_orm(string_value = "none")]
    None,
    #[sea_orm(string_value = "mentor")]
    Mentor,
    #[sea_orm(string_value = "coach")]
    Coach,
    #[sea_orm(string_value = "freelancer")]
    Freelancer,
    #[sea_orm(string_value = "project_holder")]
    ProjectHolder,
    #[sea_orm(string_value = "investor")]
    Investor,
    #[sea_orm(string_value = "other")]
    Other,
}

impl PublicRole {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PublicRole::None => "none",
            PublicRole::Mentor => "mentor",
            PublicRole::Coach => "coach",
            PublicRole::Freelancer => "freelancer",
            PublicRole::ProjectHolder => "project_holder",
            PublicRole::Investor => "investor",
            PublicRole::Other => "other",
        }
    }

    /// Parse a request value; unknown strings fall back to None.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(PublicRole::None),
            "mentor" => Some(PublicRole::Mentor),
            "coach" => Some(PublicRole::Coach),
            "freelancer" => Some(PublicRole::Freelancer),
            "project_holder" => Some(PublicRole::ProjectHolder),
            "investor" => Some(PublicRole::Investor),
            "other" => Some(PublicRole::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for PublicRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.as_str()) }
}

/// Authentication provider
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "auth_provider")]
pub enum AuthProvider {
    #[sea_orm(string_value = "email")]
    Email,
    #[sea_orm(string_value = "google")]
    Google,
    #[sea_orm(string_value = "linkedin")]
    Linkedin,
}

impl AuthProvider {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Email => "email",
            AuthProvider::Google => "google",
            AuthProvider::Linkedin => "linkedin",
        }
    }
}

impl std::fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.as_str()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_status_by_user_type() {
        assert_eq!(UserStatus::initial_for(UserType::Browser), UserStatus::Active);
        assert_eq!(
            UserStatus::initial_for(UserType::EntityRepresentative),
            UserStatus::PendingReview
        );
        assert_eq!(
            UserStatus::initial_for(UserType::IndividualPublic),
            UserStatus::PendingReview
        );
    }

    #[test]
    fn test_status_parse_round_trip() {
        for status in [
            UserStatus::Active,
            UserStatus::PendingReview,
            UserStatus::Rejected,
            UserStatus::Suspended,
        ] {
            assert_eq!(UserStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(UserStatus::parse("deleted"), None);
    }

    #[test]
    fn test_user_type_parse() {
        assert_eq!(UserType::parse("browser"), Some(UserType::Browser));
        assert_eq!(UserType::parse("admin"), None);
    }
}
