//! Admins Entity
//!
//! Administrative principals. Exactly one bootstrap admin is created via the
//! one-time setup operation; admins are never deleted through the public API.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "admins")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id:            String,
    #[sea_orm(unique)]
    pub username:      String,
    /// Stored lowercase.
    #[sea_orm(unique)]
    pub email:         String,
    pub password_hash: String,
    pub role:          AdminRole,
    pub last_login_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at:    chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Administrative role enumeration
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "admin_role")]
pub enum AdminRole {
    #[sea_orm(string_value = "admin")]
    Admin,
    /// The bootstrap admin created by setup.
    #[sea_orm(string_value = "superadmin")]
    Superadmin,
}

impl AdminRole {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::Admin => "admin",
            AdminRole::Superadmin => "superadmin",
        }
    }
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.as_str()) }
}
