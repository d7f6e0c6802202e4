//! Entities Entity
//!
//! Directory records for the ecosystem: startups, incubators, accelerators,
//! investors and support structures. `entity_type` is free-form text rather
//! than an enum so new categories can be introduced without a migration.
//! Public listings filter on `is_active`.

use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "entities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id:                String,
    pub name:              String,
    /// Directory category, e.g. "Startup", "Incubator", "Accelerator".
    pub entity_type:       String,
    pub icon:              Option<String>,
    pub logo:              Option<String>,
    pub color:             Option<String>,
    pub description:       Option<String>,
    pub short_description: Option<String>,
    pub website:           Option<String>,
    pub location:          Option<String>,
    pub address:           Option<String>,
    /// Algerian administrative division.
    pub wilaya:            Option<String>,
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
    pub tags:              TagList,
    /// Hidden from public listings when false.
    pub is_active:         bool,
    pub is_featured:       bool,
    /// Set when the record was created through an approved claim.
    pub is_verified:       bool,
    pub created_at:        chrono::DateTime<chrono::Utc>,
    pub updated_at:        chrono::DateTime<chrono::Utc>,
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

/// Free-form tag strings stored as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct TagList(pub Vec<String>);
