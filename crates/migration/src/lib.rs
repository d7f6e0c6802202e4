pub use sea_orm_migration::prelude::*;

pub mod db;
pub use db::SeaDb;

mod m20250810_000001_create_admins_table;
mod m20250810_000002_create_users_table;
mod m20250810_000003_create_entities_table;
mod m20250810_000004_create_entity_claims_table;
mod m20250810_000005_create_announcements_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250810_000001_create_admins_table::Migration),
            Box::new(m20250810_000002_create_users_table::Migration),
            Box::new(m20250810_000003_create_entities_table::Migration),
            Box::new(m20250810_000004_create_entity_claims_table::Migration),
            Box::new(m20250810_000005_create_announcements_table::Migration),
        ]
    }
}
