//! Migration command.

use anyhow::anyhow;
use error::Result;
use migration::{Migrator, MigratorTrait as _, SeaDb};
use tracing::info;

use crate::{commands::MigrateArgs, config::AppConfig};

/// Applies pending migrations, or rolls back the last one.
pub async fn migrate(config: &AppConfig, args: &MigrateArgs) -> Result<()> {
    let db = SeaDb::from_connection_string(&config.database_url).await?;

    if args.rollback {
        info!(target: "migrate", "Rolling back the last migration...");
        Migrator::down(db.conn(), Some(1))
            .await
            .map_err(|e| anyhow!("Rollback failed: {e}"))?;
        info!(target: "migrate", "Rollback completed");
        return Ok(());
    }

    info!(target: "migrate", "Applying pending migrations...");
    Migrator::up(db.conn(), None)
        .await
        .map_err(|e| anyhow!("Migration failed: {e}"))?;
    info!(target: "migrate", "Migrations completed");

    Ok(())
}
