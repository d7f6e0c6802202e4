//! Configuration validation command.

use error::Result;
use tracing::info;

use crate::config::AppConfig;

/// Verifies that the environment provides a usable configuration.
pub fn validate() -> Result<()> {
    let config = AppConfig::from_env()?;

    info!(
        target: "validate",
        database_url_set = !config.database_url.is_empty(),
        "Configuration is valid"
    );
    println!("Configuration OK");

    Ok(())
}
