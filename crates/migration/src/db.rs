//! # Database Connection Management
//!
//! An explicit connection handle wrapping the Sea-ORM pool. Every piece of
//! code that touches the database receives a [`SeaDb`] instead of consulting
//! ambient state, so readiness is a property of the handle you hold.

use std::time::Duration;

use ::error::AppError;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Handle to the database connection pool.
///
/// Cheap to clone; all clones share the underlying pool.
#[derive(Debug, Clone)]
pub struct SeaDb {
    conn: DatabaseConnection,
}

impl SeaDb {
    /// Connects using a full connection URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub async fn from_connection_string(url: &str) -> Result<Self, AppError> {
        let mut opts = ConnectOptions::new(url.to_string());
        opts.max_connections(10)
            .connect_timeout(Duration::from_secs(30))
            .sqlx_logging(false);

        let conn = Database::connect(opts)
            .await
            .map_err(|e| AppError::database(format!("Database connection failed: {e}")))?;

        tracing::info!("Database connection established");
        Ok(Self { conn })
    }

    /// Connects using the `DATABASE_URL` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or the connection fails.
    pub async fn from_env() -> Result<Self, AppError> {
        let url = std::env::var("DATABASE_URL")
            .map_err(|_| AppError::config("DATABASE_URL is not set"))?;
        Self::from_connection_string(&url).await
    }

    /// Wraps an already-established connection. Used by tests.
    #[must_use]
    pub fn from_connection(conn: DatabaseConnection) -> Self { Self { conn } }

    /// Borrows the underlying Sea-ORM connection.
    #[must_use]
    pub fn conn(&self) -> &DatabaseConnection { &self.conn }

    /// Round-trips a trivial query; used by the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the database does not respond.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.conn
            .ping()
            .await
            .map_err(|e| AppError::database(format!("Database ping failed: {e}")))
    }
}
