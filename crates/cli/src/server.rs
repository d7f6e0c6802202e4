//! # CLI Server
//!
//! Server startup for the `serve` command: connect, migrate, listen.

use std::net::SocketAddr;

use anyhow::anyhow;
use auth::JwtConfig;
use error::Result;
use migration::{Migrator, MigratorTrait as _, SeaDb};
use server::{create_router, AppState};
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    commands::ServeArgs,
    config::{parse_socket_addr, AppConfig},
};

/// Starts the API server.
///
/// Migrations run automatically before the listener binds, so a freshly
/// deployed instance serves requests against a complete schema.
pub async fn serve(config: &AppConfig, args: &ServeArgs) -> Result<()> {
    info!(target: "serve", "Connecting to database...");
    let db = SeaDb::from_connection_string(&config.database_url).await?;

    info!(target: "serve", "Running database migrations...");
    Migrator::up(db.conn(), None)
        .await
        .map_err(|e| anyhow!("Migration failed: {e}"))?;
    info!(target: "serve", "Database migrations completed");

    let state = AppState::new(db, JwtConfig::new(config.jwt_secret.clone()));
    let app = create_router(state);

    let address = parse_socket_addr(&args.host, args.port)?;
    serve_http(app, &address).await
}

async fn serve_http(app: axum::Router, address: &SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| anyhow!("Failed to bind to {address}: {e}"))?;

    info!(target: "serve", %address, "Starting HTTP server...");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow!("HTTP server error: {e}"))?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut signal) = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            signal.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!(target: "serve", "Shutdown signal received");
}
