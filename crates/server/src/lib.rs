//! # UP-NEXUS API Server
//!
//! Axum-based HTTP API for the UP-NEXUS ecosystem platform.
//!
//! ## Modules
//!
//! - [`auth`]: Admin authentication endpoints
//! - [`users`]: End-user accounts, OAuth and the moderation lifecycle
//! - [`claims`]: Entity-ownership claims and their review workflow
//! - [`entities`]: Public directory listings and admin entity management
//! - [`announcements`]: Editorial content endpoints
//! - [`dto`]: Request/response data transfer objects
//! - [`middleware`]: HTTP middleware (admin and user request guards)
//! - [`router`]: API route configuration

use std::sync::Arc;

pub mod announcements;
pub mod auth;
pub mod claims;
pub mod dto;
pub mod entities;
pub mod middleware;
pub mod router;
pub mod users;

pub use router::create_router;

use ::auth::JwtConfig;
use migration::SeaDb;
use users::oauth::GoogleTokenVerifier;

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection handle
    pub db:         SeaDb,
    /// JWT configuration
    pub jwt_config: JwtConfig,
    /// Google ID-token verifier
    pub google:     Arc<dyn GoogleTokenVerifier>,
    /// Server start time for uptime reporting
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Creates the application state with the production Google verifier.
    #[must_use]
    pub fn new(db: SeaDb, jwt_config: JwtConfig) -> Self {
        Self {
            db,
            jwt_config,
            google: Arc::new(users::oauth::GoogleTokeninfoClient::new()),
            start_time: std::time::Instant::now(),
        }
    }
}
