//! # CLI Configuration
//!
//! Environment-driven configuration shared by the serve and migrate commands.

use std::net::SocketAddr;

use error::{AppError, Result};

/// Application configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Full database connection URL
    pub database_url: String,
    /// JWT signing secret
    pub jwt_secret:   String,
}

impl AppConfig {
    /// Loads configuration from the environment.
    ///
    /// Reads:
    /// - `DATABASE_URL` (required)
    /// - `UPNEXUS_JWT_SECRET` (required, at least 32 bytes)
    ///
    /// # Errors
    ///
    /// Returns a config error when a required variable is missing or the
    /// secret is too short to be credible.
    pub fn from_env() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| AppError::config("DATABASE_URL is not set"))?;

        let jwt_secret = std::env::var("UPNEXUS_JWT_SECRET")
            .map_err(|_| AppError::config("UPNEXUS_JWT_SECRET is not set"))?;

        if jwt_secret.len() < 32 {
            return Err(AppError::config("UPNEXUS_JWT_SECRET must be at least 32 bytes"));
        }

        Ok(Self {
            database_url,
            jwt_secret,
        })
    }
}

/// Parses a host and port into a socket address.
///
/// # Errors
///
/// Returns a config error when the pair does not form a valid address.
pub fn parse_socket_addr(host: &str, port: u16) -> Result<SocketAddr> {
    format!("{host}:{port}")
        .parse()
        .map_err(|e| AppError::config(format!("Invalid address {host}:{port}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_socket_addr() {
        assert!(parse_socket_addr("0.0.0.0", 3000).is_ok());
        assert!(parse_socket_addr("127.0.0.1", 8080).is_ok());
        assert!(parse_socket_addr("not a host", 8080).is_err());
    }
}
