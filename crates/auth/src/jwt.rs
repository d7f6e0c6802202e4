//! # Token Service
//!
//! Signed, time-limited bearer tokens for the two principal kinds.
//!
//! Admin tokens carry `{sub, username, role}` and live 24 hours; user tokens
//! carry `{sub, userId, email, userType, status}` and live 7 days. The status
//! embedded in a user token is the status at issuance time; there is no
//! revocation list, so claims stay valid until natural expiry.

use std::time::SystemTime;

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by token issuance and verification.
///
/// All verification failures (missing header, signature mismatch, expiry)
/// collapse into [`TokenError::Invalid`] so the caller cannot distinguish them.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid or expired token")]
    Invalid,

    #[error("Token encoding failed: {0}")]
    EncodingFailed(String),

    #[error("System clock before UNIX epoch")]
    ClockSkew,
}

/// JWT configuration shared by both token shapes.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC signing secret.
    pub secret: String,

    /// Admin token lifetime in seconds (24 hours).
    pub admin_expiration_seconds: u64,

    /// User token lifetime in seconds (7 days).
    pub user_expiration_seconds: u64,
}

impl JwtConfig {
    /// Create a config with the platform's standard lifetimes.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            admin_expiration_seconds: 24 * 60 * 60,
            user_expiration_seconds: 7 * 24 * 60 * 60,
        }
    }
}

/// Claims carried by both admin and user tokens.
///
/// The populated optional fields determine the token's shape: admin tokens
/// have `username` and `role`, user tokens have `user_id`. A token with
/// neither set is rejected by both request guards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (principal document id).
    pub sub: String,

    /// Issued at (Unix timestamp).
    pub iat: u64,

    /// Expiration time (Unix timestamp).
    pub exp: u64,

    /// Admin username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Admin role (admin, superadmin).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// End-user id.
    #[serde(default, rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// End-user email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// End-user declared intent (browser, entity_representative, individual_public).
    #[serde(default, rename = "userType", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,

    /// End-user account status at issuance time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Claims {
    /// True when the claims identify an admin principal.
    #[must_use]
    pub fn is_admin_shaped(&self) -> bool { self.username.is_some() && self.role.is_some() }

    /// True when the claims identify an end-user principal.
    #[must_use]
    pub fn is_user_shaped(&self) -> bool { self.user_id.is_some() }
}

fn now_secs() -> Result<u64, TokenError> {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|_| TokenError::ClockSkew)
}

fn encode(config: &JwtConfig, claims: &Claims) -> Result<String, TokenError> {
    jsonwebtoken::encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| TokenError::EncodingFailed(e.to_string()))
}

/// Issues an admin token valid for 24 hours.
///
/// # Errors
///
/// Returns an error if token encoding fails.
pub fn create_admin_token(config: &JwtConfig, admin_id: &str, username: &str, role: &str) -> Result<String, TokenError> {
    let iat = now_secs()?;
    let claims = Claims {
        sub: admin_id.to_string(),
        iat,
        exp: iat + config.admin_expiration_seconds,
        username: Some(username.to_string()),
        role: Some(role.to_string()),
        user_id: None,
        email: None,
        user_type: None,
        status: None,
    };
    encode(config, &claims)
}

/// Issues a user token valid for 7 days, embedding the status at login time.
///
/// # Errors
///
/// Returns an error if token encoding fails.
pub fn create_user_token(
    config: &JwtConfig,
    user_id: &str,
    email: &str,
    user_type: &str,
    status: &str,
) -> Result<String, TokenError> {
    let iat = now_secs()?;
    let claims = Claims {
        sub: user_id.to_string(),
        iat,
        exp: iat + config.user_expiration_seconds,
        username: None,
        role: None,
        user_id: Some(user_id.to_string()),
        email: Some(email.to_string()),
        user_type: Some(user_type.to_string()),
        status: Some(status.to_string()),
    };
    encode(config, &claims)
}

/// Verifies a token and returns its claims.
///
/// # Errors
///
/// Returns [`TokenError::Invalid`] for every verification failure; the cause
/// (malformed, bad signature, expired) is deliberately not leaked.
pub fn verify_token(config: &JwtConfig, token: &str) -> Result<Claims, TokenError> {
    let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
    let mut validation = Validation::default();
    validation.validate_exp = true;

    let data = jsonwebtoken::decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|_| TokenError::Invalid)?;

    Ok(data.claims)
}

/// Extracts the Bearer token from the Authorization header.
///
/// Returns the token string if present, or None if missing/invalid.
#[must_use]
pub fn extract_bearer_token(auth_header: &str) -> Option<String> {
    if !auth_header.starts_with("Bearer ") {
        return None;
    }

    let token = auth_header.trim_start_matches("Bearer ").trim();

    if token.is_empty() {
        return None;
    }

    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig { JwtConfig::new("test-secret-key-that-is-at-least-32-bytes-long") }

    #[test]
    fn test_admin_token_round_trip() {
        let config = test_config();
        let token = create_admin_token(&config, "adm_1", "oussama", "superadmin").unwrap();

        let claims = verify_token(&config, &token).unwrap();
        assert_eq!(claims.sub, "adm_1");
        assert_eq!(claims.username.as_deref(), Some("oussama"));
        assert_eq!(claims.role.as_deref(), Some("superadmin"));
        assert!(claims.is_admin_shaped());
        assert!(!claims.is_user_shaped());
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_user_token_round_trip() {
        let config = test_config();
        let token = create_user_token(
            &config,
            "usr_1",
            "amine@example.com",
            "entity_representative",
            "pending_review",
        )
        .unwrap();

        let claims = verify_token(&config, &token).unwrap();
        assert_eq!(claims.user_id.as_deref(), Some("usr_1"));
        assert_eq!(claims.status.as_deref(), Some("pending_review"));
        assert!(claims.is_user_shaped());
        assert!(!claims.is_admin_shaped());
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let config = test_config();
        let token = create_admin_token(&config, "adm_1", "oussama", "admin").unwrap();

        let other = JwtConfig::new("a-completely-different-signing-secret!!");
        assert!(matches!(
            verify_token(&other, &token),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let mut config = test_config();
        config.admin_expiration_seconds = 0;
        let token = create_admin_token(&config, "adm_1", "oussama", "admin").unwrap();

        // Default validation keeps 60s leeway; force none for the test.
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        let mut validation = Validation::default();
        validation.leeway = 0;
        std::thread::sleep(std::time::Duration::from_secs(1));
        assert!(jsonwebtoken::decode::<Claims>(&token, &decoding_key, &validation).is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(
            extract_bearer_token("Bearer abc123"),
            Some("abc123".to_string())
        );
        assert_eq!(
            extract_bearer_token("Bearer   abc123   "),
            Some("abc123".to_string())
        );
        assert!(extract_bearer_token("Basic abc123").is_none());
        assert!(extract_bearer_token("Bearer").is_none());
        assert!(extract_bearer_token("").is_none());
    }
}
