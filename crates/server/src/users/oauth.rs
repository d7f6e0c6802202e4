//! # Google Sign-In
//!
//! ID-token verification sits behind a trait so tests can substitute a stub
//! instead of calling Google. The production implementation asks the
//! tokeninfo endpoint, which also validates signature and expiry server-side.

use async_trait::async_trait;
use error::{AppError, Result};
use serde::Deserialize;

/// Profile fields extracted from a verified Google ID token.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleProfile {
    /// Google account id (`sub` claim).
    pub sub: String,

    pub email: String,

    #[serde(default)]
    pub given_name: Option<String>,

    #[serde(default)]
    pub family_name: Option<String>,

    #[serde(default)]
    pub picture: Option<String>,
}

/// Verifies Google ID tokens.
#[async_trait]
pub trait GoogleTokenVerifier: Send + Sync {
    /// Verifies the token and returns the profile it asserts.
    ///
    /// # Errors
    ///
    /// Returns an unauthorized error for any token Google does not accept.
    async fn verify(&self, id_token: &str) -> Result<GoogleProfile>;
}

/// Production verifier backed by Google's tokeninfo endpoint.
pub struct GoogleTokeninfoClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GoogleTokeninfoClient {
    #[must_use]
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: "https://oauth2.googleapis.com/tokeninfo".to_string(),
        }
    }
}

impl Default for GoogleTokeninfoClient {
    fn default() -> Self { Self::new() }
}

#[async_trait]
impl GoogleTokenVerifier for GoogleTokeninfoClient {
    async fn verify(&self, id_token: &str) -> Result<GoogleProfile> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("id_token", id_token)])
            .send()
            .await
            .map_err(|e| AppError::internal(format!("Google tokeninfo request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::unauthorized("Invalid Google token"));
        }

        response
            .json::<GoogleProfile>()
            .await
            .map_err(|_| AppError::unauthorized("Invalid Google token"))
    }
}
