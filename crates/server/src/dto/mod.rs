//! # Data Transfer Objects
//!
//! Request and response types for the API surface. All request bodies are
//! validated with `validator` before any database work happens.

pub mod announcements;
pub mod auth;
pub mod claims;
pub mod entities;
pub mod users;

use serde::Serialize;

/// Generic success envelope for operations with no payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessResponse {
    /// Indicates operation success
    pub success: bool,

    /// Human-readable message
    pub message: String,
}

impl SuccessResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
