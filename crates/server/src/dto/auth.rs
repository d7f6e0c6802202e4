//! # Admin Authentication Data Transfer Objects

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for admin login
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct AdminLoginRequest {
    /// Admin username
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    /// Admin password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request body for one-time admin setup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct AdminSetupRequest {
    /// Bootstrap admin username
    #[validate(length(min = 3, max = 64, message = "Username must be between 3 and 64 characters"))]
    pub username: String,

    /// Bootstrap admin email
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Bootstrap admin password
    #[validate(length(
        min = 12,
        max = 256,
        message = "Password must be between 12 and 256 characters"
    ))]
    pub password: String,
}

/// Admin identity echoed back by login and verify
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminInfo {
    /// Unique admin identifier
    pub id: String,

    /// Admin username
    pub username: String,

    /// Admin role
    pub role: String,
}

/// Response for successful admin login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminAuthResponse {
    /// Indicates operation success
    pub success: bool,

    /// Bearer token valid for 24 hours
    pub token: String,

    /// Authenticated admin identity
    pub admin: AdminInfo,
}

/// Response for token verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyResponse {
    /// Indicates the presented token is valid
    pub success: bool,

    /// Admin identity carried by the token
    pub admin: AdminInfo,
}
