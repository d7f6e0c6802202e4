//! # User Account Data Transfer Objects

use entity::users;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::claims::SubmitClaimRequest;

/// Request body for user registration
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// User password
    #[validate(length(min = 8, max = 256, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 128, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 128, message = "Last name is required"))]
    pub last_name: String,

    pub phone: Option<String>,

    /// Declared intent: browser, entity_representative or individual_public
    pub user_type: String,

    /// Public role for individual profiles
    pub public_role: Option<String>,

    /// Inline entity claim submitted together with registration
    #[validate(nested)]
    pub entity_claim: Option<SubmitClaimRequest>,
}

/// Request body for user login
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct UserLoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request body for Google sign-in
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GoogleAuthRequest {
    /// Google-issued ID token, verified out-of-band
    #[validate(length(min = 1, message = "Credential is required"))]
    pub credential: String,

    /// Declared intent for first-time sign-ins; defaults to browser
    pub user_type: Option<String>,

    /// Public role for individual profiles
    pub public_role: Option<String>,

    /// Inline entity claim submitted together with sign-in
    #[validate(nested)]
    pub entity_claim: Option<SubmitClaimRequest>,
}

/// Request body for profile updates; only these fields are writable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 128, message = "First name must not be empty"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 128, message = "Last name must not be empty"))]
    pub last_name: Option<String>,

    pub phone: Option<String>,

    pub profile_picture: Option<String>,

    pub public_role: Option<String>,
}

/// Request body for the admin account-review action
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReviewUserRequest {
    /// One of: approve, reject, suspend, reactivate
    pub action: String,

    /// Free-text reason, stored on reject and suspend
    pub reason: Option<String>,
}

/// Query parameters for the admin user listing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListQuery {
    pub status:    Option<String>,
    pub user_type: Option<String>,
}

/// User representation with credential material stripped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id:              String,
    pub email:           String,
    pub first_name:      Option<String>,
    pub last_name:       Option<String>,
    pub phone:           Option<String>,
    pub profile_picture: Option<String>,
    pub auth_provider:   String,
    pub user_type:       String,
    pub public_role:     String,
    pub status:          String,
    pub status_reason:   Option<String>,
    pub approved_at:     Option<chrono::DateTime<chrono::Utc>>,
    pub last_login_at:   Option<chrono::DateTime<chrono::Utc>>,
    pub created_at:      chrono::DateTime<chrono::Utc>,
}

impl From<users::Model> for UserResponse {
    fn from(user: users::Model) -> Self {
        Self {
            id:              user.id,
            email:           user.email,
            first_name:      user.first_name,
            last_name:       user.last_name,
            phone:           user.phone,
            profile_picture: user.profile_picture,
            auth_provider:   user.auth_provider.to_string(),
            user_type:       user.user_type.to_string(),
            public_role:     user.public_role.to_string(),
            status:          user.status.to_string(),
            status_reason:   user.status_reason,
            approved_at:     user.approved_at,
            last_login_at:   user.last_login_at,
            created_at:      user.created_at,
        }
    }
}

/// Response for successful user authentication
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserAuthResponse {
    /// Indicates operation success
    pub success: bool,

    /// Bearer token valid for 7 days
    pub token: String,

    /// Authenticated user with secrets stripped
    pub user: UserResponse,
}

/// Response for the authenticated user's own profile, with the claims they
/// have submitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeResponse {
    pub success: bool,
    pub user:    UserResponse,
    pub claims:  Vec<super::claims::ClaimResponse>,
}

/// Response for user listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserListResponse {
    pub success: bool,
    pub count:   usize,
    pub users:   Vec<UserResponse>,
}
