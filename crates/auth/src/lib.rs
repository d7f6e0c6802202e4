//! # Authentication Service
//!
//! Credential and token handling for the UP-NEXUS platform:
//! - Argon2id password hashing and verification
//! - Signed bearer tokens for admin and user principals

pub mod jwt;
pub mod password;

// Re-export commonly used types
pub use jwt::{
    create_admin_token,
    create_user_token,
    extract_bearer_token,
    verify_token,
    Claims,
    JwtConfig,
    TokenError,
};
pub use password::{hash_password, verify_password, PasswordError};
pub use secrecy;
