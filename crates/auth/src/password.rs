//! Password hashing and verification using Argon2id.
//!
//! Passwords are stored only as PHC-format Argon2id strings. The parameters
//! are embedded in the hash, so verification works across parameter upgrades.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm,
    Argon2,
    Params,
    Version,
};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Errors that can occur during password operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Hashing failed: {0}")]
    HashingFailed(String),

    #[error("Verification failed: password does not match")]
    VerificationFailed,

    #[error("Invalid hash format")]
    InvalidHashFormat,
}

/// Memory cost in KiB (15 MiB).
const MEMORY_COST: u32 = 15360;
/// Number of iterations.
const TIME_COST: u32 = 3;
/// Number of lanes.
const PARALLELISM: u32 = 2;

fn hasher() -> Result<Argon2<'static>, PasswordError> {
    let params = Params::new(MEMORY_COST, TIME_COST, PARALLELISM, None)
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hashes a password using Argon2id with a random per-password salt.
///
/// # Errors
///
/// Returns an error if hashing fails.
pub fn hash_password(password: &SecretString) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = hasher()?
        .hash_password(password.expose_secret().as_bytes(), &salt)
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verifies a candidate password against a stored PHC hash string.
///
/// # Errors
///
/// Returns [`PasswordError::VerificationFailed`] on mismatch and
/// [`PasswordError::InvalidHashFormat`] when the stored value is not a
/// parseable PHC string.
pub fn verify_password(password: &SecretString, expected_hash: &str) -> Result<(), PasswordError> {
    let parsed = PasswordHash::new(expected_hash).map_err(|_| PasswordError::InvalidHashFormat)?;

    hasher()?
        .verify_password(password.expose_secret().as_bytes(), &parsed)
        .map_err(|_| PasswordError::VerificationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = SecretString::from("TestPassword123!".to_string());
        let hash = hash_password(&password).unwrap();
        let result = verify_password(&password, &hash);
        assert!(result.is_ok(), "Verification failed: {:?}", result);
    }

    #[test]
    fn test_wrong_password_fails() {
        let password = SecretString::from("CorrectPassword".to_string());
        let wrong_password = SecretString::from("WrongPassword".to_string());
        let hash = hash_password(&password).unwrap();
        assert!(matches!(
            verify_password(&wrong_password, &hash),
            Err(PasswordError::VerificationFailed)
        ));
    }

    #[test]
    fn test_hash_is_salted() {
        let password = SecretString::from("SamePassword".to_string());
        let a = hash_password(&password).unwrap();
        let b = hash_password(&password).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_garbage_hash_rejected() {
        let password = SecretString::from("whatever".to_string());
        assert!(matches!(
            verify_password(&password, "not-a-phc-string"),
            Err(PasswordError::InvalidHashFormat)
        ));
    }

    #[test]
    fn test_hash_is_phc_argon2id() {
        let password = SecretString::from("TestPassword123!".to_string());
        let hash = hash_password(&password).unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }
}
