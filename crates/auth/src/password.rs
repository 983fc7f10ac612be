//! Password hashing with argon2id.
//!
//! Only PHC-formatted hashes are ever stored; plaintext never leaves the
//! call stack. Each hash carries its own random salt.

use argon2::Argon2;
use password_hash::rand_core::OsRng;
use password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use thiserror::Error;

/// Failure while producing a password hash.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("password hashing failed: {0}")]
pub struct PasswordError(String);

/// Hash a plain password with argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| PasswordError(e.to_string()))
}

/// Verify a password against a stored PHC hash string.
///
/// A malformed hash verifies as `false` rather than erroring; the caller
/// cannot distinguish it from a wrong password, which is the point.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("hunter3", &hash));
    }

    #[test]
    fn hash_is_not_plaintext_and_is_salted() {
        let a = hash_password("admin").unwrap();
        let b = hash_password("admin").unwrap();
        assert!(a.starts_with("$argon2"));
        assert!(!a.contains("admin"));
        // Fresh salt per call.
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_hash_never_verifies() {
        assert!(!verify_password("admin", "not-a-phc-string"));
        assert!(!verify_password("admin", ""));
    }
}
