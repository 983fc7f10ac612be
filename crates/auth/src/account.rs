//! User account model.

use serde::{Deserialize, Serialize};

use crate::password::{PasswordError, hash_password, verify_password};
use crate::role::Role;

/// One persisted user account.
///
/// `username` is the unique key. `password_hash` is an argon2id PHC string;
/// the plaintext credential is hashed on construction and never stored.
/// Field names double as the persisted CSV header (see `sealtrack-store`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

impl UserAccount {
    /// Create an account from a plaintext password, hashing it immediately.
    pub fn new(
        username: impl Into<String>,
        password: &str,
        role: Role,
    ) -> Result<Self, PasswordError> {
        Ok(Self {
            username: username.into(),
            password_hash: hash_password(password)?,
            role,
        })
    }

    /// Check a plaintext password against this account's stored hash.
    pub fn verify(&self, password: &str) -> bool {
        verify_password(password, &self.password_hash)
    }
}
