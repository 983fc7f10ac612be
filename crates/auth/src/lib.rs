//! `sealtrack-auth` — accounts, roles and credential verification.
//!
//! This crate is intentionally decoupled from storage: it defines what an
//! account is and how a password is hashed/verified; persistence lives in
//! `sealtrack-store`.

pub mod account;
pub mod password;
pub mod role;
pub mod session;

pub use account::UserAccount;
pub use password::{PasswordError, hash_password, verify_password};
pub use role::Role;
pub use session::Session;
