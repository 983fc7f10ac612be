//! File-backed credential store.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use sealtrack_auth::{PasswordError, Role, UserAccount};

use crate::error::StoreError;
use crate::ledger::tmp_sibling;

/// Column order of the persisted user file.
pub const USER_HEADER: [&str; 3] = ["username", "password_hash", "role"];

const BOOTSTRAP_USERNAME: &str = "admin";
const BOOTSTRAP_PASSWORD: &str = "admin";

/// Failure in a credential store operation.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// `username` already exists; accounts are keyed by username.
    #[error("username already taken: {0}")]
    Duplicate(String),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// CSV-backed store for user accounts.
///
/// Performs no authorization checks of its own; restricting `add`/`remove`
/// to admins is the caller's job (see `sealtrack-app`). Like the ledger
/// store, it holds only a path and re-reads/re-writes the file per call.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all accounts.
    ///
    /// When the backing file is absent the single bootstrap admin account
    /// (`admin`/`admin`, hashed) is synthesized and persisted before
    /// returning, so a fresh installation can always log in.
    pub fn load(&self) -> Result<Vec<UserAccount>, CredentialError> {
        if !self.path.exists() {
            let bootstrap = UserAccount::new(BOOTSTRAP_USERNAME, BOOTSTRAP_PASSWORD, Role::Admin)?;
            self.persist(std::slice::from_ref(&bootstrap))?;
            tracing::info!(
                path = %self.path.display(),
                "credential store bootstrapped with default admin account"
            );
            return Ok(vec![bootstrap]);
        }
        let mut reader = csv::Reader::from_path(&self.path).map_err(StoreError::from)?;
        let mut accounts = Vec::new();
        for row in reader.deserialize::<UserAccount>() {
            accounts.push(row.map_err(StoreError::from)?);
        }
        Ok(accounts)
    }

    /// Look up by exact username and verify the password.
    ///
    /// `None` for both unknown-user and wrong-password; callers cannot tell
    /// the two apart.
    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserAccount>, CredentialError> {
        let accounts = self.load()?;
        Ok(accounts
            .into_iter()
            .find(|a| a.username == username)
            .filter(|a| a.verify(password)))
    }

    /// Add an account and rewrite the file. Usernames are unique.
    pub fn add(&self, account: UserAccount) -> Result<(), CredentialError> {
        let mut accounts = self.load()?;
        if accounts.iter().any(|a| a.username == account.username) {
            return Err(CredentialError::Duplicate(account.username));
        }
        accounts.push(account);
        self.persist(&accounts)?;
        Ok(())
    }

    /// Remove an account by username and rewrite the file.
    ///
    /// Returns whether an account was actually removed.
    pub fn remove(&self, username: &str) -> Result<bool, CredentialError> {
        let mut accounts = self.load()?;
        let before = accounts.len();
        accounts.retain(|a| a.username != username);
        if accounts.len() == before {
            return Ok(false);
        }
        self.persist(&accounts)?;
        Ok(true)
    }

    /// Rewrite the whole file, temp-file-then-rename like the ledger store.
    fn persist(&self, accounts: &[UserAccount]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = tmp_sibling(&self.path);
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_path(&tmp)?;
            writer.write_record(USER_HEADER)?;
            for account in accounts {
                writer.serialize(account)?;
            }
            writer.flush()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn fresh_store_bootstraps_default_admin() {
        let dir = tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("users.csv"));

        let accounts = store.load().unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].username, "admin");
        assert_eq!(accounts[0].role, Role::Admin);
        assert!(store.path().exists());
    }

    #[test]
    fn bootstrap_admin_can_authenticate() {
        let dir = tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("users.csv"));

        let account = store.authenticate("admin", "admin").unwrap();
        assert!(account.is_some());
        assert_eq!(account.unwrap().role, Role::Admin);

        assert!(store.authenticate("admin", "wrong").unwrap().is_none());
        assert!(store.authenticate("nobody", "admin").unwrap().is_none());
    }

    #[test]
    fn persisted_file_never_contains_plaintext() {
        let dir = tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("users.csv"));
        store.load().unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(content.lines().next().unwrap(), "username,password_hash,role");
        for line in content.lines().skip(1) {
            assert!(!line.contains(",admin,"), "plaintext password in: {line}");
            assert!(line.contains("$argon2"));
        }
    }

    #[test]
    fn add_persists_and_rejects_duplicates() {
        let dir = tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("users.csv"));
        store
            .add(UserAccount::new("alice", "pw", Role::Operator).unwrap())
            .unwrap();

        // A second handle sees the new account after reload.
        let reread = CredentialStore::new(store.path());
        let auth = reread.authenticate("alice", "pw").unwrap();
        assert_eq!(auth.unwrap().role, Role::Operator);

        let err = store
            .add(UserAccount::new("alice", "other", Role::Manager).unwrap())
            .unwrap_err();
        assert!(matches!(err, CredentialError::Duplicate(u) if u == "alice"));
    }

    #[test]
    fn rewrite_does_not_clobber_a_sibling_sharing_the_stem() {
        let dir = tempdir().unwrap();
        let unrelated = dir.path().join("users.tmp");
        std::fs::write(&unrelated, "keep me").unwrap();

        let store = CredentialStore::new(dir.path().join("users.csv"));
        store
            .add(UserAccount::new("alice", "pw", Role::Operator).unwrap())
            .unwrap();

        assert_eq!(std::fs::read_to_string(&unrelated).unwrap(), "keep me");
        assert!(!dir.path().join("users.csv.tmp").exists());
    }

    #[test]
    fn remove_reports_whether_anything_was_removed() {
        let dir = tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("users.csv"));
        store
            .add(UserAccount::new("bob", "pw", Role::Manager).unwrap())
            .unwrap();

        assert!(store.remove("bob").unwrap());
        assert!(!store.remove("bob").unwrap());
        assert!(store.authenticate("bob", "pw").unwrap().is_none());
    }
}
