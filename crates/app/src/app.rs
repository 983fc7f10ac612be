//! The application facade.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use sealtrack_auth::{Session, UserAccount};
use sealtrack_core::DomainError;
use sealtrack_ledger::{
    GroupKey, Ledger, Measure, ProductionRecord, RecordFilter, Reducer, SealTypeSet, aggregate,
    daily_average, top_n,
};
use sealtrack_store::{AppendError, CredentialError, CredentialStore, LedgerStore, StoreError};

use crate::export::{ExportError, ExportFormat, export};

/// Facade-level failure.
#[derive(Debug, Error)]
pub enum AppError {
    /// The operation needs an authenticated session and none is held.
    #[error("not logged in")]
    NotLoggedIn,

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Credential(#[from] CredentialError),
}

impl From<AppendError> for AppError {
    fn from(err: AppendError) -> Self {
        match err {
            AppendError::Validation(e) => AppError::Domain(e),
            AppendError::Store(e) => AppError::Store(e),
        }
    }
}

/// Form input for one new ledger entry.
///
/// `operator` is optional: when absent, the authenticated identity is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    pub date: NaiveDate,
    pub company: String,
    pub seal_count: i64,
    pub operator: Option<String>,
    pub seal_type: String,
    pub production_time_minutes: f64,
    pub downtime_minutes: f64,
    pub downtime_reason: String,
}

/// Everything a presentation layer needs, behind one value.
///
/// Holds the two stores, the configured seal type set, and the current
/// session (explicitly, not as a global). All calls are synchronous; the
/// stores re-read/re-write their files per call.
#[derive(Debug)]
pub struct App {
    ledger_store: LedgerStore,
    credential_store: CredentialStore,
    seal_types: SealTypeSet,
    session: Option<Session>,
}

impl App {
    pub fn new(
        ledger_path: impl Into<PathBuf>,
        users_path: impl Into<PathBuf>,
        seal_types: SealTypeSet,
    ) -> Self {
        Self {
            ledger_store: LedgerStore::new(ledger_path),
            credential_store: CredentialStore::new(users_path),
            seal_types,
            session: None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn seal_types(&self) -> &SealTypeSet {
        &self.seal_types
    }

    /// Authenticate and, on success, hold the session.
    ///
    /// Bad credentials are `Ok(None)`, not an error; unknown-user and
    /// wrong-password are indistinguishable here by design.
    pub fn login(&mut self, username: &str, password: &str) -> Result<Option<Session>, AppError> {
        match self.credential_store.authenticate(username, password)? {
            Some(account) => {
                let session = Session::from(&account);
                tracing::info!(user = %session.username, role = %session.role, "login");
                self.session = Some(session.clone());
                Ok(Some(session))
            }
            None => Ok(None),
        }
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(user = %session.username, "logout");
        }
    }

    /// Load the ledger and apply `filter`.
    pub fn list_records(&self, filter: &RecordFilter) -> Result<Ledger, AppError> {
        let ledger = self.ledger_store.load()?;
        Ok(filter.apply(&ledger))
    }

    /// Validate and append one record, filling `operator` from the session
    /// when the form left it empty.
    pub fn add_record(&self, input: NewRecord) -> Result<(), AppError> {
        let session = self.session.as_ref().ok_or(AppError::NotLoggedIn)?;

        if !self.seal_types.contains(&input.seal_type) {
            return Err(DomainError::validation(["seal_type"]).into());
        }

        let operator = input
            .operator
            .filter(|o| !o.trim().is_empty())
            .unwrap_or_else(|| session.username.clone());

        let record = ProductionRecord {
            date: input.date,
            company: input.company,
            seal_count: input.seal_count,
            operator,
            seal_type: input.seal_type,
            production_time_minutes: input.production_time_minutes,
            downtime_minutes: input.downtime_minutes,
            downtime_reason: input.downtime_reason,
        };
        self.ledger_store.append(record)?;
        Ok(())
    }

    /// Group-and-reduce over the current ledger.
    pub fn aggregate(
        &self,
        key: GroupKey,
        measure: Measure,
        reducer: Reducer,
    ) -> Result<Vec<(String, f64)>, AppError> {
        let ledger = self.ledger_store.load()?;
        Ok(aggregate(&ledger, key, measure, reducer))
    }

    /// Top `n` groups by summed measure over the current ledger.
    pub fn top_n(
        &self,
        key: GroupKey,
        n: usize,
        measure: Measure,
    ) -> Result<Vec<(String, f64)>, AppError> {
        let ledger = self.ledger_store.load()?;
        Ok(top_n(&ledger, key, n, measure))
    }

    /// Average of per-date seal count totals; `None` while the ledger is
    /// empty.
    pub fn daily_average(&self) -> Result<Option<f64>, AppError> {
        let ledger = self.ledger_store.load()?;
        Ok(daily_average(&ledger))
    }

    /// Render `ledger` into downloadable bytes.
    pub fn export(&self, ledger: &Ledger, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
        export(ledger, format)
    }

    /// Create an account. Admin only; the credential store itself performs
    /// no authorization check.
    pub fn add_user(&self, account: UserAccount) -> Result<(), AppError> {
        self.require_admin()?;
        self.credential_store.add(account)?;
        Ok(())
    }

    /// Delete an account by username. Admin only.
    pub fn remove_user(&self, username: &str) -> Result<bool, AppError> {
        self.require_admin()?;
        Ok(self.credential_store.remove(username)?)
    }

    fn require_admin(&self) -> Result<&Session, AppError> {
        let session = self.session.as_ref().ok_or(AppError::NotLoggedIn)?;
        if !session.is_admin() {
            return Err(DomainError::Unauthorized.into());
        }
        Ok(session)
    }
}
