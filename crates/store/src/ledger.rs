//! File-backed production ledger store.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use sealtrack_core::DomainError;
use sealtrack_ledger::{Ledger, ProductionRecord};

use crate::error::StoreError;

/// Column order of the persisted ledger file.
pub const LEDGER_HEADER: [&str; 8] = [
    "date",
    "company",
    "seal_count",
    "operator",
    "seal_type",
    "production_time_minutes",
    "downtime_minutes",
    "downtime_reason",
];

/// Failure while appending a record.
#[derive(Debug, Error)]
pub enum AppendError {
    /// The record violated a field invariant; nothing was persisted.
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// The record was valid but the rewrite failed; the previous file
    /// content is still intact.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// CSV-backed store for the production ledger.
///
/// Holds only the file path; every call re-reads or re-writes the file, so
/// the store itself carries no state between calls.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every persisted record, in file order.
    ///
    /// An absent file yields an empty ledger, never an error.
    pub fn load(&self) -> Result<Ledger, StoreError> {
        if !self.path.exists() {
            return Ok(Ledger::new());
        }
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for row in reader.deserialize::<ProductionRecord>() {
            records.push(row?);
        }
        Ok(Ledger::from_records(records))
    }

    /// Validate `record`, append it, and synchronously rewrite the file.
    ///
    /// A validation failure leaves both the file and its content untouched.
    pub fn append(&self, record: ProductionRecord) -> Result<(), AppendError> {
        record.validate()?;
        let mut ledger = self.load().map_err(StoreError::from)?;
        ledger.push(record);
        self.persist(&ledger)?;
        tracing::debug!(path = %self.path.display(), records = ledger.len(), "ledger rewritten");
        Ok(())
    }

    /// Rewrite the whole file from `ledger`.
    ///
    /// Writes to a temporary sibling first and renames it over the live
    /// file, so a failed write never truncates existing data.
    pub fn persist(&self, ledger: &Ledger) -> Result<(), StoreError> {
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
            writer.write_record(LEDGER_HEADER)?;
            for record in ledger {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Temp sibling used for atomic replaces. Appends `.tmp` to the full file
/// name, so `data.csv` writes through `data.csv.tmp` and cannot collide
/// with an unrelated sibling named `data.tmp`.
pub(crate) fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
