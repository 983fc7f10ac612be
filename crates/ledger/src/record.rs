//! Production record and the ordered ledger collection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use sealtrack_core::{DomainError, DomainResult};

/// One manufacturing event: a batch of seals produced (or downtime logged)
/// on a given date, by one operator, for one company.
///
/// # Invariants
/// - `company` is non-empty (after trimming).
/// - `seal_count`, `production_time_minutes`, `downtime_minutes` are never
///   negative, and the minute fields are finite.
/// - Records are append-only: never mutated or deleted once in a ledger.
///
/// Duplicate records are valid; there is no uniqueness constraint.
///
/// Field names double as the persisted CSV header (see `sealtrack-store`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub date: NaiveDate,
    pub company: String,
    pub seal_count: i64,
    pub operator: String,
    pub seal_type: String,
    pub production_time_minutes: f64,
    pub downtime_minutes: f64,
    pub downtime_reason: String,
}

impl ProductionRecord {
    /// Check the record invariants, collecting every violated field name.
    pub fn validate(&self) -> DomainResult<()> {
        let mut violated = Vec::new();

        if self.company.trim().is_empty() {
            violated.push("company");
        }
        if self.seal_count < 0 {
            violated.push("seal_count");
        }
        if self.production_time_minutes < 0.0 || !self.production_time_minutes.is_finite() {
            violated.push("production_time_minutes");
        }
        if self.downtime_minutes < 0.0 || !self.downtime_minutes.is_finite() {
            violated.push("downtime_minutes");
        }

        if violated.is_empty() {
            Ok(())
        } else {
            Err(DomainError::validation(violated))
        }
    }
}

/// The ordered sequence of all production records.
///
/// Insertion order is the only ordering; records are appended at the end and
/// never reordered. Maps 1:1 onto one persisted file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    records: Vec<ProductionRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ProductionRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ProductionRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductionRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&ProductionRecord> {
        self.records.last()
    }

    /// Append a record without re-validating it. Validation happens at the
    /// store boundary before anything reaches a ledger that gets persisted.
    pub fn push(&mut self, record: ProductionRecord) {
        self.records.push(record);
    }
}

impl IntoIterator for Ledger {
    type Item = ProductionRecord;
    type IntoIter = std::vec::IntoIter<ProductionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a ProductionRecord;
    type IntoIter = std::slice::Iter<'a, ProductionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
