//! Equality/range filters over a ledger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::{Ledger, ProductionRecord};

/// A set of predicates over production records.
///
/// Every set predicate must match (logical AND). The empty filter is the
/// identity: it matches every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordFilter {
    pub operator: Option<String>,
    pub company: Option<String>,
    pub seal_type: Option<String>,
    /// Inclusive lower bound on the record date.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the record date.
    pub date_to: Option<NaiveDate>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn seal_type(mut self, seal_type: impl Into<String>) -> Self {
        self.seal_type = Some(seal_type.into());
        self
    }

    pub fn date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.operator.is_none()
            && self.company.is_none()
            && self.seal_type.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    pub fn matches(&self, record: &ProductionRecord) -> bool {
        if let Some(op) = &self.operator {
            if &record.operator != op {
                return false;
            }
        }
        if let Some(company) = &self.company {
            if &record.company != company {
                return false;
            }
        }
        if let Some(seal_type) = &self.seal_type {
            if &record.seal_type != seal_type {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if record.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if record.date > to {
                return false;
            }
        }
        true
    }

    /// Apply the filter, producing a new ledger. The input is never mutated;
    /// surviving records keep their insertion order.
    pub fn apply(&self, ledger: &Ledger) -> Ledger {
        Ledger::from_records(
            ledger
                .iter()
                .filter(|r| self.matches(r))
                .cloned()
                .collect(),
        )
    }
}
