//! Persistence error model.

use thiserror::Error;

/// Infrastructure-level persistence failure.
///
/// An absent backing file is NOT an error anywhere in this crate; both
/// stores recover from it locally (empty ledger / bootstrap account).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv codec failure: {0}")]
    Csv(#[from] csv::Error),
}
