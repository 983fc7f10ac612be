//! `sealtrack-store` — CSV-backed persistence for the ledger and the
//! credential table.
//!
//! Both stores are stateless request/response services over one file each:
//! every read loads the whole file, every mutation rewrites it in full via a
//! temp-file-then-rename replace. There is no locking; a single interactive
//! writer process is assumed (concurrent writers race, last writer wins).

pub mod credentials;
pub mod error;
pub mod ledger;

pub use credentials::{CredentialError, CredentialStore};
pub use error::StoreError;
pub use ledger::{AppendError, LedgerStore};
