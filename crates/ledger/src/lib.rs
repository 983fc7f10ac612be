//! `sealtrack-ledger` — production records, filtering and aggregation.
//!
//! Pure in-memory model of the production ledger: the record shape and its
//! validation rules, the ordered collection, equality/range filters, and
//! grouped aggregation. Persistence lives in `sealtrack-store`.

pub mod aggregate;
pub mod filter;
pub mod record;
pub mod seal_types;

pub use aggregate::{GroupKey, Measure, Reducer, aggregate, daily_average, top_n};
pub use filter::RecordFilter;
pub use record::{Ledger, ProductionRecord};
pub use seal_types::SealTypeSet;
