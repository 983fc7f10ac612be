//! `sealtrack-app` — facade composing the stores for a presentation layer.
//!
//! A UI (form, CLI, whatever) talks only to [`App`]: log in, list/append
//! records, aggregate, export. The facade owns the explicit [`Session`]
//! value and the configured seal type set; the stores underneath stay
//! policy-free.

pub mod app;
pub mod config;
pub mod export;
pub mod telemetry;

pub use app::{App, AppError, NewRecord};
pub use config::seal_types_from_env;
pub use export::{ExportError, ExportFormat, export};

pub use sealtrack_auth::Session;
