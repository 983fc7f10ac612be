//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, authorization). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more fields failed validation. Carries every violated field
    /// name so callers can report them all at once.
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// A requested resource was not found (domain-level).
    #[error("not found")]
    NotFound,

    /// Authorization failure at the domain boundary.
    #[error("unauthorized")]
    Unauthorized,
}

impl DomainError {
    pub fn validation<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Validation(fields.into_iter().map(Into::into).collect())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Violated field names, empty for non-validation errors.
    pub fn fields(&self) -> &[String] {
        match self {
            Self::Validation(fields) => fields,
            _ => &[],
        }
    }
}
