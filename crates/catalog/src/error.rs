//! Domain error model.

use thiserror::Error;

/// Result type used across the catalog domain.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Storefront transitions themselves are total; this only covers values that
/// are validated on construction (configured filter tags, sort values).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A sort order string was not one of `""`, `"asc"`, `"desc"`.
    #[error("unknown sort order: {0:?}")]
    UnknownSortOrder(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
