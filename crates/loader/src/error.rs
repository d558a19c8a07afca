//! Catalog load and configuration errors.

use shopfront_catalog::DomainError;
use thiserror::Error;

/// Why a catalog load failed.
///
/// The `Display` text is what ends up in the user-facing alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),

    #[error("catalog request failed with status {status}")]
    Status { status: u16 },

    #[error("catalog is not a JSON product list: {0}")]
    Parse(String),

    #[error("failed to read catalog file {path}: {message}")]
    Io { path: String, message: String },

    #[error("invalid catalog source {source_ref:?}: {message}")]
    InvalidSource { source_ref: String, message: String },
}

impl LoadError {
    /// Message shown in the blocking notification.
    pub fn alert_message(&self) -> String {
        format!("something went wrong {self}")
    }
}

/// Settings could not be loaded or validated.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse settings file: {0}")]
    Parse(String),

    #[error("invalid filter tags: {0}")]
    Tags(#[from] DomainError),
}
