//! Error types for block calculations and exports.

use thiserror::Error;

/// Rejection of a calculator operation.
///
/// Every variant is detected before any derived value is computed, so a
/// failed operation never leaves a partial result behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Invalid IPv4 address: '{0}'")]
    InvalidAddress(String),

    #[error("Prefix length must be between 0 and 32, got '{0}'")]
    InvalidPrefix(String),

    #[error("Target prefix must be between {base} and 32, got '{target}'")]
    InvalidTargetPrefix { base: u8, target: String },

    #[error("Nothing calculated yet. Calculate first.")]
    NotCalculated,
}

/// Failure while handing output to an [`ExportTarget`](crate::output::ExportTarget).
#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
