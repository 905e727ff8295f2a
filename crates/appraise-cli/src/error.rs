//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum CliError {
    /// Invalid percentage argument.
    #[error("Invalid percentage: {0}. Must be between 0 and 100.")]
    InvalidPercent(f64),

    /// Malformed alternative specification.
    #[error("Invalid alternative '{0}'. Use NAME:cost,capacity,power,durability,maintenance with ratings 1-10.")]
    InvalidAlternative(String),

    /// Malformed weight list.
    #[error("Invalid weights '{0}'. Use five comma-separated fractions summing to 1.")]
    InvalidWeights(String),

    /// Unknown parameter key for `params set`.
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    /// Invalid value for a parameter key.
    #[error("Invalid value '{value}' for parameter {key}")]
    InvalidValue {
        /// The parameter being set.
        key: String,
        /// The rejected value.
        value: String,
    },

    /// Persistence error from the store.
    #[error("Store error: {0}")]
    Store(#[from] appraise_store::StoreError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
