//! Store error types.

use thiserror::Error;

/// Store operation result type.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from parameter persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the parameter file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The parameter file is not valid TOML for this schema.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Serializing the parameters to TOML failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
