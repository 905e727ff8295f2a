//! CLI command implementations.

pub mod indicators;
pub mod params;
pub mod scenarios;
pub mod score;

// Re-export argument structs for convenience
pub use indicators::IndicatorsArgs;
pub use params::ParamsArgs;
pub use scenarios::ScenariosArgs;
pub use score::ScoreArgs;

use std::path::Path;

use appraise_store::ParameterStore;

use crate::error::{CliError, CliResult};

/// Loads the parameter store from a file, or the defaults when no file
/// is given.
pub fn load_store(path: Option<&Path>) -> CliResult<ParameterStore> {
    match path {
        Some(path) if path.exists() => Ok(ParameterStore::load(path)?),
        Some(_) | None => Ok(ParameterStore::new()),
    }
}

/// Validates a percentage argument (0-100).
pub fn validate_percent(value: f64) -> CliResult<f64> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(CliError::InvalidPercent(value));
    }
    Ok(value)
}
