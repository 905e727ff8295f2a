//! Unified error type for the analytics engines.

use thiserror::Error;

use appraise_core::CoreError;
use appraise_math::MathError;

/// Unified error type for all analytics operations.
///
/// Every variant is an *invalid configuration* detected before or
/// during setup. No-solution numeric outcomes (no IRR, payback never
/// reached) are not errors; they are `None` values in the results.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Boundary validation of a core value object failed.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] CoreError),

    /// A mathematical primitive rejected its input.
    #[error("math error: {0}")]
    Math(#[from] MathError),

    /// Invalid input to an engine entry point.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
