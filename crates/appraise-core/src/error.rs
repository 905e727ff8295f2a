//! Error types for the Appraise core.
//!
//! Every variant here represents an *invalid configuration* in the
//! spec's taxonomy: a condition detected before computation runs, so
//! callers can never mistake a sentinel number for a real result.

use thiserror::Error;

use crate::types::Criterion;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A monetary amount that must be non-negative was negative.
    #[error("{name} must be non-negative, got {value}")]
    NegativeAmount {
        /// Name of the offending parameter.
        name: &'static str,
        /// The value that was provided.
        value: f64,
    },

    /// Project lifetime outside the accepted range.
    #[error("project lifetime must be at least 1 period, got {value}")]
    InvalidLifetime {
        /// The value that was provided.
        value: u32,
    },

    /// Discount rate outside the accepted range.
    #[error("discount rate {value} is outside [0, 1]")]
    RateOutOfRange {
        /// The value that was provided (decimal fraction).
        value: f64,
    },

    /// A multi-criteria rating outside the 1-10 scale.
    #[error("rating for {criterion} must be between 1 and 10, got {value}")]
    RatingOutOfRange {
        /// The criterion the rating was given for.
        criterion: Criterion,
        /// The value that was provided.
        value: u8,
    },

    /// An alternative is missing a rating for a weighted criterion.
    #[error("alternative has no rating for criterion {criterion}")]
    MissingRating {
        /// The unrated criterion.
        criterion: Criterion,
    },

    /// A single criterion weight outside [0, 1].
    #[error("weight for {criterion} must be within [0, 1], got {value}")]
    WeightOutOfRange {
        /// The criterion the weight was given for.
        criterion: Criterion,
        /// The value that was provided.
        value: f64,
    },

    /// Criterion weights do not sum to 1 within tolerance.
    #[error("criteria weights must sum to 1.0 (±{tolerance}), got {sum:.4}")]
    WeightSumInvalid {
        /// The actual sum of the weights.
        sum: f64,
        /// The tolerance applied.
        tolerance: f64,
    },

    /// Empty cash-flow series where at least one period is required.
    #[error("cash-flow series must contain at least one period")]
    EmptyCashFlowSeries,
}

impl CoreError {
    /// Creates a negative-amount error.
    #[must_use]
    pub fn negative_amount(name: &'static str, value: f64) -> Self {
        Self::NegativeAmount { name, value }
    }
}
