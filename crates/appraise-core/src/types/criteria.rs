//! Multi-criteria comparison types.
//!
//! The weighted-scoring method compares alternatives over a fixed set
//! of enumerated criteria. Weights must sum to one within
//! [`WEIGHT_SUM_TOLERANCE`]; a violation is an invalid configuration
//! and scoring is withheld rather than silently computed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Tolerance on the weight sum: |sum - 1| must not exceed this.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Decision criteria for comparing system alternatives.
///
/// Enumerated identifiers replace the original tool's loose
/// dictionary keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Criterion {
    /// Initial purchase cost (higher rating = cheaper).
    Cost,
    /// Capacity / delivery pressure.
    Capacity,
    /// Electrical power consumption (higher rating = consumes less).
    PowerConsumption,
    /// Expected durability.
    Durability,
    /// Maintenance burden (higher rating = lower burden).
    Maintenance,
}

impl Criterion {
    /// All criteria in canonical order.
    pub const ALL: [Criterion; 5] = [
        Criterion::Cost,
        Criterion::Capacity,
        Criterion::PowerConsumption,
        Criterion::Durability,
        Criterion::Maintenance,
    ];
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Criterion::Cost => "Cost",
            Criterion::Capacity => "Capacity",
            Criterion::PowerConsumption => "Power Consumption",
            Criterion::Durability => "Durability",
            Criterion::Maintenance => "Maintenance",
        };
        write!(f, "{name}")
    }
}

/// A named option in the multi-criteria comparison, rated 1-10 per
/// criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    /// Display name of the option.
    pub name: String,
    /// Rating per criterion, each in 1..=10.
    pub ratings: BTreeMap<Criterion, u8>,
}

impl Alternative {
    /// Creates an alternative with no ratings yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ratings: BTreeMap::new(),
        }
    }

    /// Adds a rating for one criterion.
    #[must_use]
    pub fn with_rating(mut self, criterion: Criterion, rating: u8) -> Self {
        self.ratings.insert(criterion, rating);
        self
    }

    /// Returns the rating for a criterion, if present.
    #[must_use]
    pub fn rating(&self, criterion: Criterion) -> Option<u8> {
        self.ratings.get(&criterion).copied()
    }

    /// Validates that every rating sits on the 1-10 scale.
    pub fn validate(&self) -> CoreResult<()> {
        for (&criterion, &rating) in &self.ratings {
            if !(1..=10).contains(&rating) {
                return Err(CoreError::RatingOutOfRange {
                    criterion,
                    value: rating,
                });
            }
        }
        Ok(())
    }
}

/// Criterion weights for the weighted-scoring method.
///
/// # Example
///
/// ```rust
/// use appraise_core::types::{CriteriaWeights, Criterion};
///
/// let weights = CriteriaWeights::new()
///     .with_weight(Criterion::Cost, 0.30)
///     .with_weight(Criterion::Capacity, 0.25)
///     .with_weight(Criterion::PowerConsumption, 0.20)
///     .with_weight(Criterion::Durability, 0.15)
///     .with_weight(Criterion::Maintenance, 0.10);
/// weights.validate().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CriteriaWeights {
    /// Weight per criterion, each in [0, 1].
    weights: BTreeMap<Criterion, f64>,
}

impl CriteriaWeights {
    /// Creates an empty weight set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The original tool's default weighting.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_weight(Criterion::Cost, 0.30)
            .with_weight(Criterion::Capacity, 0.25)
            .with_weight(Criterion::PowerConsumption, 0.20)
            .with_weight(Criterion::Durability, 0.15)
            .with_weight(Criterion::Maintenance, 0.10)
    }

    /// Sets the weight for one criterion.
    #[must_use]
    pub fn with_weight(mut self, criterion: Criterion, weight: f64) -> Self {
        self.weights.insert(criterion, weight);
        self
    }

    /// Returns the weight for a criterion, if present.
    #[must_use]
    pub fn weight(&self, criterion: Criterion) -> Option<f64> {
        self.weights.get(&criterion).copied()
    }

    /// Iterates criteria and weights in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        self.weights.iter().map(|(&c, &w)| (c, w))
    }

    /// Sum of all weights.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Validates the weight set: each weight in [0, 1] and the sum
    /// within [`WEIGHT_SUM_TOLERANCE`] of 1.
    pub fn validate(&self) -> CoreResult<()> {
        for (&criterion, &weight) in &self.weights {
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(CoreError::WeightOutOfRange {
                    criterion,
                    value: weight,
                });
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(CoreError::WeightSumInvalid {
                sum,
                tolerance: WEIGHT_SUM_TOLERANCE,
            });
        }
        Ok(())
    }
}
