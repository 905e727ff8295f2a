//! Weighted multi-criteria scoring engine.
//!
//! Compares named alternatives by the weighted-sum method: each
//! alternative is rated 1-10 per criterion, the ratings are multiplied
//! by the criterion weights, and the totals are ranked. Scoring is
//! withheld entirely when the weights fail validation or any rated
//! criterion is missing; partial scores are never produced.

use serde::{Deserialize, Serialize};

use appraise_core::{Alternative, CoreError, CriteriaWeights, Criterion};

use crate::error::{AnalyticsError, AnalyticsResult};

/// The weighted score of one alternative, with the per-criterion
/// contributions that make it up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    /// Name of the alternative.
    pub name: String,
    /// Weighted total on the 1-10 scale.
    pub total: f64,
    /// Per-criterion contribution (weight times rating), in canonical
    /// criterion order.
    pub contributions: Vec<(Criterion, f64)>,
}

/// The outcome of ranking a set of alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Ranking {
    /// One alternative scored strictly highest.
    Winner {
        /// Name of the highest-scoring alternative.
        name: String,
        /// Lead over the runner-up (zero when there is no runner-up).
        margin: f64,
    },
    /// Two or more alternatives share the exact top score.
    Tie {
        /// Names of the tied alternatives, in input order.
        names: Vec<String>,
    },
}

/// Score cards for every alternative plus the ranking verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringOutcome {
    /// One card per alternative, in input order.
    pub cards: Vec<ScoreCard>,
    /// The verdict.
    pub ranking: Ranking,
}

/// Computes the weighted score of one alternative.
///
/// Every weighted criterion must carry a rating; the card records each
/// criterion's contribution alongside the total.
///
/// # Errors
///
/// Fails when the weights are invalid, a rating is off the 1-10 scale,
/// or a weighted criterion has no rating.
pub fn score(alternative: &Alternative, weights: &CriteriaWeights) -> AnalyticsResult<ScoreCard> {
    weights.validate()?;
    alternative.validate()?;

    let mut total = 0.0;
    let mut contributions = Vec::new();
    for (criterion, weight) in weights.iter() {
        let rating = alternative
            .rating(criterion)
            .ok_or(CoreError::MissingRating { criterion })?;
        let contribution = weight * f64::from(rating);
        total += contribution;
        contributions.push((criterion, contribution));
    }

    Ok(ScoreCard {
        name: alternative.name.clone(),
        total,
        contributions,
    })
}

/// Scores every alternative and determines the ranking.
///
/// A winner needs a strictly higher total than every other
/// alternative; exact equality at the top is reported as a
/// [`Ranking::Tie`] rather than broken arbitrarily.
///
/// # Errors
///
/// Fails on an empty alternative list or when any single score fails.
pub fn rank(
    alternatives: &[Alternative],
    weights: &CriteriaWeights,
) -> AnalyticsResult<ScoringOutcome> {
    if alternatives.is_empty() {
        return Err(AnalyticsError::InvalidInput(
            "at least one alternative is required".to_string(),
        ));
    }

    let cards: Vec<ScoreCard> = alternatives
        .iter()
        .map(|alt| score(alt, weights))
        .collect::<AnalyticsResult<_>>()?;

    let top = cards
        .iter()
        .map(|c| c.total)
        .fold(f64::NEG_INFINITY, f64::max);
    let leaders: Vec<&ScoreCard> = cards.iter().filter(|c| c.total == top).collect();

    let ranking = if leaders.len() > 1 {
        Ranking::Tie {
            names: leaders.iter().map(|c| c.name.clone()).collect(),
        }
    } else {
        let runner_up = cards
            .iter()
            .map(|c| c.total)
            .filter(|&t| t < top)
            .fold(f64::NEG_INFINITY, f64::max);
        Ranking::Winner {
            name: leaders[0].name.clone(),
            margin: if runner_up.is_finite() {
                top - runner_up
            } else {
                0.0
            },
        }
    };

    Ok(ScoringOutcome { cards, ranking })
}
