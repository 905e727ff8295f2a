//! Sensitivity-analysis scenario types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three standard sensitivity scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Benefits come in above the estimate.
    Optimistic,
    /// The base estimate, unadjusted.
    Likely,
    /// Benefits come in below the estimate.
    Pessimistic,
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScenarioKind::Optimistic => "Optimistic",
            ScenarioKind::Likely => "Likely",
            ScenarioKind::Pessimistic => "Pessimistic",
        };
        write!(f, "{name}")
    }
}

/// A named scenario: a multiplicative adjustment applied to the annual
/// benefit before the indicators are recomputed.
///
/// The adjustment is a signed fraction: `+0.15` raises the benefit by
/// 15%, `-0.15` lowers it. The adjusted benefit is
/// `base * (1 + adjustment)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Which scenario this is.
    pub kind: ScenarioKind,
    /// Signed fractional adjustment to the annual benefit.
    pub benefit_adjustment: f64,
}

impl Scenario {
    /// Creates a scenario.
    #[must_use]
    pub fn new(kind: ScenarioKind, benefit_adjustment: f64) -> Self {
        Self {
            kind,
            benefit_adjustment,
        }
    }

    /// The standard optimistic/likely/pessimistic triple.
    ///
    /// `optimistic_pct` and `pessimistic_pct` are non-negative
    /// magnitudes (e.g. `0.15` for ±15%); the pessimistic adjustment is
    /// applied with a negative sign and the likely scenario is always
    /// unadjusted.
    #[must_use]
    pub fn standard_set(optimistic_pct: f64, pessimistic_pct: f64) -> [Scenario; 3] {
        [
            Scenario::new(ScenarioKind::Optimistic, optimistic_pct),
            Scenario::new(ScenarioKind::Likely, 0.0),
            Scenario::new(ScenarioKind::Pessimistic, -pessimistic_pct),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_set_signs() {
        let set = Scenario::standard_set(0.15, 0.15);
        assert_eq!(set[0].benefit_adjustment, 0.15);
        assert_eq!(set[1].benefit_adjustment, 0.0);
        assert_eq!(set[2].benefit_adjustment, -0.15);
        assert_eq!(set[1].kind, ScenarioKind::Likely);
    }

    #[test]
    fn test_display() {
        assert_eq!(ScenarioKind::Pessimistic.to_string(), "Pessimistic");
    }
}
