//! Cash-flow series type.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::ProjectParameters;

/// An initial outlay followed by an ordered sequence of per-period net
/// flows.
///
/// This is the uniform input of every indicator computation: the outlay
/// is the period-0 investment (stored as a non-negative magnitude) and
/// `flows[t-1]` is the net flow of period `t`. Flows may be negative in
/// any period.
///
/// # Example
///
/// ```rust
/// use appraise_core::types::CashFlowSeries;
///
/// let series = CashFlowSeries::uniform(1750.0, 600.0, 8);
/// assert_eq!(series.periods(), 8);
/// assert_eq!(series.initial_outlay(), 1750.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSeries {
    /// Period-0 investment, stored as a non-negative magnitude.
    initial_outlay: f64,
    /// Net flow per period, ordered from period 1.
    flows: Vec<f64>,
}

impl CashFlowSeries {
    /// Creates a series from an outlay and explicit per-period flows.
    #[must_use]
    pub fn new(initial_outlay: f64, flows: Vec<f64>) -> Self {
        Self {
            initial_outlay,
            flows,
        }
    }

    /// Creates a series with the same net flow repeated every period.
    ///
    /// This is the shape the appraisal engines consume for a constant
    /// benefit/upkeep project.
    #[must_use]
    pub fn uniform(initial_outlay: f64, flow: f64, periods: u32) -> Self {
        Self {
            initial_outlay,
            flows: vec![flow; periods as usize],
        }
    }

    /// The period-0 outlay magnitude.
    #[must_use]
    pub fn initial_outlay(&self) -> f64 {
        self.initial_outlay
    }

    /// The ordered per-period net flows (period 1 first).
    #[must_use]
    pub fn flows(&self) -> &[f64] {
        &self.flows
    }

    /// Number of flow periods.
    #[must_use]
    pub fn periods(&self) -> usize {
        self.flows.len()
    }

    /// Validates the series: non-negative finite outlay, at least one
    /// period, finite flows.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.initial_outlay.is_finite() || self.initial_outlay < 0.0 {
            return Err(CoreError::negative_amount(
                "initial outlay",
                self.initial_outlay,
            ));
        }
        if self.flows.is_empty() {
            return Err(CoreError::EmptyCashFlowSeries);
        }
        if let Some(bad) = self.flows.iter().find(|f| !f.is_finite()) {
            return Err(CoreError::negative_amount("net flow", *bad));
        }
        Ok(())
    }
}

impl From<&ProjectParameters> for CashFlowSeries {
    /// Builds the project's series: total outlay, then the net annual
    /// flow repeated over the lifetime.
    fn from(params: &ProjectParameters) -> Self {
        Self::uniform(
            params.total_outlay(),
            params.net_annual_flow(),
            params.lifetime_years,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_series() {
        let series = CashFlowSeries::uniform(1750.0, 600.0, 8);
        assert_eq!(series.periods(), 8);
        assert!(series.flows().iter().all(|&f| f == 600.0));
        assert!(series.validate().is_ok());
    }

    #[test]
    fn test_from_parameters() {
        let params = ProjectParameters::new(750.0, 600.0, 400.0, 8, 700.0, 100.0, 0.10);
        let series = CashFlowSeries::from(&params);
        assert_eq!(series.initial_outlay(), 1750.0);
        assert_eq!(series.flows(), &[600.0; 8]);
    }

    #[test]
    fn test_negative_flows_are_allowed() {
        // Net costs exceeding benefits in a period are legal input
        let series = CashFlowSeries::new(1000.0, vec![500.0, -200.0, 500.0]);
        assert!(series.validate().is_ok());
    }

    #[test]
    fn test_empty_series_is_invalid() {
        let series = CashFlowSeries::new(1000.0, vec![]);
        assert_eq!(series.validate(), Err(CoreError::EmptyCashFlowSeries));
    }

    #[test]
    fn test_negative_outlay_is_invalid() {
        let series = CashFlowSeries::new(-1.0, vec![500.0]);
        assert!(series.validate().is_err());
    }
}
