//! Project parameter snapshot.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Immutable snapshot of the parameters describing a capital project.
///
/// The three outlay components follow the original domestic water-tank
/// use case (tank, pump, installation), but nothing downstream depends
/// on that reading; they are simply three non-negative amounts summed
/// into the total outlay.
///
/// Engines receive one snapshot per computation. There is no shared
/// mutable state: a parameter change in the store produces a fresh
/// snapshot, never an in-place edit.
///
/// # Example
///
/// ```rust
/// use appraise_core::types::ProjectParameters;
///
/// let params = ProjectParameters::new(750.0, 600.0, 400.0, 8, 700.0, 100.0, 0.10);
/// params.validate().unwrap();
/// assert_eq!(params.total_outlay(), 1750.0);
/// assert_eq!(params.net_annual_flow(), 600.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectParameters {
    /// Cost of the tank (first outlay component).
    pub tank_cost: f64,
    /// Cost of the pump (second outlay component).
    pub pump_cost: f64,
    /// Cost of piping and installation (third outlay component).
    pub installation_cost: f64,
    /// Project lifetime in whole periods (years). Must be >= 1.
    pub lifetime_years: u32,
    /// Estimated annual benefit (savings).
    pub annual_benefit: f64,
    /// Annual upkeep / maintenance cost.
    pub annual_upkeep: f64,
    /// Discount rate (TMAR) as a decimal fraction in [0, 1].
    pub discount_rate: f64,
    /// Whether the outlay is financed. Carried as data; no loan
    /// schedule is computed.
    pub financed: bool,
}

impl ProjectParameters {
    /// Creates a new parameter snapshot with financing disabled.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        tank_cost: f64,
        pump_cost: f64,
        installation_cost: f64,
        lifetime_years: u32,
        annual_benefit: f64,
        annual_upkeep: f64,
        discount_rate: f64,
    ) -> Self {
        Self {
            tank_cost,
            pump_cost,
            installation_cost,
            lifetime_years,
            annual_benefit,
            annual_upkeep,
            discount_rate,
            financed: false,
        }
    }

    /// Sets the financing flag.
    #[must_use]
    pub fn with_financing(mut self, financed: bool) -> Self {
        self.financed = financed;
        self
    }

    /// Replaces the discount rate, taking a percentage (0-100).
    #[must_use]
    pub fn with_rate_percent(mut self, percent: f64) -> Self {
        self.discount_rate = percent / 100.0;
        self
    }

    /// Replaces the annual benefit, leaving everything else unchanged.
    ///
    /// Used by the scenario engine to build adjusted snapshots.
    #[must_use]
    pub fn with_annual_benefit(mut self, annual_benefit: f64) -> Self {
        self.annual_benefit = annual_benefit;
        self
    }

    /// Replaces the discount rate (decimal fraction).
    ///
    /// Used by the rate sweep in the scenario engine.
    #[must_use]
    pub fn with_discount_rate(mut self, discount_rate: f64) -> Self {
        self.discount_rate = discount_rate;
        self
    }

    /// Total initial outlay: the sum of the three cost components.
    #[must_use]
    pub fn total_outlay(&self) -> f64 {
        self.tank_cost + self.pump_cost + self.installation_cost
    }

    /// Net per-period flow: annual benefit minus annual upkeep.
    ///
    /// May be negative; a project whose upkeep exceeds its benefit is
    /// valid input (it simply never pays back).
    #[must_use]
    pub fn net_annual_flow(&self) -> f64 {
        self.annual_benefit - self.annual_upkeep
    }

    /// Validates every boundary invariant.
    ///
    /// All validation happens here, before indicator functions run;
    /// once a snapshot passes, the engines are total over it apart from
    /// the documented "undefined" outcomes.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, value) in [
            ("tank cost", self.tank_cost),
            ("pump cost", self.pump_cost),
            ("installation cost", self.installation_cost),
            ("annual benefit", self.annual_benefit),
            ("annual upkeep", self.annual_upkeep),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::negative_amount(name, value));
            }
        }
        if self.lifetime_years < 1 {
            return Err(CoreError::InvalidLifetime {
                value: self.lifetime_years,
            });
        }
        if !self.discount_rate.is_finite() || !(0.0..=1.0).contains(&self.discount_rate) {
            return Err(CoreError::RateOutOfRange {
                value: self.discount_rate,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ProjectParameters {
        ProjectParameters::new(750.0, 600.0, 400.0, 8, 700.0, 100.0, 0.10)
    }

    #[test]
    fn test_derived_values() {
        let params = base();
        assert_eq!(params.total_outlay(), 1750.0);
        assert_eq!(params.net_annual_flow(), 600.0);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_cost() {
        let params = ProjectParameters {
            pump_cost: -600.0,
            ..base()
        };
        assert!(matches!(
            params.validate(),
            Err(CoreError::NegativeAmount {
                name: "pump cost",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_lifetime() {
        let params = ProjectParameters {
            lifetime_years: 0,
            ..base()
        };
        assert!(matches!(
            params.validate(),
            Err(CoreError::InvalidLifetime { value: 0 })
        ));
    }

    #[test]
    fn test_validate_rejects_rate_above_one() {
        // 110% as a decimal fraction is out of contract (store hands
        // over percent/100 with percent in 0..=100)
        let params = base().with_discount_rate(1.1);
        assert!(matches!(
            params.validate(),
            Err(CoreError::RateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_negative_net_flow_is_valid_input() {
        let params = ProjectParameters {
            annual_benefit: 50.0,
            annual_upkeep: 100.0,
            ..base()
        };
        assert!(params.validate().is_ok());
        assert_eq!(params.net_annual_flow(), -50.0);
    }

    #[test]
    fn test_rate_percent_helper() {
        let params = base().with_rate_percent(12.5);
        assert_eq!(params.discount_rate, 0.125);
    }

    #[test]
    fn test_serde_roundtrip() {
        let params = base().with_financing(true);
        let json = serde_json::to_string(&params).unwrap();
        let back: ProjectParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }
}
