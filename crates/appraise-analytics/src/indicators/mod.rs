//! Cash-flow indicator engine.
//!
//! The six standard appraisal indicators over an initial outlay and a
//! sequence of per-period net flows:
//!
//! - [`npv`]: net present value
//! - [`equivalent_annual_value`]: NPV spread into a uniform annuity
//! - [`irr`]: internal rate of return (root of the NPV polynomial)
//! - [`benefit_cost_ratio`]: discounted benefit over discounted cost
//! - [`simple_payback`] / [`discounted_payback`]: periods to recover
//!   the outlay
//!
//! [`evaluate`] is the validated entry point that computes all of them
//! from a [`ProjectParameters`] snapshot.
//!
//! # Edge-case policy
//!
//! | Condition | Behavior |
//! |---|---|
//! | rate = 0 in equivalent annual value | linear division, no compounding |
//! | discounted-cost sum = 0 in B/C | ratio = 0 (sentinel) |
//! | zero flow at the crossing period in payback | integer period, no interpolation |
//! | cumulative never reaches outlay | payback = `None` |
//! | fewer than 2 net flows for IRR | IRR = `None` |

mod payback;

pub use payback::{discounted_payback, simple_payback};

use log::debug;
use serde::{Deserialize, Serialize};

use appraise_core::{CashFlowSeries, ProjectParameters};
use appraise_math::rates::capital_recovery_factor;
use appraise_math::solvers::{newton_with_fallback, SolverConfig};

use crate::error::AnalyticsResult;

/// Net present value of an outlay followed by per-period net flows.
///
/// `NPV = -outlay + sum(flows[t-1] / (1+rate)^t)` for `t = 1..=n`.
///
/// Negative flows are allowed (net costs exceeding benefits in a
/// period). The rate must be above -1; snapshots are validated to
/// `[0, 1]` upstream.
///
/// # Example
///
/// ```rust
/// use appraise_analytics::indicators::npv;
///
/// let value = npv(1750.0, &[600.0; 8], 0.10);
/// assert!((value - 1450.96).abs() < 0.01);
/// ```
#[must_use]
pub fn npv(initial_outlay: f64, net_flows: &[f64], rate: f64) -> f64 {
    let mut value = -initial_outlay;
    for (i, flow) in net_flows.iter().enumerate() {
        value += flow / (1.0 + rate).powi(i as i32 + 1);
    }
    value
}

/// Derivative of [`npv`] with respect to the rate.
///
/// Used by the IRR solver for Newton steps.
fn npv_derivative(net_flows: &[f64], rate: f64) -> f64 {
    let mut d = 0.0;
    for (i, flow) in net_flows.iter().enumerate() {
        let t = i as i32 + 1;
        d -= f64::from(t) * flow / (1.0 + rate).powi(t + 1);
    }
    d
}

/// Equivalent annual value: the NPV expressed as a uniform annual
/// amount over `periods` periods.
///
/// `EAV = NPV * rate(1+rate)^n / ((1+rate)^n - 1)`; at `rate = 0` the
/// capital-recovery factor degenerates to `1/n` and the conversion is a
/// straight division.
///
/// # Errors
///
/// Rejects `periods = 0` (the annuity is undefined over no periods).
pub fn equivalent_annual_value(npv: f64, rate: f64, periods: u32) -> AnalyticsResult<f64> {
    Ok(npv * capital_recovery_factor(rate, periods)?)
}

/// Internal rate of return: the rate at which the NPV of the series is
/// zero.
///
/// Returns `None` when no real economic rate exists:
/// - fewer than two net-flow entries (a single-value series admits no
///   rate),
/// - no sign change over the search range (all-positive or all-negative
///   flows),
/// - the solver fails to converge within its iteration cap.
///
/// Solver failures never propagate; "no IRR" is an explicit value.
///
/// # Example
///
/// ```rust
/// use appraise_analytics::indicators::{irr, npv};
/// use appraise_math::solvers::SolverConfig;
///
/// let rate = irr(1750.0, &[600.0; 8], &SolverConfig::default()).unwrap();
/// assert!(npv(1750.0, &[600.0; 8], rate).abs() < 1e-6);
/// ```
#[must_use]
pub fn irr(initial_outlay: f64, net_flows: &[f64], config: &SolverConfig) -> Option<f64> {
    if net_flows.len() < 2 {
        return None;
    }

    let f = |r: f64| npv(initial_outlay, net_flows, r);
    let df = |r: f64| npv_derivative(net_flows, r);

    let bracket = find_bracket(&f)?;
    let guess = (bracket.0 + bracket.1) / 2.0;

    match newton_with_fallback(f, df, guess, Some(bracket), config) {
        Ok(result) => Some(result.root),
        Err(err) => {
            debug!("irr solver failed: {err}");
            None
        }
    }
}

/// Scans a fixed rate grid for a sign change in the NPV curve.
///
/// The grid runs from just above -100% out to 1000%, dense at the low
/// end where appraisal rates live. Returns the first bracketing pair,
/// or `None` when the curve never crosses zero.
fn find_bracket<F>(f: &F) -> Option<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    const GRID: [f64; 18] = [
        -0.95, -0.75, -0.5, -0.25, -0.1, 0.0, 0.05, 0.1, 0.2, 0.35, 0.5, 0.75, 1.0, 2.0, 3.0,
        5.0, 7.5, 10.0,
    ];

    let mut prev = GRID[0];
    let mut f_prev = f(prev);
    for &r in &GRID[1..] {
        let f_r = f(r);
        if f_prev == 0.0 {
            return Some((prev, r));
        }
        if f_prev * f_r < 0.0 {
            return Some((prev, r));
        }
        prev = r;
        f_prev = f_r;
    }
    None
}

/// Benefit/cost ratio for a constant per-period benefit and cost.
///
/// `B/C = sum(benefit/(1+rate)^t) / sum(cost/(1+rate)^t)` for
/// `t = 1..=periods`.
///
/// Returns `0.0` (documented "no ratio" sentinel, kept from the
/// original tool) when the discounted cost sum is exactly zero.
///
/// Note: because both series are flat, the discount sums cancel and the
/// ratio reduces analytically to `benefit / cost`, independent of rate
/// and lifetime. The original tool uses this constant-flow formula
/// rather than the true net-flow series; it is preserved here as a
/// known modeling simplification for compatibility.
#[must_use]
pub fn benefit_cost_ratio(benefit: f64, cost: f64, rate: f64, periods: u32) -> f64 {
    let mut pv_benefit = 0.0;
    let mut pv_cost = 0.0;
    for t in 1..=periods as i32 {
        let df = (1.0 + rate).powi(-t);
        pv_benefit += benefit * df;
        pv_cost += cost * df;
    }
    if pv_cost == 0.0 {
        return 0.0;
    }
    pv_benefit / pv_cost
}

/// The complete indicator record for one parameter snapshot.
///
/// Computed fresh on every parameter change; never mutated, only
/// replaced. `None` fields are the documented "undefined" outcomes,
/// distinct from any numeric sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResult {
    /// Net present value.
    pub npv: f64,
    /// Equivalent annual value.
    pub equivalent_annual_value: f64,
    /// Internal rate of return; `None` when the flow pattern admits no
    /// real root.
    pub irr: Option<f64>,
    /// Benefit/cost ratio (0.0 sentinel when the cost sum is zero).
    pub benefit_cost_ratio: f64,
    /// Simple payback in (possibly fractional) periods; `None` when
    /// the outlay is never recovered.
    pub simple_payback: Option<f64>,
    /// Discounted payback; `None` when never recovered.
    pub discounted_payback: Option<f64>,
}

impl IndicatorResult {
    /// Whether the project creates value (NPV strictly positive).
    #[must_use]
    pub fn viable(&self) -> bool {
        self.npv > 0.0
    }

    /// Whether the IRR clears a hurdle rate; `None` when the IRR is
    /// undefined.
    #[must_use]
    pub fn meets_hurdle(&self, hurdle_rate: f64) -> Option<bool> {
        self.irr.map(|r| r > hurdle_rate)
    }
}

/// Computes the full indicator record for a parameter snapshot.
///
/// This is the single validated entry point: the snapshot and its
/// derived cash-flow series are checked first, and the indicator
/// functions then run over the accepted domain.
///
/// # Errors
///
/// [`AnalyticsError::InvalidConfiguration`](crate::AnalyticsError) when
/// boundary validation fails; never for the documented "undefined"
/// outcomes.
pub fn evaluate(params: &ProjectParameters) -> AnalyticsResult<IndicatorResult> {
    params.validate()?;
    let series = CashFlowSeries::from(params);
    series.validate()?;

    let outlay = series.initial_outlay();
    let flows = series.flows();
    let rate = params.discount_rate;

    let npv_value = npv(outlay, flows, rate);
    Ok(IndicatorResult {
        npv: npv_value,
        equivalent_annual_value: equivalent_annual_value(
            npv_value,
            rate,
            params.lifetime_years,
        )?,
        irr: irr(outlay, flows, &SolverConfig::default()),
        benefit_cost_ratio: benefit_cost_ratio(
            params.annual_benefit,
            params.annual_upkeep,
            rate,
            params.lifetime_years,
        ),
        simple_payback: simple_payback(outlay, flows),
        discounted_payback: discounted_payback(outlay, flows, rate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn base_params() -> ProjectParameters {
        ProjectParameters::new(750.0, 600.0, 400.0, 8, 700.0, 100.0, 0.10)
    }

    #[test]
    fn test_npv_reference_project() {
        // 1750 outlay, 600/year for 8 years at 10%
        let value = npv(1750.0, &[600.0; 8], 0.10);
        assert_relative_eq!(value, 1450.9557, epsilon = 1e-3);
    }

    #[test]
    fn test_npv_zero_rate_is_plain_sum() {
        let value = npv(1750.0, &[600.0; 8], 0.0);
        assert_relative_eq!(value, 8.0 * 600.0 - 1750.0, epsilon = 1e-9);
    }

    #[test]
    fn test_npv_allows_negative_flows() {
        let value = npv(100.0, &[-50.0, 200.0], 0.0);
        assert_relative_eq!(value, 50.0, epsilon = 1e-12);
    }

    #[test]
    fn test_eav_zero_rate_guard() {
        // rate = 0 -> straight division by the period count
        let eav = equivalent_annual_value(800.0, 0.0, 8).unwrap();
        assert_relative_eq!(eav, 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_eav_matches_annuity_identity() {
        // Discounting the EAV annuity back must reproduce the NPV
        let value = npv(1750.0, &[600.0; 8], 0.10);
        let eav = equivalent_annual_value(value, 0.10, 8).unwrap();
        let pv_of_eav = npv(0.0, &[eav; 8], 0.10);
        assert_relative_eq!(pv_of_eav, value, epsilon = 1e-9);
    }

    #[test]
    fn test_eav_rejects_zero_periods() {
        assert!(equivalent_annual_value(800.0, 0.10, 0).is_err());
    }

    #[test]
    fn test_irr_reference_project() {
        let rate = irr(1750.0, &[600.0; 8], &SolverConfig::default()).unwrap();
        // NPV at the IRR must vanish; rate lands a touch above 30%
        assert!(npv(1750.0, &[600.0; 8], rate).abs() < 1e-6);
        assert!(rate > 0.29 && rate < 0.31);
    }

    #[test]
    fn test_irr_undefined_for_short_series() {
        assert_eq!(irr(1750.0, &[600.0], &SolverConfig::default()), None);
        assert_eq!(irr(1750.0, &[], &SolverConfig::default()), None);
    }

    #[test]
    fn test_irr_undefined_without_sign_change() {
        // Zero outlay and all-positive flows: NPV is positive at every
        // rate, no economic rate exists
        assert_eq!(irr(0.0, &[100.0, 100.0], &SolverConfig::default()), None);
        // All-negative flows against a positive outlay likewise
        assert_eq!(
            irr(1000.0, &[-50.0, -50.0], &SolverConfig::default()),
            None
        );
    }

    #[test]
    fn test_bc_ratio_flat_series_identity() {
        // Flat benefit and cost: discount sums cancel, ratio is exactly
        // benefit/cost at any rate and lifetime
        let ratio = benefit_cost_ratio(700.0, 100.0, 0.10, 8);
        assert_relative_eq!(ratio, 7.0, epsilon = 1e-9);

        let ratio_other = benefit_cost_ratio(700.0, 100.0, 0.25, 3);
        assert_relative_eq!(ratio, ratio_other, epsilon = 1e-9);
    }

    #[test]
    fn test_bc_ratio_zero_cost_sentinel() {
        assert_eq!(benefit_cost_ratio(700.0, 0.0, 0.10, 8), 0.0);
    }

    #[test]
    fn test_evaluate_reference_project() {
        let result = evaluate(&base_params()).unwrap();

        assert!(result.viable());
        assert_relative_eq!(result.npv, 1450.9557, epsilon = 1e-3);
        assert_relative_eq!(result.benefit_cost_ratio, 7.0, epsilon = 1e-9);
        assert_eq!(result.meets_hurdle(0.10), Some(true));
        assert!(result.simple_payback.is_some());
        assert!(result.discounted_payback.is_some());
    }

    #[test]
    fn test_evaluate_rejects_invalid_snapshot() {
        let mut params = base_params();
        params.lifetime_years = 0;
        assert!(evaluate(&params).is_err());
    }

    #[test]
    fn test_evaluate_never_recovered_project() {
        // Upkeep above benefit: negative flows, nothing is undefined
        // except the paybacks and the IRR
        let params = ProjectParameters::new(750.0, 600.0, 400.0, 8, 50.0, 100.0, 0.10);
        let result = evaluate(&params).unwrap();

        assert!(!result.viable());
        assert_eq!(result.simple_payback, None);
        assert_eq!(result.discounted_payback, None);
        assert_eq!(result.irr, None);
    }
}
