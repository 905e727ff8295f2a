//! Scenario and sensitivity engine.
//!
//! Two analyses over a base parameter snapshot:
//!
//! - [`run_scenarios`]: re-evaluates the full indicator set under
//!   benefit adjustments (the optimistic/likely/pessimistic triple or
//!   any caller-supplied list)
//! - [`npv_rate_sweep`] and [`break_even_rate`]: NPV as a function of
//!   the discount rate, and the rate at which the sampled curve crosses
//!   zero
//!
//! Each analysis builds adjusted snapshots from the base; the base is
//! never mutated.

use serde::{Deserialize, Serialize};

use appraise_core::{ProjectParameters, Scenario};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::indicators::{evaluate, npv, IndicatorResult};

/// The indicator record for one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// The scenario that produced this record.
    pub scenario: Scenario,
    /// Annual benefit after the adjustment was applied.
    pub adjusted_benefit: f64,
    /// Full indicator set under the adjusted benefit.
    pub indicators: IndicatorResult,
    /// Whether the project still creates value under this scenario.
    pub viable: bool,
}

/// Re-evaluates the indicator set under each scenario's benefit
/// adjustment.
///
/// Every scenario gets a fresh snapshot with
/// `annual_benefit = base * (1 + adjustment)`; all other parameters are
/// carried over unchanged. Results come back in the order the
/// scenarios were given.
///
/// # Errors
///
/// Fails when the base snapshot is invalid, or when an adjustment
/// pushes the benefit negative (adjustments below -100%).
pub fn run_scenarios(
    params: &ProjectParameters,
    scenarios: &[Scenario],
) -> AnalyticsResult<Vec<ScenarioResult>> {
    params.validate()?;

    let mut results = Vec::with_capacity(scenarios.len());
    for scenario in scenarios {
        let adjusted_benefit = params.annual_benefit * (1.0 + scenario.benefit_adjustment);
        let adjusted = params.with_annual_benefit(adjusted_benefit);
        let indicators = evaluate(&adjusted)?;
        results.push(ScenarioResult {
            scenario: *scenario,
            adjusted_benefit,
            indicators,
            viable: indicators.viable(),
        });
    }
    Ok(results)
}

/// One sample of the NPV-vs-rate curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    /// Discount rate (decimal fraction).
    pub rate: f64,
    /// NPV of the project at that rate.
    pub npv: f64,
}

/// Samples the NPV of the project across a range of discount rates.
///
/// Produces `steps + 1` evenly spaced points from `start_rate` to
/// `end_rate` inclusive. The curve is monotonically decreasing in the
/// rate for a conventional project (outlay first, benefits after), so
/// its zero crossing is the break-even rate.
///
/// # Errors
///
/// Fails when the snapshot is invalid, when `steps` is zero, or when
/// the range is empty or touches -100%.
pub fn npv_rate_sweep(
    params: &ProjectParameters,
    start_rate: f64,
    end_rate: f64,
    steps: u32,
) -> AnalyticsResult<Vec<RatePoint>> {
    params.validate()?;
    if steps == 0 {
        return Err(AnalyticsError::InvalidInput(
            "rate sweep needs at least one step".to_string(),
        ));
    }
    if end_rate <= start_rate || start_rate <= -1.0 {
        return Err(AnalyticsError::InvalidInput(format!(
            "invalid rate range [{start_rate}, {end_rate}]"
        )));
    }

    let outlay = params.total_outlay();
    let flows = vec![params.net_annual_flow(); params.lifetime_years as usize];
    let step = (end_rate - start_rate) / f64::from(steps);

    let mut points = Vec::with_capacity(steps as usize + 1);
    for i in 0..=steps {
        let rate = start_rate + step * f64::from(i);
        points.push(RatePoint {
            rate,
            npv: npv(outlay, &flows, rate),
        });
    }
    Ok(points)
}

/// Locates the break-even discount rate on a sampled NPV curve.
///
/// Scans for the first adjacent pair of points whose NPVs straddle
/// zero and interpolates linearly between them. For the project's own
/// cash flows this agrees with the internal rate of return to within
/// the grid resolution. `None` when the sampled curve never crosses
/// zero.
#[must_use]
pub fn break_even_rate(points: &[RatePoint]) -> Option<f64> {
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a.npv == 0.0 {
            return Some(a.rate);
        }
        if a.npv * b.npv < 0.0 {
            let fraction = a.npv / (a.npv - b.npv);
            return Some(a.rate + fraction * (b.rate - a.rate));
        }
    }
    points.last().filter(|p| p.npv == 0.0).map(|p| p.rate)
}
