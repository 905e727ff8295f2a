//! Payback-period indicators.
//!
//! Both variants walk the cumulative flow until it reaches the initial
//! outlay. The crossing period is interpolated linearly, giving a
//! fractional period count; if the cumulative sum never reaches the
//! outlay within the horizon the payback is `None`.

/// Simple (undiscounted) payback period.
///
/// Periods are 1-based; a return of `2.9167` means the outlay is
/// recovered 92% of the way through period 3. An outlay of zero (or
/// below) pays back immediately at `0.0`.
///
/// # Example
///
/// ```rust
/// use appraise_analytics::indicators::simple_payback;
///
/// let periods = simple_payback(1750.0, &[600.0; 8]).unwrap();
/// assert!((periods - 2.9167).abs() < 1e-3);
/// ```
#[must_use]
pub fn simple_payback(initial_outlay: f64, net_flows: &[f64]) -> Option<f64> {
    cumulative_crossing(initial_outlay, net_flows.iter().copied())
}

/// Discounted payback period.
///
/// Same walk as [`simple_payback`], but each flow is discounted to
/// present value first. Always at least as long as the simple payback
/// for a positive rate.
#[must_use]
pub fn discounted_payback(initial_outlay: f64, net_flows: &[f64], rate: f64) -> Option<f64> {
    cumulative_crossing(
        initial_outlay,
        net_flows
            .iter()
            .enumerate()
            .map(|(i, flow)| flow / (1.0 + rate).powi(i as i32 + 1)),
    )
}

/// Walks the cumulative sum of `flows` and locates where it crosses
/// `target`, interpolating within the crossing period.
fn cumulative_crossing<I>(target: f64, flows: I) -> Option<f64>
where
    I: Iterator<Item = f64>,
{
    if target <= 0.0 {
        return Some(0.0);
    }
    let mut cumulative = 0.0;
    for (i, flow) in flows.enumerate() {
        let previous = cumulative;
        cumulative += flow;
        if cumulative >= target {
            if flow <= 0.0 {
                // Cannot interpolate within a flat or negative period
                return Some((i + 1) as f64);
            }
            return Some(i as f64 + (target - previous) / flow);
        }
    }
    None
}
