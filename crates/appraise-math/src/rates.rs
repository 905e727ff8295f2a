//! Interest-rate and discounting primitives.
//!
//! These are the building blocks every appraisal indicator rests on:
//! nominal-to-effective rate conversion, the single-period discount
//! factor, and the capital recovery factor that turns a present value
//! into a uniform annuity.
//!
//! Degenerate inputs (zero compounding periods, rates at or below -100%)
//! are rejected here rather than allowed to produce infinities in the
//! indicator layer.

use crate::error::{MathError, MathResult};

/// Converts a nominal annual rate to an effective annual rate.
///
/// Uses the standard compounding identity:
/// `effective = (1 + nominal/m)^m - 1`
///
/// where `m` is the number of compounding periods per year.
///
/// # Arguments
///
/// * `nominal` - Nominal annual rate as a decimal fraction (0.12 for 12%)
/// * `periods_per_year` - Compounding periods per year (12 for monthly)
///
/// # Errors
///
/// Returns [`MathError::InvalidInput`] if `periods_per_year` is zero or
/// `nominal` is below -1 (both are caller errors, not computable cases).
///
/// # Example
///
/// ```rust
/// use appraise_math::rates::effective_rate;
///
/// // 12% nominal compounded monthly -> 12.68% effective
/// let tea = effective_rate(0.12, 12).unwrap();
/// assert!((tea - 0.126825).abs() < 1e-6);
/// ```
pub fn effective_rate(nominal: f64, periods_per_year: u32) -> MathResult<f64> {
    if periods_per_year == 0 {
        return Err(MathError::invalid_input(
            "compounding periods per year must be at least 1",
        ));
    }
    if nominal < -1.0 {
        return Err(MathError::invalid_input(format!(
            "nominal rate {nominal} is below -100%"
        )));
    }
    let m = f64::from(periods_per_year);
    Ok((1.0 + nominal / m).powf(m) - 1.0)
}

/// Returns the discount factor `1 / (1 + rate)^period`.
///
/// # Errors
///
/// Returns [`MathError::InvalidInput`] if `rate <= -1`; the factor is
/// undefined (division by zero at -100%, sign-flipping below it) and the
/// condition must be caught by input validation, not silently computed.
pub fn discount_factor(rate: f64, period: u32) -> MathResult<f64> {
    if rate <= -1.0 {
        return Err(MathError::invalid_input(format!(
            "discount rate {rate} must be greater than -1"
        )));
    }
    Ok((1.0 + rate).powi(-(period as i32)))
}

/// Present value of `amount` received at `period` under `rate`.
///
/// # Errors
///
/// Same domain restriction as [`discount_factor`].
pub fn present_value(amount: f64, rate: f64, period: u32) -> MathResult<f64> {
    Ok(amount * discount_factor(rate, period)?)
}

/// Capital recovery factor: `rate * (1+rate)^n / ((1+rate)^n - 1)`.
///
/// Multiplying a present value by this factor spreads it into a uniform
/// annuity over `periods` periods. At `rate = 0` the annuity degenerates
/// to straight division and the factor is `1 / n`.
///
/// # Errors
///
/// Returns [`MathError::InvalidInput`] for zero periods or `rate <= -1`.
pub fn capital_recovery_factor(rate: f64, periods: u32) -> MathResult<f64> {
    if periods == 0 {
        return Err(MathError::invalid_input("periods must be at least 1"));
    }
    if rate <= -1.0 {
        return Err(MathError::invalid_input(format!(
            "rate {rate} must be greater than -1"
        )));
    }
    if rate == 0.0 {
        return Ok(1.0 / f64::from(periods));
    }
    let growth = (1.0 + rate).powi(periods as i32);
    Ok(rate * growth / (growth - 1.0))
}
