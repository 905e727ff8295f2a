//! Bisection root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Bisection root-finding algorithm.
///
/// Repeatedly halves a bracketing interval. Linear convergence, but
/// guaranteed to make progress whenever the bracket is valid, which is
/// why it backs up Newton-Raphson in
/// [`newton_with_fallback`](crate::solvers::newton_with_fallback).
///
/// Requires: `f(a) * f(b) < 0` (opposite signs at endpoints).
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `a` - Lower bound of the bracket
/// * `b` - Upper bound of the bracket
/// * `config` - Solver configuration
///
/// # Errors
///
/// [`MathError::InvalidBracket`] when the endpoints do not straddle a
/// sign change, [`MathError::ConvergenceFailed`] at the iteration cap.
///
/// # Example
///
/// ```rust
/// use appraise_math::solvers::{bisection, SolverConfig};
///
/// // NPV of a two-period project crosses zero between 0% and 100%
/// let f = |r: f64| -100.0 + 60.0 / (1.0 + r) + 60.0 / (1.0 + r).powi(2);
///
/// let result = bisection(f, 0.0, 1.0, &SolverConfig::default()).unwrap();
/// assert!(f(result.root).abs() < 1e-9);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut lo = a;
    let mut hi = b;
    let mut f_lo = f(lo);
    let f_hi = f(hi);

    if f_lo == 0.0 {
        return Ok(SolverResult {
            root: lo,
            iterations: 0,
            residual: 0.0,
        });
    }
    if f_hi == 0.0 {
        return Ok(SolverResult {
            root: hi,
            iterations: 0,
            residual: 0.0,
        });
    }
    if f_lo * f_hi > 0.0 {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    let mut mid = (lo + hi) / 2.0;
    for iteration in 0..config.max_iterations {
        mid = (lo + hi) / 2.0;
        let f_mid = f(mid);

        if f_mid.abs() < config.tolerance || (hi - lo).abs() / 2.0 < config.tolerance {
            return Ok(SolverResult {
                root: mid,
                iterations: iteration,
                residual: f_mid,
            });
        }

        if f_lo * f_mid < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(mid).abs(),
    ))
}
