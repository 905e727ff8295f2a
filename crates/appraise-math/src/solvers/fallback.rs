//! Newton-Raphson with bisection fallback.

use log::debug;

use crate::error::MathResult;
use crate::solvers::{bisection, newton_raphson, SolverConfig, SolverResult};

/// Newton-Raphson with a bisection fallback.
///
/// Attempts Newton-Raphson from `initial_guess` first. If the iteration
/// diverges, hits a flat derivative, or lands outside the supplied
/// bounds, the solver falls back to bisection over `bounds`. With a
/// valid bracket this combination keeps Newton's speed on well-behaved
/// NPV polynomials while remaining robust on awkward ones.
///
/// Without `bounds` there is nothing to fall back to and the Newton
/// error is returned as-is.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for Newton-Raphson
/// * `bounds` - Optional bracketing interval for the fallback
/// * `config` - Solver configuration
///
/// # Errors
///
/// Whatever the fallback (or, without bounds, Newton itself) reports:
/// an invalid bracket or convergence failure. Callers computing an IRR
/// treat any error as "no rate exists".
pub fn newton_with_fallback<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    bounds: Option<(f64, f64)>,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    match newton_raphson(&f, &df, initial_guess, config) {
        Ok(result) => {
            // A Newton root outside the bracket is a sign the iteration
            // wandered onto a spurious branch; re-solve inside it.
            if let Some((lo, hi)) = bounds {
                if result.root < lo || result.root > hi {
                    debug!(
                        "newton root {} outside [{}, {}], falling back to bisection",
                        result.root, lo, hi
                    );
                    return bisection(f, lo, hi, config);
                }
            }
            Ok(result)
        }
        Err(err) => match bounds {
            Some((lo, hi)) => {
                debug!("newton failed ({err}), falling back to bisection");
                bisection(f, lo, hi, config)
            }
            None => Err(err),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_newton_path() {
        // Well-behaved NPV polynomial: Newton should succeed directly
        let f = |r: f64| -100.0 + 60.0 / (1.0 + r) + 60.0 / (1.0 + r).powi(2);
        let df = |r: f64| {
            -60.0 / (1.0 + r).powi(2) - 120.0 / (1.0 + r).powi(3)
        };

        let result =
            newton_with_fallback(f, df, 0.10, Some((0.0, 1.0)), &SolverConfig::default()).unwrap();

        assert!(f(result.root).abs() < 1e-9);
    }

    #[test]
    fn test_fallback_on_flat_derivative() {
        // Derivative is zero at the guess; bisection must take over
        let f = |x: f64| x * x * x - 8.0;
        let df = |x: f64| 3.0 * x * x;

        let result =
            newton_with_fallback(f, df, 0.0, Some((0.0, 4.0)), &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_no_bounds_propagates_error() {
        let f = |x: f64| x * x * x - 8.0;
        let df = |x: f64| 3.0 * x * x;

        let result =
            newton_with_fallback(f, df, 0.0, None, &SolverConfig::default());

        assert!(result.is_err());
    }

    #[test]
    fn test_fallback_when_newton_escapes_bracket() {
        // A shallow tail sends Newton far from the bracketed root
        let f = |x: f64| x.tanh() - 0.5;
        let df = |x: f64| 1.0 - x.tanh().powi(2);

        let result =
            newton_with_fallback(f, df, 20.0, Some((0.0, 1.0)), &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 0.5_f64.atanh(), epsilon = 1e-8);
    }
}
