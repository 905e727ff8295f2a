//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration `x_{n+1} = x_n - f(x_n) / f'(x_n)`, which has
/// quadratic convergence near the root but requires the derivative and
/// may diverge from a poor starting point.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Errors
///
/// [`MathError::DivisionByZero`] if the derivative vanishes at an
/// iterate, [`MathError::ConvergenceFailed`] if the iteration cap is
/// reached first.
///
/// # Example
///
/// ```rust
/// use appraise_math::solvers::{newton_raphson, SolverConfig};
///
/// // Rate at which 1000 grows to 1210 over two periods: (1+r)^2 = 1.21
/// let f = |r: f64| (1.0 + r) * (1.0 + r) - 1.21;
/// let df = |r: f64| 2.0 * (1.0 + r);
///
/// let result = newton_raphson(f, df, 0.05, &SolverConfig::default()).unwrap();
/// assert!((result.root - 0.10).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);

        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x);
        if dfx.abs() < 1e-15 {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        let step = fx / dfx;
        x -= step;

        if step.abs() < config.tolerance {
            let final_fx = f(x);
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: final_fx,
            });
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
    ))
}

/// Newton-Raphson with a central finite-difference derivative.
///
/// Used when the NPV polynomial's derivative is not worth writing out;
/// convergence drops to roughly superlinear but the call signature
/// needs only the function itself.
pub fn newton_raphson_numerical<F>(
    f: F,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let h = 1e-8; // Step size for numerical differentiation

    let df = |x: f64| {
        let f1 = f(x + h);
        let f2 = f(x - h);
        (f1 - f2) / (2.0 * h)
    };

    newton_raphson(&f, df, initial_guess, config)
}
