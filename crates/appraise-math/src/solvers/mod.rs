//! Root-finding algorithms.
//!
//! This module provides the numerical solvers used to back out an
//! internal rate of return from a cash-flow series:
//!
//! - [`newton_raphson`]: Fast quadratic convergence when the derivative
//!   of the NPV polynomial is available
//! - [`bisection`]: Simple and reliable bracketing method
//! - [`newton_with_fallback`]: Newton-Raphson first, bisection fallback
//!   when the iterates diverge or leave the bracket
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Newton-Raphson | Fastest (quadratic) | May diverge | Derivative |
//! | Bisection | Slow (linear) | Guaranteed | Bracket |
//! | Newton + fallback | Fast | Guaranteed* | Initial guess |
//!
//! *When a valid bracket is provided.
//!
//! Every solver is capped by [`SolverConfig::max_iterations`] and fails
//! closed with [`MathError::ConvergenceFailed`](crate::MathError) rather
//! than looping indefinitely.
//!
//! # Example: IRR of a uniform cash-flow series
//!
//! ```rust
//! use appraise_math::solvers::{newton_with_fallback, SolverConfig};
//!
//! // Project: 1750 outlay, 600 saved per year for 8 years
//! let npv = |r: f64| {
//!     let mut v = -1750.0;
//!     for t in 1..=8 {
//!         v += 600.0 / (1.0 + r).powi(t);
//!     }
//!     v
//! };
//! let d_npv = |r: f64| {
//!     let mut dv = 0.0;
//!     for t in 1..=8 {
//!         dv -= (t as f64) * 600.0 / (1.0 + r).powi(t + 1);
//!     }
//!     dv
//! };
//!
//! let result =
//!     newton_with_fallback(npv, d_npv, 0.10, Some((0.0, 1.0)), &SolverConfig::default()).unwrap();
//! assert!(npv(result.root).abs() < 1e-8);
//! ```

mod bisect;
mod fallback;
mod newton;

pub use bisect::bisection;
pub use fallback::newton_with_fallback;
pub use newton::{newton_raphson, newton_raphson_numerical};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solver_config_builders() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert!((config.tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_all_solvers_agree_on_irr() {
        // NPV(r) for outlay 1750 and eight flows of 600; all solvers
        // must land on the same rate.
        let npv = |r: f64| {
            let mut v = -1750.0;
            for t in 1..=8 {
                v += 600.0 / (1.0 + r).powi(t);
            }
            v
        };
        let d_npv = |r: f64| {
            let mut dv = 0.0;
            for t in 1..=8 {
                dv -= f64::from(t) * 600.0 / (1.0 + r).powi(t + 1);
            }
            dv
        };
        let config = SolverConfig::default();

        let newton = newton_raphson(npv, d_npv, 0.10, &config).unwrap();
        let bisect = bisection(npv, 0.0, 1.0, &config).unwrap();
        let hybrid = newton_with_fallback(npv, d_npv, 0.10, Some((0.0, 1.0)), &config).unwrap();

        assert_relative_eq!(newton.root, bisect.root, epsilon = 1e-8);
        assert_relative_eq!(newton.root, hybrid.root, epsilon = 1e-8);
        // Rate sits just above 30% for this series
        assert!(newton.root > 0.29 && newton.root < 0.31);
    }
}
