//! # Appraise Math
//!
//! Time-value-of-money primitives and numerical solvers for the
//! Appraise investment-appraisal library.
//!
//! This crate provides:
//!
//! - **Rates**: Nominal-to-effective rate conversion, discount factors,
//!   present values, and the capital recovery factor
//! - **Solvers**: Root-finding algorithms (Newton-Raphson, bisection,
//!   Newton with bisection fallback) used to back out internal rates
//!   of return from cash-flow series
//!
//! ## Design Philosophy
//!
//! - **Bounded Everything**: Every solver carries an iteration cap and a
//!   convergence tolerance and fails closed rather than looping
//! - **Numerical Stability**: Degenerate rates (`rate <= -1`) are rejected
//!   at the boundary instead of producing infinities downstream
//! - **Pure Functions**: No shared state, no I/O; identical inputs always
//!   yield identical outputs

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod rates;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::rates::{
        capital_recovery_factor, discount_factor, effective_rate, present_value,
    };
    pub use crate::solvers::{
        bisection, newton_raphson, newton_raphson_numerical, newton_with_fallback, SolverConfig,
        SolverResult,
    };
}

pub use error::{MathError, MathResult};
