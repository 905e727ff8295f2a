//! # Appraise Analytics
//!
//! Calculation engines for the Appraise investment-appraisal library.
//!
//! This crate consolidates all computational logic:
//! - **Indicators**: NPV, equivalent annual value, IRR, benefit/cost
//!   ratio, simple and discounted payback
//! - **Scenarios**: optimistic/likely/pessimistic re-evaluation and the
//!   NPV-vs-rate sweep with break-even location
//! - **Scoring**: weighted multi-criteria comparison of alternatives
//!
//! ## Architecture
//!
//! `appraise-analytics` depends on `appraise-core` for the validated
//! value types and on `appraise-math` for discounting primitives and
//! root-finding; the type crates do NOT depend on this one, keeping
//! them lightweight and calculation-free.
//!
//! Every engine is a pure function over an immutable parameter
//! snapshot. Validation runs at the boundary (through the core types);
//! once inputs pass, the engines are total apart from the documented
//! "undefined" outcomes, which are `Option` values rather than errors
//! or sentinels.
//!
//! ## Usage
//!
//! ```rust
//! use appraise_core::prelude::*;
//! use appraise_analytics::prelude::*;
//!
//! let params = ProjectParameters::new(750.0, 600.0, 400.0, 8, 700.0, 100.0, 0.10);
//! let result = evaluate(&params).unwrap();
//!
//! assert!(result.viable());
//! assert!(result.irr.is_some());
//! ```

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
#![allow(clippy::cast_lossless)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod indicators;
pub mod scenario;
pub mod scoring;

pub use error::{AnalyticsError, AnalyticsResult};
pub use indicators::{evaluate, IndicatorResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::indicators::{
        benefit_cost_ratio, discounted_payback, equivalent_annual_value, evaluate, irr, npv,
        simple_payback, IndicatorResult,
    };
    pub use crate::scenario::{
        break_even_rate, npv_rate_sweep, run_scenarios, RatePoint, ScenarioResult,
    };
    pub use crate::scoring::{rank, score, Ranking, ScoreCard, ScoringOutcome};
}
