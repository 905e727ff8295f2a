//! # Appraise Core
//!
//! Core types and boundary validation for the Appraise
//! investment-appraisal library.
//!
//! This crate provides the foundational value objects used throughout
//! Appraise:
//!
//! - **Types**: `ProjectParameters`, `CashFlowSeries`, `Scenario`,
//!   `Criterion`, `Alternative`, `CriteriaWeights`
//! - **Validation**: every range and coherence check runs here, at the
//!   boundary, before any indicator function is invoked
//!
//! ## Design Philosophy
//!
//! - **Immutable Snapshots**: entities are value objects; engines receive
//!   a validated snapshot per computation, never shared mutable state
//! - **Enumerated Identifiers**: scenarios and criteria are enums, not
//!   loose string keys
//! - **Explicit Over Implicit**: invalid configuration is a structured
//!   error, never a sentinel number
//!
//! ## Example
//!
//! ```rust
//! use appraise_core::prelude::*;
//!
//! let params = ProjectParameters::new(750.0, 600.0, 400.0, 8, 700.0, 100.0, 0.10);
//! params.validate().unwrap();
//! assert_eq!(params.total_outlay(), 1750.0);
//! assert_eq!(params.net_annual_flow(), 600.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::float_cmp)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        Alternative, CashFlowSeries, CriteriaWeights, Criterion, ProjectParameters, Scenario,
        ScenarioKind, WEIGHT_SUM_TOLERANCE,
    };
}

pub use error::{CoreError, CoreResult};
pub use types::{
    Alternative, CashFlowSeries, CriteriaWeights, Criterion, ProjectParameters, Scenario,
    ScenarioKind,
};
