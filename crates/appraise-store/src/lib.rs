//! # Appraise Store
//!
//! The parameter store for the Appraise investment-appraisal library.
//!
//! [`ParameterStore`] is the single mutable home of the project
//! parameters: defaults, typed setters with derived-value refresh,
//! coherence validation, reset, and TOML persistence. The engines never
//! see the store; they receive immutable [`ProjectParameters`]
//! snapshots produced by [`ParameterStore::snapshot`].
//!
//! ## Usage
//!
//! ```rust
//! use appraise_store::ParameterStore;
//!
//! let mut store = ParameterStore::new();
//! store.set_annual_benefit(850.0);
//! store.set_rate_percent(12.0);
//!
//! let params = store.snapshot().unwrap();
//! assert_eq!(params.annual_benefit, 850.0);
//! assert_eq!(params.discount_rate, 0.12);
//! ```
//!
//! [`ProjectParameters`]: appraise_core::ProjectParameters

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{ParameterStore, Severity, ValidationIssue};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{StoreError, StoreResult};
    pub use crate::store::{ParameterStore, Severity, ValidationIssue};
}
