//! Domain value types.
//!
//! All entities here are immutable once constructed. Validation is
//! explicit: constructors accept raw values and `validate()` performs
//! the boundary checks, so a caller can build a snapshot from user
//! input, validate once, and hand it to the engines.

mod cashflow;
mod criteria;
mod params;
mod scenario;

pub use cashflow::CashFlowSeries;
pub use criteria::{Alternative, CriteriaWeights, Criterion, WEIGHT_SUM_TOLERANCE};
pub use params::ProjectParameters;
pub use scenario::{Scenario, ScenarioKind};
