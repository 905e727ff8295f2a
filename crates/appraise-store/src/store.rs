//! The mutable parameter store.

use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use appraise_core::{CoreResult, ProjectParameters};

use crate::error::StoreResult;

/// Severity of a coherence finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// The parameters cannot be evaluated.
    Error,
    /// The parameters are evaluable but suspicious.
    Warning,
}

/// One finding from [`ParameterStore::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// How serious the finding is.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl ValidationIssue {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{tag}: {}", self.message)
    }
}

/// The single mutable home of the project parameters.
///
/// Setters keep the derived values (total outlay, decimal discount
/// rate) in sync; rates are held as percentages, the way they are
/// entered, and converted to decimal only in the derived field and in
/// snapshots.
///
/// The financing fields (nominal rate, compounding periods, term) are
/// carried for the rate-conversion display; no loan schedule is
/// computed from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterStore {
    tank_cost: f64,
    pump_cost: f64,
    installation_cost: f64,
    lifetime_years: u32,
    annual_benefit: f64,
    annual_upkeep: f64,
    rate_percent: f64,
    financed: bool,
    nominal_rate_percent: f64,
    compounding_periods_per_year: u32,
    term_months: u32,

    // Derived, refreshed on every set and on load
    #[serde(skip)]
    total_outlay: f64,
    #[serde(skip)]
    discount_rate: f64,
}

impl Default for ParameterStore {
    fn default() -> Self {
        let mut store = Self {
            tank_cost: 750.0,
            pump_cost: 600.0,
            installation_cost: 400.0,
            lifetime_years: 8,
            annual_benefit: 700.0,
            annual_upkeep: 100.0,
            rate_percent: 10.0,
            financed: false,
            nominal_rate_percent: 12.0,
            compounding_periods_per_year: 12,
            term_months: 24,
            total_outlay: 0.0,
            discount_rate: 0.0,
        };
        store.refresh_derived();
        store
    }
}

impl ParameterStore {
    /// Creates a store populated with the standard defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn refresh_derived(&mut self) {
        self.total_outlay = self.tank_cost + self.pump_cost + self.installation_cost;
        self.discount_rate = self.rate_percent / 100.0;
    }

    /// Restores every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // Getters

    /// Tank cost.
    pub fn tank_cost(&self) -> f64 {
        self.tank_cost
    }

    /// Pump cost.
    pub fn pump_cost(&self) -> f64 {
        self.pump_cost
    }

    /// Piping and installation cost.
    pub fn installation_cost(&self) -> f64 {
        self.installation_cost
    }

    /// Project lifetime in years.
    pub fn lifetime_years(&self) -> u32 {
        self.lifetime_years
    }

    /// Estimated annual benefit.
    pub fn annual_benefit(&self) -> f64 {
        self.annual_benefit
    }

    /// Annual upkeep cost.
    pub fn annual_upkeep(&self) -> f64 {
        self.annual_upkeep
    }

    /// Discount rate as a percentage (0-100).
    pub fn rate_percent(&self) -> f64 {
        self.rate_percent
    }

    /// Whether the outlay is financed.
    pub fn financed(&self) -> bool {
        self.financed
    }

    /// Nominal annual financing rate as a percentage.
    pub fn nominal_rate_percent(&self) -> f64 {
        self.nominal_rate_percent
    }

    /// Compounding periods per year for the financing rate.
    pub fn compounding_periods_per_year(&self) -> u32 {
        self.compounding_periods_per_year
    }

    /// Financing term in months.
    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    /// Derived total initial outlay.
    pub fn total_outlay(&self) -> f64 {
        self.total_outlay
    }

    /// Derived discount rate as a decimal fraction.
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    // Setters; each refreshes the derived values

    /// Sets the tank cost.
    pub fn set_tank_cost(&mut self, value: f64) {
        self.tank_cost = value;
        self.refresh_derived();
    }

    /// Sets the pump cost.
    pub fn set_pump_cost(&mut self, value: f64) {
        self.pump_cost = value;
        self.refresh_derived();
    }

    /// Sets the installation cost.
    pub fn set_installation_cost(&mut self, value: f64) {
        self.installation_cost = value;
        self.refresh_derived();
    }

    /// Sets the project lifetime in years.
    pub fn set_lifetime_years(&mut self, value: u32) {
        self.lifetime_years = value;
    }

    /// Sets the annual benefit.
    pub fn set_annual_benefit(&mut self, value: f64) {
        self.annual_benefit = value;
    }

    /// Sets the annual upkeep.
    pub fn set_annual_upkeep(&mut self, value: f64) {
        self.annual_upkeep = value;
    }

    /// Sets the discount rate as a percentage (0-100).
    pub fn set_rate_percent(&mut self, value: f64) {
        self.rate_percent = value;
        self.refresh_derived();
    }

    /// Sets the financing flag.
    pub fn set_financed(&mut self, value: bool) {
        self.financed = value;
    }

    /// Sets the nominal financing rate as a percentage.
    pub fn set_nominal_rate_percent(&mut self, value: f64) {
        self.nominal_rate_percent = value;
    }

    /// Sets the compounding periods per year.
    pub fn set_compounding_periods_per_year(&mut self, value: u32) {
        self.compounding_periods_per_year = value;
    }

    /// Sets the financing term in months.
    pub fn set_term_months(&mut self, value: u32) {
        self.term_months = value;
    }

    /// Produces a validated immutable snapshot for the engines.
    ///
    /// # Errors
    ///
    /// Fails when the stored values violate a boundary invariant (the
    /// same checks [`validate`](Self::validate) reports as errors).
    pub fn snapshot(&self) -> CoreResult<ProjectParameters> {
        let params = ProjectParameters::new(
            self.tank_cost,
            self.pump_cost,
            self.installation_cost,
            self.lifetime_years,
            self.annual_benefit,
            self.annual_upkeep,
            self.discount_rate,
        )
        .with_financing(self.financed);
        params.validate()?;
        Ok(params)
    }

    /// Checks the stored values for coherence.
    ///
    /// Returns every finding rather than stopping at the first.
    /// Warnings (benefit below upkeep) do not block a snapshot; errors
    /// do.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        for (name, value) in [
            ("tank cost", self.tank_cost),
            ("pump cost", self.pump_cost),
            ("installation cost", self.installation_cost),
            ("annual benefit", self.annual_benefit),
            ("annual upkeep", self.annual_upkeep),
        ] {
            if !value.is_finite() || value < 0.0 {
                issues.push(ValidationIssue::error(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        if self.lifetime_years < 1 {
            issues.push(ValidationIssue::error("lifetime must be at least 1 year"));
        }
        if !self.rate_percent.is_finite() || !(0.0..=100.0).contains(&self.rate_percent) {
            issues.push(ValidationIssue::error(format!(
                "discount rate must be between 0% and 100%, got {}%",
                self.rate_percent
            )));
        }
        if self.annual_benefit < self.annual_upkeep {
            issues.push(ValidationIssue::warning(
                "annual benefit is below annual upkeep (net flow is negative)",
            ));
        }

        issues
    }

    /// Saves the parameters to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text)?;
        debug!("saved parameters to {}", path.display());
        Ok(())
    }

    /// Loads parameters from a TOML file, recomputing the derived
    /// values.
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let mut store: Self = toml::from_str(&text)?;
        store.refresh_derived();
        debug!("loaded parameters from {}", path.display());
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_match_reference_project() {
        let store = ParameterStore::new();
        assert_relative_eq!(store.total_outlay(), 1750.0, epsilon = 1e-12);
        assert_relative_eq!(store.discount_rate(), 0.10, epsilon = 1e-12);
        assert_eq!(store.lifetime_years(), 8);
        assert!(!store.financed());
        assert_eq!(store.compounding_periods_per_year(), 12);
        assert_eq!(store.term_months(), 24);
    }

    #[test]
    fn test_setters_refresh_derived_values() {
        let mut store = ParameterStore::new();
        store.set_pump_cost(800.0);
        assert_relative_eq!(store.total_outlay(), 1950.0, epsilon = 1e-12);

        store.set_rate_percent(12.5);
        assert_relative_eq!(store.discount_rate(), 0.125, epsilon = 1e-12);
    }

    #[test]
    fn test_snapshot_carries_current_values() {
        let mut store = ParameterStore::new();
        store.set_annual_benefit(850.0);
        store.set_financed(true);

        let params = store.snapshot().unwrap();
        assert_eq!(params.annual_benefit, 850.0);
        assert!(params.financed);
        assert_relative_eq!(params.total_outlay(), 1750.0, epsilon = 1e-12);
    }

    #[test]
    fn test_snapshot_refuses_invalid_values() {
        let mut store = ParameterStore::new();
        store.set_lifetime_years(0);
        assert!(store.snapshot().is_err());
    }

    #[test]
    fn test_validate_reports_all_findings() {
        let mut store = ParameterStore::new();
        store.set_tank_cost(-1.0);
        store.set_lifetime_years(0);
        store.set_rate_percent(150.0);

        let issues = store.validate();
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.severity == Severity::Error));
    }

    #[test]
    fn test_benefit_below_upkeep_is_a_warning_not_an_error() {
        let mut store = ParameterStore::new();
        store.set_annual_benefit(50.0);

        let issues = store.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        // Snapshot still succeeds
        assert!(store.snapshot().is_ok());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut store = ParameterStore::new();
        store.set_tank_cost(9999.0);
        store.set_rate_percent(50.0);
        store.reset();
        assert_eq!(store, ParameterStore::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.toml");

        let mut store = ParameterStore::new();
        store.set_pump_cost(800.0);
        store.set_rate_percent(12.0);
        store.set_financed(true);
        store.save(&path).unwrap();

        let loaded = ParameterStore::load(&path).unwrap();
        assert_eq!(loaded, store);
        // Derived values are recomputed, not read from the file
        assert_relative_eq!(loaded.total_outlay(), 1950.0, epsilon = 1e-12);
        assert_relative_eq!(loaded.discount_rate(), 0.12, epsilon = 1e-12);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.toml");
        std::fs::write(&path, "tank_cost = \"not a number\"").unwrap();
        assert!(ParameterStore::load(&path).is_err());
    }
}
