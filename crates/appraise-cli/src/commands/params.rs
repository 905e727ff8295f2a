//! Params command implementation.
//!
//! Shows, edits, resets, and persists the parameter store.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Subcommand};

use appraise_math::rates::effective_rate;
use appraise_store::{ParameterStore, Severity};

use crate::cli::OutputFormat;
use crate::commands::load_store;
use crate::error::{CliError, CliResult};
use crate::output::{
    print_header, print_output, print_shortfall, print_success, print_warning, KeyValue,
};

/// Arguments for the params command.
#[derive(Args, Debug)]
pub struct ParamsArgs {
    #[command(subcommand)]
    pub action: ParamsAction,
}

/// Parameter store actions.
#[derive(Subcommand, Debug)]
pub enum ParamsAction {
    /// Show the current parameters, derived values, and any findings
    Show,

    /// Set one parameter (tank-cost, pump-cost, installation-cost,
    /// lifetime, benefit, upkeep, rate, financed, nominal-rate,
    /// compounding, term-months)
    Set {
        /// Parameter key
        key: String,
        /// New value
        value: String,
    },

    /// Restore every parameter to its default
    Reset,

    /// Save the current parameters to a TOML file
    Save {
        /// Destination file
        path: PathBuf,
    },
}

/// Execute the params command.
pub fn execute(
    args: ParamsArgs,
    params_file: Option<&Path>,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let mut store = load_store(params_file)?;

    match args.action {
        ParamsAction::Show => show(&store, format, quiet)?,
        ParamsAction::Set { ref key, ref value } => {
            set_parameter(&mut store, key, value)?;
            if let Some(path) = params_file {
                store.save(path)?;
            }
            if !quiet {
                print_success(&format!("{key} set to {value}"));
            }
        }
        ParamsAction::Reset => {
            store.reset();
            if let Some(path) = params_file {
                store.save(path)?;
            }
            if !quiet {
                print_success("Parameters restored to defaults");
            }
        }
        ParamsAction::Save { ref path } => {
            store.save(path)?;
            if !quiet {
                print_success(&format!("Parameters saved to {}", path.display()));
            }
        }
    }

    Ok(())
}

fn show(store: &ParameterStore, format: OutputFormat, quiet: bool) -> Result<()> {
    let mut rows = vec![
        KeyValue::from_amount("Tank cost", store.tank_cost()),
        KeyValue::from_amount("Pump cost", store.pump_cost()),
        KeyValue::from_amount("Installation cost", store.installation_cost()),
        KeyValue::new("Lifetime", format!("{} years", store.lifetime_years())),
        KeyValue::from_amount("Annual benefit", store.annual_benefit()),
        KeyValue::from_amount("Annual upkeep", store.annual_upkeep()),
        KeyValue::from_percent("Discount rate", store.discount_rate()),
        KeyValue::new("Financed", store.financed().to_string()),
        KeyValue::from_amount("Total outlay", store.total_outlay()),
    ];

    if store.financed() {
        rows.push(KeyValue::from_percent(
            "Nominal financing rate",
            store.nominal_rate_percent() / 100.0,
        ));
        rows.push(KeyValue::new(
            "Compounding",
            format!("{} periods/year", store.compounding_periods_per_year()),
        ));
        rows.push(KeyValue::new(
            "Term",
            format!("{} months", store.term_months()),
        ));
        let effective = effective_rate(
            store.nominal_rate_percent() / 100.0,
            store.compounding_periods_per_year(),
        )?;
        rows.push(KeyValue::from_percent("Effective annual rate", effective));
    }

    if format == OutputFormat::Table && !quiet {
        print_header("Project Parameters");
    }
    print_output(&rows, format)?;

    if format == OutputFormat::Table && !quiet {
        for issue in store.validate() {
            match issue.severity {
                Severity::Error => print_shortfall(&issue.message),
                Severity::Warning => print_warning(&issue.message),
            }
        }
    }

    Ok(())
}

fn set_parameter(store: &mut ParameterStore, key: &str, value: &str) -> CliResult<()> {
    let invalid = || CliError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    };

    match key {
        "tank-cost" => store.set_tank_cost(value.parse().map_err(|_| invalid())?),
        "pump-cost" => store.set_pump_cost(value.parse().map_err(|_| invalid())?),
        "installation-cost" => {
            store.set_installation_cost(value.parse().map_err(|_| invalid())?);
        }
        "lifetime" => store.set_lifetime_years(value.parse().map_err(|_| invalid())?),
        "benefit" => store.set_annual_benefit(value.parse().map_err(|_| invalid())?),
        "upkeep" => store.set_annual_upkeep(value.parse().map_err(|_| invalid())?),
        "rate" => store.set_rate_percent(value.parse().map_err(|_| invalid())?),
        "financed" => store.set_financed(value.parse().map_err(|_| invalid())?),
        "nominal-rate" => store.set_nominal_rate_percent(value.parse().map_err(|_| invalid())?),
        "compounding" => {
            store.set_compounding_periods_per_year(value.parse().map_err(|_| invalid())?);
        }
        "term-months" => store.set_term_months(value.parse().map_err(|_| invalid())?),
        _ => return Err(CliError::UnknownParameter(key.to_string())),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_parameter_updates_store() {
        let mut store = ParameterStore::new();
        set_parameter(&mut store, "rate", "12.5").unwrap();
        assert_eq!(store.rate_percent(), 12.5);

        set_parameter(&mut store, "financed", "true").unwrap();
        assert!(store.financed());
    }

    #[test]
    fn test_set_parameter_rejects_unknown_key() {
        let mut store = ParameterStore::new();
        assert!(matches!(
            set_parameter(&mut store, "color", "blue"),
            Err(CliError::UnknownParameter(_))
        ));
    }

    #[test]
    fn test_set_parameter_rejects_bad_value() {
        let mut store = ParameterStore::new();
        assert!(matches!(
            set_parameter(&mut store, "lifetime", "eight"),
            Err(CliError::InvalidValue { .. })
        ));
    }
}
