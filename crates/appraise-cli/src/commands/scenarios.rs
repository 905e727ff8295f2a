//! Scenarios command implementation.
//!
//! Runs the optimistic/likely/pessimistic triple, reports the
//! break-even discount rate, and optionally prints the NPV-vs-rate
//! sweep.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use appraise_analytics::prelude::*;
use appraise_core::Scenario;

use crate::cli::OutputFormat;
use crate::commands::{load_store, validate_percent};
use crate::error::CliError;
use crate::output::{
    format_amount, format_percent, format_years, print_header, print_info, print_output,
    print_warning,
};

/// Arguments for the scenarios command.
#[derive(Args, Debug)]
pub struct ScenariosArgs {
    /// Benefit adjustment magnitude for both directions (percentage,
    /// e.g. 15 for +-15%)
    #[arg(short, long, default_value = "15")]
    pub adjustment: f64,

    /// Optimistic adjustment override (percentage)
    #[arg(long)]
    pub optimistic: Option<f64>,

    /// Pessimistic adjustment override (percentage)
    #[arg(long)]
    pub pessimistic: Option<f64>,

    /// Print the NPV-vs-rate sweep
    #[arg(long)]
    pub sweep: bool,

    /// Upper bound of the rate sweep (percentage)
    #[arg(long, default_value = "50")]
    pub sweep_max: f64,

    /// Number of steps in the rate sweep
    #[arg(long, default_value = "20")]
    pub sweep_steps: u32,
}

/// One row of the scenario comparison table.
#[derive(Debug, Serialize, Tabled)]
pub struct ScenarioRow {
    #[tabled(rename = "Scenario")]
    pub scenario: String,
    #[tabled(rename = "Benefit")]
    pub benefit: String,
    #[tabled(rename = "NPV")]
    pub npv: String,
    #[tabled(rename = "IRR")]
    pub irr: String,
    #[tabled(rename = "Simple Payback")]
    pub payback: String,
}

/// One row of the rate sweep table.
#[derive(Debug, Serialize, Tabled)]
pub struct SweepRow {
    #[tabled(rename = "Rate")]
    pub rate: String,
    #[tabled(rename = "NPV")]
    pub npv: String,
}

/// Execute the scenarios command.
pub fn execute(
    args: ScenariosArgs,
    params_file: Option<&Path>,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let adjustment = validate_percent(args.adjustment)?;
    let optimistic = match args.optimistic {
        Some(v) => validate_percent(v)?,
        None => adjustment,
    };
    let pessimistic = match args.pessimistic {
        Some(v) => validate_percent(v)?,
        None => adjustment,
    };

    let store = load_store(params_file)?;
    let params = store.snapshot()?;

    let set = Scenario::standard_set(optimistic / 100.0, pessimistic / 100.0);
    let results = run_scenarios(&params, &set)?;

    let rows: Vec<ScenarioRow> = results
        .iter()
        .map(|r| ScenarioRow {
            scenario: r.scenario.kind.to_string(),
            benefit: format_amount(r.adjusted_benefit),
            npv: format_amount(r.indicators.npv),
            irr: r
                .indicators
                .irr
                .map_or_else(|| "n/a".to_string(), format_percent),
            payback: r
                .indicators
                .simple_payback
                .map_or_else(|| "n/a".to_string(), format_years),
        })
        .collect();

    if format == OutputFormat::Table && !quiet {
        print_header("Sensitivity Scenarios");
    }
    print_output(&rows, format)?;

    if args.sweep {
        if args.sweep_max <= 0.0 || args.sweep_max > 100.0 {
            return Err(CliError::InvalidPercent(args.sweep_max).into());
        }
        let points = npv_rate_sweep(&params, 0.0, args.sweep_max / 100.0, args.sweep_steps)?;
        let sweep_rows: Vec<SweepRow> = points
            .iter()
            .map(|p| SweepRow {
                rate: format_percent(p.rate),
                npv: format_amount(p.npv),
            })
            .collect();
        if format == OutputFormat::Table && !quiet {
            print_header("NPV by Discount Rate");
        }
        print_output(&sweep_rows, format)?;
    }

    if format == OutputFormat::Table && !quiet {
        // Fine grid over 0-100% for the break-even interpolation
        let curve = npv_rate_sweep(&params, 0.0, 1.0, 400)?;
        match break_even_rate(&curve) {
            Some(rate) => print_info(&format!(
                "Break-even discount rate: {}",
                format_percent(rate)
            )),
            None => print_warning("No break-even rate: the NPV never crosses zero"),
        }
    }

    Ok(())
}
