//! Indicators command implementation.
//!
//! Computes the full indicator set for the current parameters and
//! prints it with a discounted cash-flow table and verdict lines.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use appraise_analytics::prelude::*;
use appraise_math::rates::present_value;

use crate::cli::OutputFormat;
use crate::commands::{load_store, validate_percent};
use crate::output::{
    format_amount, format_percent, format_years, print_header, print_output, print_shortfall,
    print_success, KeyValue,
};

/// Arguments for the indicators command.
#[derive(Args, Debug)]
pub struct IndicatorsArgs {
    /// Tank cost override
    #[arg(long)]
    pub tank_cost: Option<f64>,

    /// Pump cost override
    #[arg(long)]
    pub pump_cost: Option<f64>,

    /// Installation cost override
    #[arg(long)]
    pub installation_cost: Option<f64>,

    /// Project lifetime in years
    #[arg(short, long)]
    pub lifetime: Option<u32>,

    /// Annual benefit (savings)
    #[arg(short, long)]
    pub benefit: Option<f64>,

    /// Annual upkeep cost
    #[arg(short, long)]
    pub upkeep: Option<f64>,

    /// Discount rate (as percentage, e.g. 10 for 10%)
    #[arg(short, long)]
    pub rate: Option<f64>,

    /// Hurdle rate for the IRR verdict (as percentage). Defaults to
    /// the discount rate.
    #[arg(long)]
    pub hurdle: Option<f64>,

    /// Include the period-by-period cash-flow table
    #[arg(long)]
    pub cash_flows: bool,
}

/// One row of the discounted cash-flow table.
#[derive(Debug, Serialize, Tabled)]
pub struct CashFlowRow {
    #[tabled(rename = "Period")]
    pub period: u32,
    #[tabled(rename = "Net Flow")]
    pub net_flow: String,
    #[tabled(rename = "Present Value")]
    pub present_value: String,
    #[tabled(rename = "Cumulative PV")]
    pub cumulative: String,
}

/// Execute the indicators command.
pub fn execute(
    args: IndicatorsArgs,
    params_file: Option<&Path>,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let mut store = load_store(params_file)?;

    if let Some(v) = args.tank_cost {
        store.set_tank_cost(v);
    }
    if let Some(v) = args.pump_cost {
        store.set_pump_cost(v);
    }
    if let Some(v) = args.installation_cost {
        store.set_installation_cost(v);
    }
    if let Some(v) = args.lifetime {
        store.set_lifetime_years(v);
    }
    if let Some(v) = args.benefit {
        store.set_annual_benefit(v);
    }
    if let Some(v) = args.upkeep {
        store.set_annual_upkeep(v);
    }
    if let Some(v) = args.rate {
        store.set_rate_percent(validate_percent(v)?);
    }

    let params = store.snapshot()?;
    let result = evaluate(&params)?;
    let hurdle = match args.hurdle {
        Some(v) => validate_percent(v)? / 100.0,
        None => params.discount_rate,
    };

    let rows = vec![
        KeyValue::from_amount("Initial outlay", params.total_outlay()),
        KeyValue::from_amount("Net annual flow", params.net_annual_flow()),
        KeyValue::from_percent("Discount rate", params.discount_rate),
        KeyValue::from_amount("Net present value", result.npv),
        KeyValue::from_amount("Equivalent annual value", result.equivalent_annual_value),
        KeyValue::from_option("Internal rate of return", result.irr.map(format_percent)),
        KeyValue::new(
            "Benefit/cost ratio",
            format!("{:.2}", result.benefit_cost_ratio),
        ),
        KeyValue::from_option("Simple payback", result.simple_payback.map(format_years)),
        KeyValue::from_option(
            "Discounted payback",
            result.discounted_payback.map(format_years),
        ),
    ];

    if format == OutputFormat::Table && !quiet {
        print_header("Investment Indicators");
    }
    print_output(&rows, format)?;

    if args.cash_flows {
        let flow = params.net_annual_flow();
        let mut cumulative = -params.total_outlay();
        let mut table = Vec::with_capacity(params.lifetime_years as usize);
        for period in 1..=params.lifetime_years {
            let pv = present_value(flow, params.discount_rate, period)?;
            cumulative += pv;
            table.push(CashFlowRow {
                period,
                net_flow: format_amount(flow),
                present_value: format_amount(pv),
                cumulative: format_amount(cumulative),
            });
        }
        if format == OutputFormat::Table && !quiet {
            print_header("Cash Flows");
        }
        print_output(&table, format)?;
    }

    if format == OutputFormat::Table && !quiet {
        print_header("Verdict");
        print_verdicts(&result, hurdle, params.lifetime_years);
    }

    Ok(())
}

fn print_verdicts(result: &IndicatorResult, hurdle: f64, lifetime: u32) {
    if result.viable() {
        print_success("NPV is positive: the project creates value");
    } else {
        print_shortfall("NPV is not positive: the project destroys value");
    }

    match result.meets_hurdle(hurdle) {
        Some(true) => print_success(&format!(
            "IRR exceeds the {} hurdle rate",
            format_percent(hurdle)
        )),
        Some(false) => print_shortfall(&format!(
            "IRR falls short of the {} hurdle rate",
            format_percent(hurdle)
        )),
        None => print_shortfall("IRR is undefined for this flow pattern"),
    }

    if result.benefit_cost_ratio > 1.0 {
        print_success("Benefits outweigh costs (B/C above 1)");
    } else {
        print_shortfall("Costs outweigh benefits (B/C at or below 1)");
    }

    match result.simple_payback {
        Some(periods) if periods <= f64::from(lifetime) => {
            print_success(&format!("Outlay recovered in {}", format_years(periods)));
        }
        _ => print_shortfall("Outlay is never recovered within the project lifetime"),
    }
}
