//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{IndicatorsArgs, ParamsArgs, ScenariosArgs, ScoreArgs};

/// Appraise - investment appraisal from the command line
#[derive(Parser)]
#[command(name = "appraise")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Parameter file (TOML) to load instead of the built-in defaults
    #[arg(short, long, global = true)]
    pub params: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the full indicator set (NPV, EAV, IRR, B/C, paybacks)
    Indicators(IndicatorsArgs),

    /// Run optimistic/likely/pessimistic scenarios and the rate sweep
    Scenarios(ScenariosArgs),

    /// Compare alternatives by weighted multi-criteria scoring
    Score(ScoreArgs),

    /// Show, set, reset, or save the parameter store
    Params(ParamsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}
