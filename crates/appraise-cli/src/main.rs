//! Appraise CLI - Command-line interface for investment appraisal.
//!
//! # Usage
//!
//! ```bash
//! # Full indicator set for the default project
//! appraise indicators
//!
//! # Override parameters on the command line
//! appraise indicators --benefit 850 --rate 12
//!
//! # Sensitivity scenarios and break-even rate
//! appraise scenarios --adjustment 20
//!
//! # Compare alternatives by weighted criteria
//! appraise score --alternative "System A:9,7,9,8,9" --alternative "System B:7,10,8,10,7"
//!
//! # Inspect and persist the parameter store
//! appraise params show
//! appraise --params project.toml params set rate 12
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let format = cli.format;
    let quiet = cli.quiet;

    match cli.command {
        Commands::Indicators(args) => {
            commands::indicators::execute(args, cli.params.as_deref(), format, quiet)?;
        }
        Commands::Scenarios(args) => {
            commands::scenarios::execute(args, cli.params.as_deref(), format, quiet)?;
        }
        Commands::Score(args) => commands::score::execute(args, format, quiet)?,
        Commands::Params(args) => {
            commands::params::execute(args, cli.params.as_deref(), format, quiet)?;
        }
    }

    Ok(())
}
