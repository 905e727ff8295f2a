//! Score command implementation.
//!
//! Compares alternatives by the weighted multi-criteria method.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use appraise_analytics::prelude::*;
use appraise_core::{Alternative, CriteriaWeights, Criterion};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::{print_header, print_info, print_output, print_success};

/// Arguments for the score command.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Alternative as NAME:cost,capacity,power,durability,maintenance
    /// with ratings 1-10. Repeat for each alternative.
    #[arg(short, long = "alternative", required = true)]
    pub alternatives: Vec<String>,

    /// Criterion weights as five comma-separated fractions in the same
    /// order, summing to 1. Defaults to 0.30,0.25,0.20,0.15,0.10.
    #[arg(short, long)]
    pub weights: Option<String>,
}

/// One row of the scoring table.
#[derive(Debug, Serialize, Tabled)]
pub struct ScoreRow {
    #[tabled(rename = "Alternative")]
    pub name: String,
    #[tabled(rename = "Cost")]
    pub cost: String,
    #[tabled(rename = "Capacity")]
    pub capacity: String,
    #[tabled(rename = "Power")]
    pub power: String,
    #[tabled(rename = "Durability")]
    pub durability: String,
    #[tabled(rename = "Maintenance")]
    pub maintenance: String,
    #[tabled(rename = "Total")]
    pub total: String,
}

/// Execute the score command.
pub fn execute(args: ScoreArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let alternatives: Vec<Alternative> = args
        .alternatives
        .iter()
        .map(|spec| parse_alternative(spec))
        .collect::<CliResult<_>>()?;

    let weights = match args.weights {
        Some(ref spec) => parse_weights(spec)?,
        None => CriteriaWeights::standard(),
    };

    let outcome = rank(&alternatives, &weights)?;

    let rows: Vec<ScoreRow> = outcome
        .cards
        .iter()
        .map(|card| {
            let contribution = |criterion: Criterion| {
                card.contributions
                    .iter()
                    .find(|(c, _)| *c == criterion)
                    .map_or_else(|| "n/a".to_string(), |(_, v)| format!("{:.2}", v))
            };
            ScoreRow {
                name: card.name.clone(),
                cost: contribution(Criterion::Cost),
                capacity: contribution(Criterion::Capacity),
                power: contribution(Criterion::PowerConsumption),
                durability: contribution(Criterion::Durability),
                maintenance: contribution(Criterion::Maintenance),
                total: format!("{:.2}", card.total),
            }
        })
        .collect();

    if format == OutputFormat::Table && !quiet {
        print_header("Weighted Multi-Criteria Comparison");
    }
    print_output(&rows, format)?;

    if format == OutputFormat::Table && !quiet {
        match outcome.ranking {
            Ranking::Winner { ref name, margin } => {
                print_success(&format!("{name} wins by {margin:.2} points"));
            }
            Ranking::Tie { ref names } => {
                print_info(&format!("Tie between: {}", names.join(", ")));
            }
        }
    }

    Ok(())
}

/// Parses `NAME:r1,r2,r3,r4,r5` into an alternative rated in canonical
/// criterion order.
fn parse_alternative(spec: &str) -> CliResult<Alternative> {
    let (name, ratings) = spec
        .split_once(':')
        .ok_or_else(|| CliError::InvalidAlternative(spec.to_string()))?;

    let values: Vec<u8> = ratings
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect::<Result<_, _>>()
        .map_err(|_| CliError::InvalidAlternative(spec.to_string()))?;

    if name.trim().is_empty() || values.len() != Criterion::ALL.len() {
        return Err(CliError::InvalidAlternative(spec.to_string()));
    }

    let mut alternative = Alternative::new(name.trim());
    for (&criterion, &rating) in Criterion::ALL.iter().zip(values.iter()) {
        alternative = alternative.with_rating(criterion, rating);
    }
    Ok(alternative)
}

/// Parses five comma-separated weight fractions in canonical criterion
/// order.
fn parse_weights(spec: &str) -> CliResult<CriteriaWeights> {
    let values: Vec<f64> = spec
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| CliError::InvalidWeights(spec.to_string()))?;

    if values.len() != Criterion::ALL.len() {
        return Err(CliError::InvalidWeights(spec.to_string()));
    }

    let mut weights = CriteriaWeights::new();
    for (&criterion, &weight) in Criterion::ALL.iter().zip(values.iter()) {
        weights = weights.with_weight(criterion, weight);
    }
    Ok(weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_alternative() {
        let alt = parse_alternative("System A:9,7,9,8,9").unwrap();
        assert_eq!(alt.name, "System A");
        assert_eq!(alt.rating(Criterion::Cost), Some(9));
        assert_eq!(alt.rating(Criterion::Maintenance), Some(9));
    }

    #[test]
    fn test_parse_alternative_rejects_bad_specs() {
        assert!(parse_alternative("no ratings").is_err());
        assert!(parse_alternative("X:1,2,3").is_err());
        assert!(parse_alternative(":9,7,9,8,9").is_err());
        assert!(parse_alternative("X:9,7,9,8,eleven").is_err());
    }

    #[test]
    fn test_parse_weights() {
        let weights = parse_weights("0.30,0.25,0.20,0.15,0.10").unwrap();
        assert!(weights.validate().is_ok());
        assert_eq!(weights.weight(Criterion::Cost), Some(0.30));
    }

    #[test]
    fn test_parse_weights_rejects_wrong_arity() {
        assert!(parse_weights("0.5,0.5").is_err());
    }
}
