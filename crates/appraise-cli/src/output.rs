//! Output formatting utilities.

#![allow(dead_code)]

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Formats and prints output based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints a single result.
pub fn print_single<T: Serialize>(data: &T, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table | OutputFormat::Json | OutputFormat::Minimal => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.serialize(data)?;
            wtr.flush()?;
        }
    }
    Ok(())
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints minimal output (one JSON object per line).
fn print_minimal<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    for item in data {
        println!("{}", serde_json::to_string(item)?);
    }
    Ok(())
}

/// Formats a monetary amount to two decimals.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Formats a decimal rate as a percentage string.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Formats a period count in years.
pub fn format_years(value: f64) -> String {
    format!("{:.2} years", value)
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Prints a failed-check message to stdout (part of the report, not an
/// error).
pub fn print_shortfall(message: &str) {
    println!("{} {}", "✗".red(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Indicator")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair from a monetary amount.
    pub fn from_amount(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_amount(value))
    }

    /// Creates a key-value pair formatted as percentage.
    pub fn from_percent(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_percent(value))
    }

    /// Creates a key-value pair from an optional value, showing `n/a`
    /// when undefined.
    pub fn from_option(key: impl Into<String>, value: Option<String>) -> Self {
        Self::new(key, value.unwrap_or_else(|| "n/a".to_string()))
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Prints a divider line.
pub fn print_divider() {
    println!("{}", "─".repeat(60).dimmed());
}
