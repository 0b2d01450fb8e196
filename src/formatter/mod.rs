//! Formatter module for printing paths, databases and diffs
//!
//! Two output formats are provided. `json` prints one pretty JSON document,
//! convenient for people. `lines` prints one compact JSON row per line,
//! convenient for feeding a query engine or `grep`.

mod json;
mod lines;

pub use json::JsonFormatter;
pub use lines::LinesFormatter;

use crate::db::Database;
use crate::json_path::JsonPath;
use crate::types::DiffOutcome;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One pretty-printed JSON document
    #[default]
    #[value(name = "json")]
    Json,

    /// Newline-delimited compact JSON, one row per line
    #[value(name = "lines")]
    Lines,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Lines => write!(f, "lines"),
        }
    }
}

/// Trait for formatting results
pub trait Formatter {
    /// Format an enumerated path list
    fn format_paths(&self, paths: &[JsonPath]) -> Result<String, Box<dyn std::error::Error>>;

    /// Format a tuple database
    fn format_db(&self, db: &Database) -> Result<String, Box<dyn std::error::Error>>;

    /// Format a diff outcome
    fn format_diff(&self, outcome: &DiffOutcome) -> Result<String, Box<dyn std::error::Error>>;
}

/// Factory function to create a formatter based on output format
pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter::new()),
        OutputFormat::Lines => Box::new(LinesFormatter),
    }
}
