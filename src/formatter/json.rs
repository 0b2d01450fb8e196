use crate::db::Database;
use crate::formatter::Formatter;
use crate::json_path::JsonPath;
use crate::types::DiffOutcome;
use serde::Serialize;

/// Formatter for the "json" output format
///
/// Every result is a single JSON document:
/// - paths: an array of component arrays
/// - databases: an array of tuples
/// - diffs: an array of `{path, kind, a, b}` records, or `"same"`
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Create a new JsonFormatter with pretty printing enabled
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a JsonFormatter with custom pretty printing setting
    pub fn with_pretty(pretty: bool) -> Self {
        Self { pretty }
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, Box<dyn std::error::Error>> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for JsonFormatter {
    fn format_paths(&self, paths: &[JsonPath]) -> Result<String, Box<dyn std::error::Error>> {
        self.render(paths)
    }

    fn format_db(&self, db: &Database) -> Result<String, Box<dyn std::error::Error>> {
        self.render(db)
    }

    fn format_diff(&self, outcome: &DiffOutcome) -> Result<String, Box<dyn std::error::Error>> {
        self.render(outcome)
    }
}
