use crate::db::Database;
use crate::formatter::Formatter;
use crate::json_path::JsonPath;
use crate::types::DiffOutcome;
use serde::Serialize;

/// Formatter for the "lines" output format: one compact JSON row per line
pub struct LinesFormatter;

fn join_rows<'a, T, I>(rows: I) -> Result<String, Box<dyn std::error::Error>>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let rendered = rows
        .into_iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rendered.join("\n"))
}

impl Formatter for LinesFormatter {
    fn format_paths(&self, paths: &[JsonPath]) -> Result<String, Box<dyn std::error::Error>> {
        join_rows(paths)
    }

    fn format_db(&self, db: &Database) -> Result<String, Box<dyn std::error::Error>> {
        join_rows(db.tuples())
    }

    fn format_diff(&self, outcome: &DiffOutcome) -> Result<String, Box<dyn std::error::Error>> {
        match outcome {
            DiffOutcome::Same => Ok(serde_json::to_string(outcome)?),
            DiffOutcome::Different(records) => join_rows(records),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{make_db, FormatMode};
    use crate::diff::diff;
    use serde_json::json;

    #[test]
    fn test_one_tuple_per_line() {
        let db = make_db(&json!({"a": [1, 2]}), FormatMode::Diff).unwrap();
        let output = LinesFormatter.format_db(&db).unwrap();
        assert_eq!(output, "[[\"a\",0],1]\n[[\"a\",1],2]");
    }

    #[test]
    fn test_diff_lines() {
        let outcome = diff(&json!({"foo": 1}), &json!({"foo": 2, "bar": 3})).unwrap();
        let output = LinesFormatter.format_diff(&outcome).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec![
                r#"{"path":["bar"],"kind":"added","b":3}"#,
                r#"{"path":["foo"],"kind":"modified","a":1,"b":2}"#
            ]);
    }

    #[test]
    fn test_empty_db_is_empty_string() {
        let db = make_db(&json!([]), FormatMode::Plain).unwrap();
        assert_eq!(LinesFormatter.format_db(&db).unwrap(), "");
    }
}
