//! Integration tests for formatters

use pathdb::{create_formatter, diff, enumerate, make_db, FormatMode, OutputFormat};
use serde_json::{json, Value};

#[test]
fn test_json_formatter_db() {
    let db = make_db(&json!({"a": [1, 2]}), FormatMode::Plain).unwrap();
    let output = create_formatter(OutputFormat::Json).format_db(&db).unwrap();

    let parsed: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, json!([["a", 0, 1], ["a", 1, 2]]));
}

#[test]
fn test_json_formatter_paths() {
    let paths = enumerate(&json!([{"name": "George"}])).unwrap();
    let output = create_formatter(OutputFormat::Json).format_paths(&paths).unwrap();

    let parsed: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, json!([[0, "name"]]));
}

#[test]
fn test_json_formatter_diff() {
    let outcome = diff(&json!({"x": null}), &json!({"x": 1, "y": 2})).unwrap();
    let output = create_formatter(OutputFormat::Json).format_diff(&outcome).unwrap();

    let parsed: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        parsed,
        json!([
            {"path": ["x"], "kind": "modified", "a": null, "b": 1},
            {"path": ["y"], "kind": "added", "b": 2}
        ])
    );
}

#[test]
fn test_lines_formatter_each_line_parses() {
    let db = make_db(
        &json!([{"name": "George", "age": 3}, {"name": "Francis", "age": 8}]),
        FormatMode::Update,
    )
    .unwrap();
    let output = create_formatter(OutputFormat::Lines).format_db(&db).unwrap();

    let rows: Vec<Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1], json!([[0, "age"], 0, "age", 3]));
}

#[test]
fn test_lines_formatter_same() {
    let s = json!({"a": 1});
    let outcome = diff(&s, &s).unwrap();
    let output = create_formatter(OutputFormat::Lines).format_diff(&outcome).unwrap();
    assert_eq!(output, r#""same""#);
}
