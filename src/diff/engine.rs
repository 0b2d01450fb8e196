use crate::diff::index::build_diff_index;
use crate::error::PathDbError;
use crate::json_path::JsonPath;
use crate::types::{DiffOutcome, DiffRecord};
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::debug;

/// Compare two structures leaf by leaf
///
/// Returns [`DiffOutcome::Same`] when every path carries an equal value on
/// both sides, otherwise one record per differing path, sorted by path.
/// A path missing on one side shows up as `None` on that side.
///
/// # Errors
///
/// [`PathDbError::InvalidInput`] when either side is a scalar.
///
/// # Example
///
/// ```rust
/// use pathdb::{diff, DiffOutcome};
/// use serde_json::json;
///
/// let outcome = diff(&json!({"foo": 1}), &json!({"foo": 9000, "bar": 9000})).unwrap();
/// let records = outcome.records();
/// assert_eq!(records[0].path.to_string(), "bar");
/// assert_eq!(records[0].a, None);
/// assert_eq!(records[1].a, Some(json!(1)));
/// ```
pub fn diff(a: &Value, b: &Value) -> Result<DiffOutcome, PathDbError> {
    let index_a = build_diff_index(a)?;
    let index_b = build_diff_index(b)?;

    if index_a == index_b {
        debug!(paths = index_a.len(), "structures are the same");
        return Ok(DiffOutcome::Same);
    }

    // BTreeSet both collapses shared paths and yields them in path order.
    let all_paths: BTreeSet<&JsonPath> = index_a.paths().chain(index_b.paths()).collect();

    let records: Vec<DiffRecord> = all_paths
        .into_iter()
        .filter_map(|path| {
            let va = index_a.get(path);
            let vb = index_b.get(path);
            if va == vb {
                None
            } else {
                Some(DiffRecord {
                    path: path.clone(),
                    a: va.cloned(),
                    b: vb.cloned(),
                })
            }
        })
        .collect();

    debug!(
        paths_a = index_a.len(),
        paths_b = index_b.len(),
        records = records.len(),
        "computed diff"
    );
    Ok(DiffOutcome::Different(records))
}
