use crate::db::{make_db, FormatMode};
use crate::error::PathDbError;
use crate::json_path::JsonPath;
use serde_json::Value;
use std::collections::HashMap;

/// Path to leaf-value mapping for one structure
///
/// Two indexes are equal when they hold the same paths with equal values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffIndex {
    entries: HashMap<JsonPath, Value>,
}

impl DiffIndex {
    pub fn get(&self, path: &JsonPath) -> Option<&Value> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &JsonPath) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Indexed paths, in no particular order
    pub fn paths(&self) -> impl Iterator<Item = &JsonPath> {
        self.entries.keys()
    }
}

impl FromIterator<(JsonPath, Value)> for DiffIndex {
    fn from_iter<I: IntoIterator<Item = (JsonPath, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Index every leaf of `root` by its path, via the diff-mode database
pub fn build_diff_index(root: &Value) -> Result<DiffIndex, PathDbError> {
    let db = make_db(root, FormatMode::Diff)?;
    Ok(db
        .into_iter()
        .map(|tuple| (tuple.path, tuple.value))
        .collect())
}
