//! Tuple databases built from enumerated paths
//!
//! A database is the relation a Datalog engine consumes: one tuple per
//! scalar leaf. The column layout depends on the [`FormatMode`]:
//!
//! | mode   | tuple                          |
//! |--------|--------------------------------|
//! | plain  | `[k1, ..., kn, value]`         |
//! | diff   | `[path, value]`                |
//! | update | `[path, k1, ..., kn, value]`   |
//!
//! `path` is the whole path as one opaque column, a JSON array such as
//! `[0, "age"]`. The update layout repeats the components after it so a
//! query can bind the path as a single variable and still join on its parts.

use crate::enumerate::enumerate;
use crate::error::PathDbError;
use crate::json_path::JsonPath;
use crate::node::lookup;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Tuple layout selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum FormatMode {
    /// Path components spread as columns, then the value
    #[default]
    Plain,
    /// Whole path, then the value
    Diff,
    /// Whole path, its components, then the value
    Update,
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatMode::Plain => write!(f, "plain"),
            FormatMode::Diff => write!(f, "diff"),
            FormatMode::Update => write!(f, "update"),
        }
    }
}

/// One row of a database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuple {
    pub mode: FormatMode,
    pub path: JsonPath,
    pub value: Value,
}

impl Tuple {
    /// Number of columns this tuple serializes to
    pub fn arity(&self) -> usize {
        match self.mode {
            FormatMode::Plain => self.path.len() + 1,
            FormatMode::Diff => 2,
            FormatMode::Update => self.path.len() + 2,
        }
    }

    /// The tuple's columns as JSON values, in wire order
    pub fn columns(&self) -> Vec<Value> {
        let mut columns = Vec::with_capacity(self.arity());
        if matches!(self.mode, FormatMode::Diff | FormatMode::Update) {
            columns.push(path_column(&self.path));
        }
        if matches!(self.mode, FormatMode::Plain | FormatMode::Update) {
            columns.extend(self.path.segments().iter().map(|s| s.to_value()));
        }
        columns.push(self.value.clone());
        columns
    }
}

fn path_column(path: &JsonPath) -> Value {
    Value::Array(path.segments().iter().map(|s| s.to_value()).collect())
}

impl Serialize for Tuple {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.arity()))?;
        if matches!(self.mode, FormatMode::Diff | FormatMode::Update) {
            seq.serialize_element(&self.path)?;
        }
        if matches!(self.mode, FormatMode::Plain | FormatMode::Update) {
            for segment in self.path.segments() {
                seq.serialize_element(segment)?;
            }
        }
        seq.serialize_element(&self.value)?;
        seq.end()
    }
}

/// Ordered collection of tuples, in path enumeration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Database {
    tuples: Vec<Tuple>,
}

impl Database {
    pub fn tuples(&self) -> &[Tuple] {
        &self.tuples
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tuple> {
        self.tuples.iter()
    }

    pub fn into_tuples(self) -> Vec<Tuple> {
        self.tuples
    }
}

impl IntoIterator for Database {
    type Item = Tuple;
    type IntoIter = std::vec::IntoIter<Tuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.tuples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Database {
    type Item = &'a Tuple;
    type IntoIter = std::slice::Iter<'a, Tuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.tuples.iter()
    }
}

/// Build the tuple database for `root` in the given layout
///
/// # Errors
///
/// [`PathDbError::InvalidInput`] when `root` is a scalar. A path that fails
/// to resolve right after enumeration is reported as
/// [`PathDbError::Internal`].
///
/// # Example
///
/// ```rust
/// use pathdb::{make_db, FormatMode};
/// use serde_json::json;
///
/// let root = json!([{"name": "George", "age": 3}]);
/// let db = make_db(&root, FormatMode::Update).unwrap();
/// assert_eq!(
///     serde_json::to_value(&db.tuples()[1]).unwrap(),
///     json!([[0, "age"], 0, "age", 3])
/// );
/// ```
pub fn make_db(root: &Value, mode: FormatMode) -> Result<Database, PathDbError> {
    let paths = enumerate(root)?;
    let mut tuples = Vec::with_capacity(paths.len());

    for path in paths {
        let value = lookup(root, &path)
            .ok_or_else(|| PathDbError::Internal {
                message: format!("enumerated path '{}' does not resolve", path),
            })?
            .clone();
        tuples.push(Tuple { mode, path, value });
    }

    debug!(%mode, tuples = tuples.len(), "built database");
    Ok(Database { tuples })
}
