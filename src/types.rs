use crate::json_path::JsonPath;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// One difference between two structures at a given path
///
/// `None` means the path does not exist on that side, which is distinct
/// from `Some(Value::Null)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRecord {
    pub path: JsonPath,
    pub a: Option<Value>,
    pub b: Option<Value>,
}

/// How a record reads from `a` to `b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

impl DiffRecord {
    pub fn kind(&self) -> ChangeKind {
        match (&self.a, &self.b) {
            (None, Some(_)) => ChangeKind::Added,
            (Some(_), None) => ChangeKind::Removed,
            _ => ChangeKind::Modified,
        }
    }

    /// The same difference seen from the other side
    pub fn swapped(&self) -> Self {
        Self {
            path: self.path.clone(),
            a: self.b.clone(),
            b: self.a.clone(),
        }
    }
}

/// Serialized as `{"path", "kind", "a", "b"}`. Absent sides are left out of
/// the object entirely, so `{"path": [...], "kind": "added", "b": 1}` reads as
/// "missing in a" while `{"path": [...], "kind": "modified", "a": null, "b": 1}`
/// reads as "null in a".
impl Serialize for DiffRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = 2 + usize::from(self.a.is_some()) + usize::from(self.b.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("path", &self.path)?;
        map.serialize_entry("kind", &self.kind())?;
        if let Some(a) = &self.a {
            map.serialize_entry("a", a)?;
        }
        if let Some(b) = &self.b {
            map.serialize_entry("b", b)?;
        }
        map.end()
    }
}

/// Result of comparing two structures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOutcome {
    /// No path differs
    Same,
    /// Differing paths, sorted by path
    Different(Vec<DiffRecord>),
}

impl DiffOutcome {
    pub fn is_same(&self) -> bool {
        matches!(self, DiffOutcome::Same)
    }

    /// The differing records; empty for [`DiffOutcome::Same`]
    pub fn records(&self) -> &[DiffRecord] {
        match self {
            DiffOutcome::Same => &[],
            DiffOutcome::Different(records) => records,
        }
    }

    /// Drop records at or below any of the given paths
    ///
    /// An outcome left without records collapses to [`DiffOutcome::Same`].
    pub fn filter_ignored(self, ignored: &[JsonPath]) -> Self {
        match self {
            DiffOutcome::Same => DiffOutcome::Same,
            DiffOutcome::Different(records) => {
                let kept: Vec<DiffRecord> = records
                    .into_iter()
                    .filter(|r| !ignored.iter().any(|prefix| r.path.matches_prefix(prefix)))
                    .collect();
                if kept.is_empty() {
                    DiffOutcome::Same
                } else {
                    DiffOutcome::Different(kept)
                }
            }
        }
    }
}

/// `Same` serializes as the string `"same"`, otherwise the record list
impl Serialize for DiffOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DiffOutcome::Same => serializer.serialize_str("same"),
            DiffOutcome::Different(records) => records.serialize(serializer),
        }
    }
}
