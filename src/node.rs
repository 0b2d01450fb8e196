//! Closed view over the shapes a nested structure can take
//!
//! Every JSON value is either a container (keyed map or ordered sequence)
//! or a leaf. Traversal code matches on [`Node`] rather than on
//! `serde_json::Value` directly so the container/leaf split is explicit.

use crate::json_path::{JsonPath, PathSegment};
use serde_json::{Map, Value};

/// A borrowed, classified JSON value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    /// Object: keys unique, order not significant
    KeyedMap(&'a Map<String, Value>),
    /// Array: position is significant
    Sequence(&'a [Value]),
    /// Anything else, `null` included
    Scalar(&'a Value),
}

impl<'a> Node<'a> {
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Node::KeyedMap(map),
            Value::Array(items) => Node::Sequence(items),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                Node::Scalar(value)
            }
        }
    }

    pub fn is_container(&self) -> bool {
        !matches!(self, Node::Scalar(_))
    }

    /// Step one segment down. Keys never address sequence slots and
    /// indices never address map entries.
    pub fn child(&self, segment: &PathSegment) -> Option<&'a Value> {
        match (self, segment) {
            (Node::KeyedMap(map), PathSegment::Key(key)) => map.get(key),
            (Node::Sequence(items), PathSegment::Index(i)) => items.get(*i),
            _ => None,
        }
    }
}

/// Human-readable name of a value's JSON kind, used in error messages
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Resolve `path` against `root`, returning the value it addresses
///
/// The empty path resolves to `root` itself.
pub fn lookup<'a>(root: &'a Value, path: &JsonPath) -> Option<&'a Value> {
    path.segments()
        .iter()
        .try_fold(root, |current, segment| Node::classify(current).child(segment))
}
