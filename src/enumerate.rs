//! Leaf path enumeration
//!
//! Depth-first descent from the root that yields the path of every scalar
//! leaf. Containers never produce a path of their own, so empty objects
//! and arrays contribute nothing.

use crate::error::PathDbError;
use crate::json_path::{JsonPath, PathSegment};
use crate::node::{kind_name, Node};
use serde_json::Value;
use tracing::debug;

/// Enumerate the path of every scalar leaf reachable from `root`
///
/// Paths come out in traversal order: object keys in insertion order,
/// array elements by position.
///
/// # Errors
///
/// Returns [`PathDbError::InvalidInput`] when `root` is itself a scalar.
///
/// # Example
///
/// ```rust
/// use pathdb::enumerate;
/// use serde_json::json;
///
/// let paths = enumerate(&json!({"a": [1, 2]})).unwrap();
/// let rendered: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
/// assert_eq!(rendered, vec!["a[0]", "a[1]"]);
/// ```
pub fn enumerate(root: &Value) -> Result<Vec<JsonPath>, PathDbError> {
    let node = Node::classify(root);
    if !node.is_container() {
        return Err(PathDbError::InvalidInput {
            kind: kind_name(root),
        });
    }

    let mut paths = Vec::new();
    let mut prefix = JsonPath::new();
    collect(node, &mut prefix, &mut paths);

    debug!(paths = paths.len(), "enumerated leaf paths");
    Ok(paths)
}

fn collect(node: Node<'_>, prefix: &mut JsonPath, paths: &mut Vec<JsonPath>) {
    match node {
        Node::KeyedMap(map) => {
            for (key, child) in map {
                prefix.push(PathSegment::Key(key.clone()));
                collect(Node::classify(child), prefix, paths);
                prefix.pop();
            }
        }
        Node::Sequence(items) => {
            for (index, child) in items.iter().enumerate() {
                prefix.push(PathSegment::Index(index));
                collect(Node::classify(child), prefix, paths);
                prefix.pop();
            }
        }
        Node::Scalar(_) => paths.push(prefix.clone()),
    }
}
