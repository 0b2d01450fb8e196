//! Type-safe JSON path representation and manipulation
//!
//! A [`JsonPath`] is the ordered list of keys and indices needed to reach a
//! value from the root of a nested structure. The empty path is the root.
//!
//! # Format
//!
//! Paths render in dot notation with bracket-based array indexing:
//! - Root property: `"name"`
//! - Nested property: `"user.profile.email"`
//! - Array index: `"items[0]"`
//! - Combined: `"users[0].email"`
//! - Awkward key: `"config[\"a.b\"]"` (keys that are empty, padded, or
//!   contain `.`, `[`, `]` or `"` are written as bracketed JSON strings)
//!
//! On the wire (inside database tuples and diff records) a path is a JSON
//! array of its components, e.g. `[0, "age"]`.
//!
//! # Ordering
//!
//! Paths are totally ordered: segments compare lexicographically, a prefix
//! sorts before its extensions, and at a single position every array index
//! sorts before every object key.
//!
//! # Example
//!
//! ```rust
//! use pathdb::json_path::{JsonPath, PathSegment};
//! use std::str::FromStr;
//!
//! let path = JsonPath::from_str("users[0].email").unwrap();
//! assert_eq!(path.to_string(), "users[0].email");
//! assert_eq!(JsonPath::from_json_pointer("/users/0/email").unwrap(), path);
//! assert_eq!(path.segments()[1], PathSegment::Index(0));
//! ```

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A single segment in a JSON path
///
/// Represents either an object property key or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object property key (e.g., "user" in "user.name")
    Key(String),
    /// Array index (e.g., 0 in "items[0]")
    Index(usize),
}

impl PathSegment {
    /// The segment as a JSON column value: a string for keys, an integer for indices
    pub fn to_value(&self) -> Value {
        match self {
            PathSegment::Key(key) => Value::String(key.clone()),
            PathSegment::Index(i) => Value::from(*i),
        }
    }
}

impl Hash for PathSegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            PathSegment::Key(s) => {
                state.write_u8(0);
                s.hash(state);
            }
            PathSegment::Index(i) => {
                state.write_u8(1);
                i.hash(state);
            }
        }
    }
}

// Indices rank below keys; within a kind, natural order.
impl Ord for PathSegment {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (PathSegment::Index(a), PathSegment::Index(b)) => a.cmp(b),
            (PathSegment::Key(a), PathSegment::Key(b)) => a.cmp(b),
            (PathSegment::Index(_), PathSegment::Key(_)) => Ordering::Less,
            (PathSegment::Key(_), PathSegment::Index(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for PathSegment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "{}", key),
            PathSegment::Index(i) => write!(f, "{}", i),
        }
    }
}

impl Serialize for PathSegment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PathSegment::Key(key) => serializer.serialize_str(key),
            PathSegment::Index(i) => serializer.serialize_u64(*i as u64),
        }
    }
}

/// A type-safe JSON path
///
/// Equality and hashing are structural, so paths can key hash maps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JsonPath {
    /// The segments that make up this path
    segments: Vec<PathSegment>,
}

impl JsonPath {
    /// Create a new empty JsonPath
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Create a JsonPath from a vector of segments
    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// Get the segments of this path
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Check if this path is empty
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Get the number of segments in this path
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Add a segment to this path
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// Remove and return the last segment
    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    /// Check if this path starts with the given prefix
    pub fn matches_prefix(&self, prefix: &JsonPath) -> bool {
        if prefix.segments.len() > self.segments.len() {
            return false;
        }
        self.segments
            .iter()
            .zip(prefix.segments.iter())
            .all(|(a, b)| a == b)
    }

    /// Parse a JSON Pointer (RFC 6901)
    ///
    /// All-digit tokens become array indices; everything else is a key. An
    /// object key made of digits can only be addressed in dot notation
    /// (`counts.0`).
    pub fn from_json_pointer(pointer: &str) -> Result<Self, ParseError> {
        if pointer.is_empty() {
            return Ok(Self::new());
        }
        let rest = pointer
            .strip_prefix('/')
            .ok_or(ParseError::MissingLeadingSlash)?;

        let segments = rest
            .split('/')
            .map(|token| {
                if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
                    if let Ok(index) = token.parse::<usize>() {
                        return PathSegment::Index(index);
                    }
                }
                PathSegment::Key(token.replace("~1", "/").replace("~0", "~"))
            })
            .collect();

        Ok(Self { segments })
    }

    /// Parse either a JSON Pointer (leading `/`) or dot notation
    ///
    /// Unlike [`FromStr`], a blank pattern is an error rather than the root
    /// path, since the root matches everything.
    pub fn parse_pattern(pattern: &str) -> Result<Self, ParseError> {
        if pattern.trim().is_empty() {
            Err(ParseError::EmptyPath)
        } else if pattern.starts_with('/') {
            Self::from_json_pointer(pattern)
        } else {
            pattern.parse()
        }
    }
}

impl Default for JsonPath {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<PathSegment>> for JsonPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self::from_segments(segments)
    }
}

/// The whole path as one opaque column: a JSON array of its components
impl Serialize for JsonPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.segments.len()))?;
        for segment in &self.segments {
            seq.serialize_element(segment)?;
        }
        seq.end()
    }
}

/// Keys that bare dot notation cannot carry unambiguously
fn needs_quoting(key: &str) -> bool {
    key.is_empty() || key.trim() != key || key.contains(['.', '[', ']', '"'])
}

/// Display implementation outputs dot notation
///
/// # Examples
///
/// ```rust
/// use pathdb::json_path::{JsonPath, PathSegment};
/// use std::str::FromStr;
///
/// let path = JsonPath::from_str("users[0].email").unwrap();
/// assert_eq!(path.to_string(), "users[0].email");
///
/// let dotted = JsonPath::from_segments(vec![PathSegment::Key("a.b".to_string())]);
/// assert_eq!(dotted.to_string(), r#"["a.b"]"#);
/// ```
impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if needs_quoting(key) => {
                    let quoted = serde_json::to_string(key).map_err(|_| fmt::Error)?;
                    write!(f, "[{}]", quoted)?;
                }
                PathSegment::Key(key) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", key)?;
                }
                PathSegment::Index(idx) => {
                    write!(f, "[{}]", idx)?;
                }
            }
        }
        Ok(())
    }
}

/// Error type for path parsing failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty path")]
    EmptyPath,

    #[error("Invalid array index at position {position}: expected digit, found '{found}'")]
    InvalidArrayIndex { position: usize, found: char },

    #[error("Unclosed bracket at position {position}")]
    UnclosedBracket { position: usize },

    #[error("Unexpected character '{0}' at position {1}")]
    UnexpectedCharacter(char, usize),

    #[error("JSON Pointer must be empty or start with '/'")]
    MissingLeadingSlash,

    #[error("Invalid quoted key at position {position}")]
    InvalidQuotedKey { position: usize },
}

/// Read a bracketed JSON string key; `chars` sits on the opening quote and
/// is left just past the closing bracket.
fn parse_quoted_key(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    pos: &mut usize,
) -> Result<String, ParseError> {
    let start = *pos;
    let mut raw = String::new();
    let mut escaped = false;
    let mut closed = false;

    for c in chars.by_ref() {
        *pos += 1;
        let opening = raw.is_empty();
        raw.push(c);
        if !opening && !escaped && c == '"' {
            closed = true;
            break;
        }
        escaped = !escaped && c == '\\';
    }

    if !closed {
        return Err(ParseError::UnclosedBracket { position: *pos });
    }
    match chars.next() {
        Some(']') => *pos += 1,
        Some(c) => return Err(ParseError::UnexpectedCharacter(c, *pos)),
        None => return Err(ParseError::UnclosedBracket { position: *pos }),
    }

    serde_json::from_str(&raw).map_err(|_| ParseError::InvalidQuotedKey { position: start })
}

/// Parse dot notation to create a JsonPath
impl FromStr for JsonPath {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::new());
        }

        let mut segments = Vec::new();
        let mut chars = s.chars().peekable();
        let mut pos = 0;

        while let Some(ch) = chars.next() {
            match ch {
                '.' => {
                    pos += 1;
                }
                '[' if chars.peek() == Some(&'"') => {
                    pos += 1;
                    let key = parse_quoted_key(&mut chars, &mut pos)?;
                    segments.push(PathSegment::Key(key));
                }
                '[' => {
                    pos += 1;
                    let mut index_str = String::new();

                    while let Some(&c) = chars.peek() {
                        if c.is_ascii_digit() {
                            index_str.push(c);
                            chars.next();
                            pos += 1;
                        } else {
                            break;
                        }
                    }

                    if index_str.is_empty() {
                        return Err(ParseError::InvalidArrayIndex {
                            position: pos,
                            found: chars.next().unwrap_or(' '),
                        });
                    }

                    match chars.next() {
                        Some(']') => {
                            pos += 1;
                        }
                        Some(c) => {
                            return Err(ParseError::UnexpectedCharacter(c, pos));
                        }
                        None => {
                            return Err(ParseError::UnclosedBracket { position: pos });
                        }
                    }

                    let index: usize =
                        index_str
                            .parse()
                            .map_err(|_| ParseError::InvalidArrayIndex {
                                position: pos - index_str.len() - 1,
                                found: index_str.chars().next().unwrap_or(' '),
                            })?;

                    segments.push(PathSegment::Index(index));
                }
                ']' => {
                    return Err(ParseError::UnexpectedCharacter(ch, pos));
                }
                _ => {
                    let mut key = String::new();
                    key.push(ch);
                    pos += 1;

                    while let Some(&c) = chars.peek() {
                        if c == '.' || c == '[' {
                            break;
                        }
                        key.push(c);
                        chars.next();
                        pos += 1;
                    }

                    segments.push(PathSegment::Key(key));
                }
            }
        }

        if segments.is_empty() {
            return Err(ParseError::EmptyPath);
        }

        Ok(Self { segments })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(s: &str) -> PathSegment {
        PathSegment::Key(s.to_string())
    }

    #[test]
    fn test_empty_path() {
        let path = JsonPath::new();
        assert!(path.is_empty());
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_parse_combined() {
        let path: JsonPath = "users[0].email".parse().unwrap();
        assert_eq!(
            path.segments(),
            &[key("users"), PathSegment::Index(0), key("email")]
        );
        assert_eq!(path.to_string(), "users[0].email");
    }

    #[test]
    fn test_parse_leading_index() {
        let path: JsonPath = "[1].name".parse().unwrap();
        assert_eq!(path.segments(), &[PathSegment::Index(1), key("name")]);
    }

    #[test]
    fn test_parse_errors() {
        assert!("items[]".parse::<JsonPath>().is_err());
        assert!("items[0".parse::<JsonPath>().is_err());
        assert_eq!("...".parse::<JsonPath>(), Err(ParseError::EmptyPath));
    }

    #[test]
    fn test_json_pointer_special_chars() {
        let path = JsonPath::from_segments(vec![key("a/b"), key("c~d")]);
        assert_eq!(JsonPath::from_json_pointer("/a~1b/c~0d").unwrap(), path);
    }

    #[test]
    fn test_numeric_pointer_token_is_index() {
        let pointer = JsonPath::from_json_pointer("/counts/0").unwrap();
        assert_eq!(pointer.segments(), &[key("counts"), PathSegment::Index(0)]);

        let dotted: JsonPath = "counts.0".parse().unwrap();
        assert_eq!(dotted.segments(), &[key("counts"), key("0")]);
    }

    #[test]
    fn test_from_json_pointer_indices() {
        let path = JsonPath::from_json_pointer("/users/0/email").unwrap();
        assert_eq!(path.to_string(), "users[0].email");
        assert!(JsonPath::from_json_pointer("").unwrap().is_empty());
        assert_eq!(
            JsonPath::from_json_pointer("users"),
            Err(ParseError::MissingLeadingSlash)
        );
    }

    #[test]
    fn test_parse_pattern_accepts_both_notations() {
        let dotted = JsonPath::parse_pattern("user.id").unwrap();
        let pointer = JsonPath::parse_pattern("/user/id").unwrap();
        assert_eq!(dotted, pointer);
    }

    #[test]
    fn test_blank_pattern_rejected() {
        assert_eq!(JsonPath::parse_pattern(""), Err(ParseError::EmptyPath));
        assert_eq!(JsonPath::parse_pattern("   "), Err(ParseError::EmptyPath));
        // FromStr still reads a blank string as the root
        assert!("".parse::<JsonPath>().unwrap().is_empty());
    }

    #[test]
    fn test_awkward_keys_are_quoted() {
        let path = JsonPath::from_segments(vec![
            key("a.b"),
            PathSegment::Index(2),
            key(""),
            key("x[1]"),
            key("say \"hi\""),
            key("plain"),
        ]);
        let rendered = path.to_string();
        assert_eq!(
            rendered,
            r#"["a.b"][2][""]["x[1]"]["say \"hi\""].plain"#
        );
        assert_eq!(rendered.parse::<JsonPath>().unwrap(), path);
    }

    #[test]
    fn test_quoted_key_errors() {
        assert!(matches!(
            r#"a["b"#.parse::<JsonPath>(),
            Err(ParseError::UnclosedBracket { .. })
        ));
        assert!(matches!(
            r#"a["b"x"#.parse::<JsonPath>(),
            Err(ParseError::UnexpectedCharacter('x', _))
        ));
    }

    #[test]
    fn test_matches_prefix() {
        let path: JsonPath = "user.profile.email".parse().unwrap();
        assert!(path.matches_prefix(&"user.profile".parse().unwrap()));
        assert!(path.matches_prefix(&JsonPath::new()));
        assert!(!path.matches_prefix(&"user.name".parse().unwrap()));
    }

    #[test]
    fn test_index_sorts_before_key() {
        assert!(PathSegment::Index(99) < key(""));
        assert!(PathSegment::Index(2) < PathSegment::Index(10));
        assert!(key("bar") < key("foo"));
    }

    #[test]
    fn test_path_order_is_lexicographic() {
        let mut paths: Vec<JsonPath> = vec![
            "foo".parse().unwrap(),
            "a.b".parse().unwrap(),
            "a".parse().unwrap(),
            "[3]".parse().unwrap(),
            "a[0]".parse().unwrap(),
        ];
        paths.sort();
        let rendered: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
        assert_eq!(rendered, vec!["[3]", "a", "a[0]", "a.b", "foo"]);
    }

    #[test]
    fn test_serialize_as_component_array() {
        let path = JsonPath::from_segments(vec![PathSegment::Index(0), key("age")]);
        assert_eq!(serde_json::to_value(&path).unwrap(), json!([0, "age"]));
        assert_eq!(serde_json::to_value(JsonPath::new()).unwrap(), json!([]));
    }

    #[test]
    fn test_hash() {
        use std::collections::HashSet;
        let path1: JsonPath = "users[0].email".parse().unwrap();
        let path2: JsonPath = "users[0].email".parse().unwrap();
        let path3: JsonPath = "users[1].email".parse().unwrap();

        let mut set = HashSet::new();
        set.insert(path1.clone());
        set.insert(path2);
        set.insert(path3.clone());

        assert_eq!(set.len(), 2);
        assert!(set.contains(&path1));
        assert!(set.contains(&path3));
    }
}
