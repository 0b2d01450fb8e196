//! pathdb - flatten nested JSON into path/value tuples
//!
//! This library enumerates the path of every scalar leaf in a nested
//! structure, lays those paths out as tuple databases for Datalog-style
//! querying, and diffs two structures path by path.

pub use db::{make_db, Database, FormatMode, Tuple};
pub use diff::{build_diff_index, diff, DiffIndex};
pub use enumerate::enumerate;
pub use error::PathDbError;
pub use formatter::{create_formatter, OutputFormat};
pub use json_path::{JsonPath, ParseError, PathSegment};
pub use loader::{load_json_file, load_json_input, load_json_stdin, LoadConfig};
pub use node::{lookup, Node};
pub use types::{ChangeKind, DiffOutcome, DiffRecord};

pub mod db;
mod diff;
mod enumerate;
mod error;
pub mod formatter;
pub mod json_path;
pub mod loader;
pub mod node;
pub mod types;
