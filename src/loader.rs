use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::PathDbError;

/// Default maximum input size: 100 MiB
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;
/// Deepest nesting serde_json's parser accepts; it stops at its 128th
/// open container.
pub const PARSER_DEPTH_LIMIT: usize = 127;
/// Default maximum nesting depth
pub const DEFAULT_MAX_DEPTH: usize = PARSER_DEPTH_LIMIT;

pub const ENV_MAX_FILE_SIZE: &str = "PATHDB_MAX_FILE_SIZE";
pub const ENV_MAX_DEPTH: &str = "PATHDB_MAX_DEPTH";

/// Limits applied while loading input documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadConfig {
    pub max_file_size: u64,
    pub max_depth: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl LoadConfig {
    /// Defaults overridden by `PATHDB_MAX_FILE_SIZE` / `PATHDB_MAX_DEPTH`
    ///
    /// Unparsable values are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(size) = env_parse::<u64>(ENV_MAX_FILE_SIZE) {
            config.max_file_size = size;
        }
        if let Some(depth) = env_parse::<usize>(ENV_MAX_DEPTH) {
            config.max_depth = depth;
        }
        config
    }

    /// Reject limits the parser cannot honour
    pub fn validate(&self) -> Result<(), PathDbError> {
        if self.max_depth > PARSER_DEPTH_LIMIT {
            return Err(PathDbError::InvalidArgs {
                message: format!(
                    "max depth {} exceeds the supported maximum of {}",
                    self.max_depth, PARSER_DEPTH_LIMIT
                ),
            });
        }
        Ok(())
    }

    /// Apply explicit overrides (e.g. from CLI flags) on top of this config
    pub fn with_overrides(mut self, max_file_size: Option<u64>, max_depth: Option<usize>) -> Self {
        if let Some(size) = max_file_size {
            self.max_file_size = size;
        }
        if let Some(depth) = max_depth {
            self.max_depth = depth;
        }
        self
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(variable = name, value = %raw, "ignoring unparsable environment override");
            None
        }
    }
}

/// Load and parse a JSON file
pub fn load_json_file(path: &Path, config: &LoadConfig) -> Result<Value, PathDbError> {
    if !path.exists() {
        return Err(PathDbError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            ),
        });
    }

    if !path.is_file() {
        return Err(PathDbError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Not a file: {}", path.display()),
            ),
        });
    }

    let size = fs::metadata(path)
        .map_err(|source| PathDbError::FileRead {
            path: path.to_path_buf(),
            source,
        })?
        .len();
    if size > config.max_file_size {
        return Err(PathDbError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            limit: config.max_file_size,
        });
    }

    let content = fs::read_to_string(path).map_err(|source| PathDbError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = size, "loaded file");
    parse_with_limits(&content, path, config)
}

/// Load JSON from stdin
pub fn load_json_stdin(config: &LoadConfig) -> Result<Value, PathDbError> {
    let stdin_path = PathBuf::from("<stdin>");
    let mut content = String::new();
    std::io::stdin()
        .take(config.max_file_size.saturating_add(1))
        .read_to_string(&mut content)
        .map_err(|source| PathDbError::FileRead {
            path: stdin_path.clone(),
            source,
        })?;

    if content.len() as u64 > config.max_file_size {
        return Err(PathDbError::FileTooLarge {
            path: stdin_path,
            size: content.len() as u64,
            limit: config.max_file_size,
        });
    }

    parse_with_limits(&content, &stdin_path, config)
}

/// Resolve a CLI input argument
///
/// `-` reads stdin and an existing path is read as a file. Anything else
/// that starts like a JSON container, or parses as a JSON scalar, is inline
/// JSON; the rest is reported as a missing file.
pub fn load_json_input(input: &str, config: &LoadConfig) -> Result<Value, PathDbError> {
    if input == "-" {
        return load_json_stdin(config);
    }

    let path = Path::new(input);
    if path.exists() {
        return load_json_file(path, config);
    }

    if looks_like_json(input) || serde_json::from_str::<Value>(input).is_ok() {
        debug!(bytes = input.len(), "parsing inline JSON");
        return parse_with_limits(input, Path::new("<inline>"), config);
    }

    load_json_file(path, config)
}

fn looks_like_json(input: &str) -> bool {
    matches!(input.trim_start().chars().next(), Some('{') | Some('['))
}

fn parse_with_limits(content: &str, origin: &Path, config: &LoadConfig) -> Result<Value, PathDbError> {
    let value: Value = serde_json::from_str(content).map_err(|source| PathDbError::JsonParse {
        path: origin.to_path_buf(),
        source,
    })?;

    let depth = nesting_depth(&value);
    if depth > config.max_depth {
        return Err(PathDbError::DepthExceeded {
            depth,
            limit: config.max_depth,
        });
    }

    Ok(value)
}

/// Container nesting depth; scalars are depth 0, `{}` and `[]` are depth 1
pub fn nesting_depth(value: &Value) -> usize {
    let mut max = 0;
    let mut stack = vec![(value, 0usize)];

    while let Some((current, depth)) = stack.pop() {
        match current {
            Value::Object(map) => {
                max = max.max(depth + 1);
                stack.extend(map.values().map(|v| (v, depth + 1)));
            }
            Value::Array(items) => {
                max = max.max(depth + 1);
                stack.extend(items.iter().map(|v| (v, depth + 1)));
            }
            _ => {}
        }
    }

    max
}
