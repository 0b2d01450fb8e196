use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for pathdb operations
#[derive(Debug, Error)]
pub enum PathDbError {
    /// The top-level value handed to path enumeration is not a container
    #[error("Invalid input: expected an object or array at the top level, found {kind}")]
    InvalidInput { kind: &'static str },

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse JSON from {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("File {path} is {size} bytes, which exceeds the limit of {limit} bytes")]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("JSON nesting depth {depth} exceeds the limit of {limit}")]
    DepthExceeded { depth: usize, limit: usize },

    #[error("Invalid arguments: {message}")]
    InvalidArgs { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<std::io::Error> for PathDbError {
    fn from(error: std::io::Error) -> Self {
        PathDbError::FileRead {
            path: PathBuf::new(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for PathDbError {
    fn from(error: serde_json::Error) -> Self {
        PathDbError::JsonParse {
            path: PathBuf::new(),
            source: error,
        }
    }
}
