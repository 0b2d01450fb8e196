use clap::{Parser, Subcommand};

use pathdb::{FormatMode, JsonPath, OutputFormat, PathDbError};

/// Command-line arguments for pathdb
#[derive(Parser, Debug)]
#[command(name = "pathdb")]
#[command(about = "Flatten nested JSON into path/value tuples and diff structures by path")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format (default: json)
    #[arg(short, long, global = true, default_value_t = OutputFormat::Json, hide_default_value = true)]
    pub format: OutputFormat,

    /// Maximum input size in bytes (default: 104857600, env: PATHDB_MAX_FILE_SIZE)
    #[arg(long, global = true)]
    pub max_file_size: Option<u64>,

    /// Maximum JSON nesting depth, at most 127 (default: 127, env: PATHDB_MAX_DEPTH)
    #[arg(long, global = true)]
    pub max_depth: Option<usize>,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the path of every scalar leaf
    Paths {
        /// JSON file, inline JSON string, or `-` for stdin
        input: String,
    },

    /// Print the tuple database for a structure
    Db {
        /// JSON file, inline JSON string, or `-` for stdin
        input: String,

        /// Tuple layout (default: plain)
        #[arg(short, long, default_value_t = FormatMode::Plain, hide_default_value = true)]
        mode: FormatMode,
    },

    /// Print the per-path differences between two structures
    Diff {
        /// First structure: JSON file, inline JSON string, or `-` for stdin
        a: String,

        /// Second structure: JSON file, inline JSON string, or `-` for stdin
        b: String,

        /// Ignore differences at or below this path (dot notation or JSON Pointer, repeatable).
        /// Digit-only pointer tokens are array indices; use dot notation (`counts.0`) for
        /// object keys made of digits
        #[arg(long)]
        ignore: Vec<String>,
    },
}

impl Args {
    /// Validate command-line arguments
    pub fn validate(&self) -> Result<(), PathDbError> {
        if let Command::Diff { a, b, .. } = &self.command {
            if a == "-" && b == "-" {
                return Err(PathDbError::InvalidArgs {
                    message: "only one input can be read from stdin".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Parse the `--ignore` patterns of a diff command
    pub fn ignore_paths(&self) -> Result<Vec<JsonPath>, PathDbError> {
        let patterns: &[String] = match &self.command {
            Command::Diff { ignore, .. } => ignore.as_slice(),
            _ => &[],
        };
        patterns
            .iter()
            .map(|pattern| {
                JsonPath::parse_pattern(pattern).map_err(|e| PathDbError::InvalidArgs {
                    message: format!("invalid ignore path '{}': {}", pattern, e),
                })
            })
            .collect()
    }

    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
