//! Error types for Skipper
//!
//! Uses `thiserror` for library errors. Failures of external commands are
//! not caught or retried; they surface here with the child's exit code so
//! the binary can propagate it.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Skipper operations
pub type SkipperResult<T> = Result<T, SkipperError>;

/// Main error type for Skipper operations
#[derive(Error, Debug)]
pub enum SkipperError {
    /// External command could not be started at all
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// External command ran and exited non-zero
    #[error("'{program}' exited with status {code}")]
    CommandFailed { program: String, code: i32 },

    /// External command was terminated by a signal
    #[error("'{program}' was terminated by a signal")]
    CommandKilled { program: String },

    /// Deploy environment name not found in config or built-ins
    #[error("unknown environment '{name}'")]
    UnknownEnvironment { name: String },

    /// Deploy environment has an empty host list
    #[error("environment '{name}' has no hosts configured")]
    NoHosts { name: String },

    /// Local build output directory is missing
    #[error("build directory not found: {path} (run 'skipper build' first)")]
    BuildDirMissing { path: PathBuf },

    /// Invalid config TOML
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SkipperError {
    /// Exit code the process should propagate for this error.
    ///
    /// A failed external command reuses the child's own exit code so the
    /// CLI is transparent to scripts; everything else is 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            SkipperError::CommandFailed { code, .. } => u8::try_from(*code).unwrap_or(1),
            _ => 1,
        }
    }
}
