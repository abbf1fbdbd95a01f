//! CLI-specific error types
//!
//! Every CLI error is fatal; main prints it and exits non-zero.

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("config error: {0}")]
    Config(String),

    /// Filesystem error
    #[error("io error: {0}")]
    Io(String),

    /// Init target already exists
    #[error("already initialized: {0}")]
    AlreadyInitialized(String),

    /// Server failed to start or crashed
    #[error("boot failed: {0}")]
    Boot(String),
}
