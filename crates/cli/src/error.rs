//! Error types for CLI commands
//!
//! Structured error types using thiserror. The library's typed errors pass
//! through transparently so vagrant's own diagnostics reach the terminal
//! unmodified; anything else is wrapped with enough context to act on.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during command execution
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CommandError {
    /// Configuration file could not be read or parsed
    #[error("Configuration error in {}: {source}", path.display())]
    Config {
        /// Path of the offending config file
        path: PathBuf,
        /// The underlying parse or read error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Working directory could not be determined
    #[error("Could not determine the Vagrantfile directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    /// Error from the vagabond client library
    #[error(transparent)]
    Client(#[from] vagabond_client::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CommandError {
    /// Create a `Config` error from any error type
    pub fn config<E: std::error::Error + Send + Sync + 'static>(path: PathBuf, err: E) -> Self {
        Self::Config {
            path,
            source: Box::new(err),
        }
    }
}

/// Result type alias for command operations
pub type Result<T> = std::result::Result<T, CommandError>;
