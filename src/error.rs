//! Error types for the dotlog note system
//!
//! Structured error definitions via thiserror, with anyhow as the
//! propagation escape hatch for one-off contexts.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dotlog operations
#[derive(Error, Debug)]
pub enum DotlogError {
    /// Store file missing or unreadable; the store must be (re)initialized
    /// via `dotlog migrate` before anything else works
    #[error("note store unavailable at {}: {reason}", .path.display())]
    StoreUnavailable { path: PathBuf, reason: String },

    /// Current directory is not under the configured root
    #[error("current directory {} is not under the note root", .0.display())]
    OutOfScope(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Result type alias for dotlog operations
pub type Result<T> = std::result::Result<T, DotlogError>;

impl From<anyhow::Error> for DotlogError {
    fn from(err: anyhow::Error) -> Self {
        DotlogError::Other(err.to_string())
    }
}
