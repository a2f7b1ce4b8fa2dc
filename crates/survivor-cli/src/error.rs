//! Error types for the survivor CLI.

use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running the CLI.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid chair count or other core failure.
    #[error(transparent)]
    Core(#[from] survivor_core::Error),

    /// Malformed command line or environment.
    #[error("usage error: {0}")]
    Usage(String),

    /// The two methods disagree.
    #[error("methods disagree: recurrence says #{fast}, brute force says #{brute}")]
    Mismatch {
        fast: u64,
        brute: u64,
    },

    /// Report serialization failed.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
