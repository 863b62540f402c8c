//! Error types for the kilnc driver.
//!
//! Lexical problems are not errors here: they arrive as Invalid tokens and
//! are reported as diagnostics. This enum covers what stops the driver
//! itself.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the kilnc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input file could not be read.
    #[error("cannot read '{}': {source}", path.display())]
    ReadSource {
        /// The file that was requested
        path: PathBuf,
        /// Underlying failure
        source: std::io::Error,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
