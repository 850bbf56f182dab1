//! # Shell Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Shell Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │    Catalog      │  │      Commands           │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Config         │  │  Io             │  │  UnknownCommand         │ │
//! │  │                 │  │  Json           │  │  Usage                  │ │
//! │  │                 │  │                 │  │  Core (not found, ...)  │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Command errors are printed and the session continues. Configuration and
//! catalog errors abort startup.

use thiserror::Error;

use crate::config::ConfigError;
use shophub_core::{CoreError, ValidationError};

/// Result type alias for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not a JSON array of products.
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown command '{0}'. Type `help` for a list of commands.")]
    UnknownCommand(String),

    /// A known command with missing or malformed arguments.
    #[error("Usage: {0}")]
    Usage(&'static str),
}

impl From<ValidationError> for ShellError {
    fn from(err: ValidationError) -> Self {
        ShellError::Core(CoreError::Validation(err))
    }
}
