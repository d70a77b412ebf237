//! Error types for layer staging.
//!
//! This module defines [`StageError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `StageError` for failures that end a run with a distinct exit status
//! - Use `anyhow::Error` (via `StageError::Other`) for unexpected errors
//! - A failed constrained install is not an error; only the fallback's
//!   failure surfaces as [`StageError::InstallFailed`]

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for staging operations.
#[derive(Debug, Error)]
pub enum StageError {
    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The layer directory tree could not be created.
    #[error("Failed to create layer directory {path}: {source}")]
    LayoutCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external process could not be started.
    #[error("Failed to start '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Both the constrained and the unconstrained install failed.
    #[error("Installer failed with exit code {code:?}: {command}")]
    InstallFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StageError {
    /// Process exit status to report for this error.
    ///
    /// Installer failures propagate the installer's own code when it fits in
    /// a process exit status; everything else exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InstallFailed {
                code: Some(code), ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }
}

/// Result type alias for staging operations.
pub type Result<T> = std::result::Result<T, StageError>;
