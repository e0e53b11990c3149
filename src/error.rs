//! Error types for envcheck operations.
//!
//! This module defines [`EnvCheckError`], the error type used for host-side
//! failures, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A check that finds missing or mismatched variables is not an error; it
//!   returns a failed [`CheckResult`](crate::check::CheckResult)
//! - `EnvCheckError` covers configuration and catalog loading
//! - Use `anyhow::Error` (via `EnvCheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envcheck operations.
#[derive(Debug, Error)]
pub enum EnvCheckError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Failed to parse a message catalog.
    #[error("Failed to parse message catalog {source_name}: {message}")]
    CatalogParseError {
        source_name: String,
        message: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envcheck operations.
pub type Result<T> = std::result::Result<T, EnvCheckError>;
