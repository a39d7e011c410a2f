//! Application layer errors.
//!
//! These represent failures in orchestration and generation, not naming
//! violations; those are reported skips handled by the service.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while orchestrating or running the generators.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// One or more requested packages are not installed. Raised after every
    /// requested name has been attempted.
    #[error("unknown package(s): {}", .names.join(", "))]
    PackagesNotFound { names: Vec<String> },

    /// The package registry could not be consulted.
    #[error("package registry error: {reason}")]
    Registry { reason: String },

    /// Reading a discovered source file failed mid-generation.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a generated artifact failed. No cleanup is attempted; a
    /// re-run completes the remainder.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApplicationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PackagesNotFound { .. } => ErrorCategory::NotFound,
            Self::Registry { .. } => ErrorCategory::Configuration,
            Self::Read { .. } | Self::Write { .. } => ErrorCategory::Internal,
        }
    }
}
