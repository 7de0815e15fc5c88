//! Error types for scriptman-core.
//!
//! The taxonomy follows the two phases of a documentation run:
//!
//! - **Discovery errors**: the script directory is missing or unreadable
//! - **Extraction errors**: a script process could not be launched or was
//!   killed by a signal
//!
//! A non-zero exit status from a help invocation is deliberately NOT an
//! error: many scripts exit non-zero after printing usage, and whatever
//! they wrote to stdout is still the help text we want.

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for scriptman operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The script directory does not exist or is not a directory.
    #[error("script directory not found: {path}")]
    DirectoryNotFound {
        /// Path that was scanned
        path: PathBuf,
    },

    /// The script directory exists but cannot be read.
    #[error("permission denied reading script directory: {path}")]
    PermissionDenied {
        /// Path that was scanned
        path: PathBuf,
    },

    /// A script process could not be started or died abnormally.
    #[error("failed to execute script '{script}': {reason}")]
    ScriptExecutionFailed {
        /// Identifier of the script that failed
        script: String,
        /// What went wrong (launch failure, signal, ...)
        reason: String,
    },

    /// Configuration value failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration file could not be parsed.
    #[error("failed to parse {path}: {message}")]
    ConfigParse {
        /// File that failed to parse
        path: PathBuf,
        /// Parser diagnostic
        message: String,
    },

    /// Other filesystem failures (stat, read, write).
    #[error("io error on {path}: {message}")]
    Io {
        /// Path involved in the operation
        path: PathBuf,
        /// Underlying error text
        message: String,
    },
}

impl Error {
    /// Create an execution error naming the script and the reason.
    pub fn script_execution_failed(script: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ScriptExecutionFailed {
            script: script.into(),
            reason: reason.into(),
        }
    }

    /// Create an IO error carrying the path it happened on.
    pub fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for scriptman-core operations.
pub type Result<T> = std::result::Result<T, Error>;
