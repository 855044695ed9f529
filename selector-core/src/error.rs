//! # Core Error Types
//!
//! Centralized error definitions for the selector-core crate.
//! A search that finds nothing is not an error; see [`crate::RunOutcome`].

use thiserror::Error;

/// Unified error type for a single resolver run.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Usage(UsageError),

    #[error(transparent)]
    Input(InputError),

    #[error(transparent)]
    Report(ReportError),
}

impl From<UsageError> for CoreError {
    fn from(e: UsageError) -> Self {
        CoreError::Usage(e)
    }
}

impl From<InputError> for CoreError {
    fn from(e: InputError) -> Self {
        CoreError::Input(e)
    }
}

impl From<ReportError> for CoreError {
    fn from(e: ReportError) -> Self {
        CoreError::Report(e)
    }
}

/// Command-line usage errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("Usage: find-error <abi_filename> [0xerror_selector]")]
    MissingAbiPath,

    #[error("Invalid selector '{input}': {reason}")]
    InvalidSelector { input: String, reason: String },
}

/// Errors reading or decoding the ABI document
#[derive(Error, Debug)]
pub enum InputError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in ABI document: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("ABI document must be a JSON array, found {found}")]
    NotAnArray { found: &'static str },

    #[error("Malformed ABI entry at index {index}: {source}")]
    MalformedEntry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("No embedded ABI string found in Go binding {path}")]
    MissingGoAbi { path: String },
}

/// Failures writing to the report sink
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),
}
