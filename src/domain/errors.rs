//! Domain errors. Returned by ports and the use case.
//!
//! Adapters map infrastructure errors into these; only the binary turns them
//! into printed messages and exit codes.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Argument missing, non-integer, or not a positive integer.
    #[error("{0}")]
    InvalidInput(String),

    /// Employee lookup returned a non-success status.
    #[error("Employee with ID {0} not found")]
    NotFound(u64),

    /// To-do list lookup returned a non-success status.
    #[error("Could not fetch TODO list for employee {0}")]
    FetchFailure(u64),

    /// Connection-level failure on either call.
    #[error("Failed to connect to API - {0}")]
    Network(String),

    /// Body did not have the expected JSON shape.
    #[error("Malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },

    #[error("{0}")]
    Unexpected(String),
}

impl ReportError {
    pub fn not_an_integer() -> Self {
        Self::InvalidInput("Employee ID must be an integer".to_string())
    }

    pub fn not_positive() -> Self {
        Self::InvalidInput("Employee ID must be a positive integer".to_string())
    }
}
