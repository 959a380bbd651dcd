//! Custom error types for ucoa-export
//!
//! This module defines the error hierarchy for the tool using thiserror
//! for ergonomic error definitions. Every error is fatal: this is a
//! one-shot batch transform with no retry or partial-success mode.

use thiserror::Error;

/// The main error type for ucoa-export operations
#[derive(Error, Debug)]
pub enum UcoaError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV read/parse errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// A required input column is absent from the header row
    #[error("{file} file is missing required column '{column}'")]
    MissingColumn {
        file: &'static str,
        column: &'static str,
    },

    /// A Prefix value could not be parsed as an integer
    #[error("{file} file row {row}: invalid prefix '{value}' (expected an integer)")]
    InvalidPrefix {
        file: &'static str,
        row: usize,
        value: String,
    },

    /// A data row could not be deserialized
    #[error("{file} file row {row}: {message}")]
    BadRow {
        file: &'static str,
        row: usize,
        message: String,
    },

    /// Output serialization errors
    #[error("Export error: {0}")]
    Export(String),
}

impl UcoaError {
    /// Check if this is a missing-column error
    pub fn is_missing_column(&self) -> bool {
        matches!(self, Self::MissingColumn { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for UcoaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for UcoaError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for ucoa-export operations
pub type UcoaResult<T> = Result<T, UcoaError>;
