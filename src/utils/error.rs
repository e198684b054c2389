//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the review dataset
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Data file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid CSV data: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Malformed row {row}: expected {expected} fields, found {found}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors raised when a string field cannot be parsed on demand.
///
/// Attributable to one record; aborts the query that hit it, not the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid rating {value:?} in row {row}")]
    InvalidRating { row: usize, value: String },
}

/// Errors that can occur during summary export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unsupported export format: {0:?} (expected csv, txt or json)")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
