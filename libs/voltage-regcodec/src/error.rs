//! Register Codec Error Types
//!
//! Decoding itself is total; every variant here comes from loading rows or
//! writing reports.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for voltage-regcodec operations
pub type Result<T> = std::result::Result<T, RegCodecError>;

/// Register codec errors
#[derive(Debug, Error)]
pub enum RegCodecError {
    /// The tabular source could not be opened
    #[error("Source unavailable: {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Row has the wrong number of fields
    #[error("Malformed row {row}: expected {expected} fields, found {found}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Register field is not a 16-bit signed integer
    #[error("Error parsing {field} at row {row}: invalid value '{value}': {source}")]
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// CSV reader failure (bad UTF-8, I/O while reading)
    #[error("CSV error at row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

// Helper methods for creating errors
impl RegCodecError {
    pub fn source_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RegCodecError::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_field(
        row: usize,
        field: &'static str,
        value: impl Into<String>,
        source: ParseIntError,
    ) -> Self {
        RegCodecError::InvalidField {
            row,
            field,
            value: value.into(),
            source,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        RegCodecError::Config(msg.into())
    }

    /// Data row the error points at, if any
    pub fn row(&self) -> Option<usize> {
        match self {
            RegCodecError::MalformedRow { row, .. }
            | RegCodecError::InvalidField { row, .. }
            | RegCodecError::Csv { row, .. } => Some(*row),
            _ => None,
        }
    }
}
