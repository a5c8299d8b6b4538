//! Error types for neo-core operations.

use std::io;
use thiserror::Error;

/// The error type for neo-core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading a data file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV decoding error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A data row could not be turned into a record.
    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord {
        /// 1-based data row (header excluded).
        row: usize,
        /// What was wrong with it.
        message: String,
    },

    /// A required column is missing from a data file.
    #[error("Missing column: {0}")]
    MissingColumn(&'static str),

    /// No extraction rule exists for the named attribute.
    #[error("Unsupported criterion: {0}")]
    UnsupportedCriterion(String),

    /// A criterion expression could not be parsed.
    #[error("Invalid criterion: {0}")]
    InvalidCriterion(String),

    /// A NEO attribute was requested on an approach without a linked NEO.
    #[error("Close approach of '{designation}' is not linked to a NEO")]
    UnlinkedApproach {
        /// Designation carried by the approach.
        designation: String,
    },

    /// The comparator is undefined for the extracted and reference values.
    #[error("Values of attribute '{attribute}' are not comparable")]
    Incomparable {
        /// Attribute being compared.
        attribute: &'static str,
    },
}

/// A specialized Result type for neo-core operations.
pub type Result<T> = std::result::Result<T, Error>;
