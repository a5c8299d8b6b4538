//! Error types for neo CLI operations.

use std::io;
use thiserror::Error;

/// The error type for neo CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Loading or querying the data failed.
    #[error(transparent)]
    Data(#[from] neo_core::Error),

    /// No NEO matched the lookup.
    #[error("NEO not found: {0}")]
    NeoNotFound(String),
}

/// A specialized Result type for neo CLI operations.
pub type Result<T> = std::result::Result<T, Error>;
