//! Error types for mlnkit

use thiserror::Error;

/// mlnkit error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
