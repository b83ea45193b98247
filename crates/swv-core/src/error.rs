//! Error types for the SWV toolkit

use thiserror::Error;

/// SWV toolkit error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration (bad parameter set, grid/window sizing).
    /// Raised before any simulation or analysis work begins.
    #[error("configuration error: {0}")]
    Config(String),

    /// The explicit diffusion scheme left its stability region.
    #[error("numerical instability: {0}")]
    Instability(String),

    /// Empty or too-short input series
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Computation error
    #[error("computation error: {0}")]
    Computation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
