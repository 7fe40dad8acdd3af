//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O errors and provides semantic variants for engine
//! detection, conversion, and input validation failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No conversion engine available: {0}")]
    EngineNotFound(String),

    #[error("Conversion failed: {0}")]
    ConversionFailed(String),

    #[error("Invalid input file {path:?}: {reason}")]
    InvalidInput { path: PathBuf, reason: String },

    #[error("Output write failed: {0}")]
    OutputWrite(String),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
