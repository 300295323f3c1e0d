//! Error types for the Nebula culling crate
//!
//! The culling core itself raises no errors: bad inputs (non-finite
//! transforms, negative extents, degenerate matrices) propagate
//! arithmetically rather than being rejected. The only fallible surface
//! is configuration loading.

use std::fmt;

/// Result type for nebula_culling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Nebula culling errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Configuration file could not be read
    Io(String),

    /// Configuration file could not be parsed
    Parse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
