//! Error types for the pravopis library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`PravopisError`] enum.
//!
//! # Examples
//!
//! ```
//! use pravopis::error::{PravopisError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PravopisError::lexicon("word list not found"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for pravopis operations.
#[derive(Error, Debug)]
pub enum PravopisError {
    /// I/O errors (reading input text, writing reports, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Lexicon initialization errors (word source missing or unreadable)
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Snapshot errors (corrupt or incompatible persisted lexicon)
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Analysis errors (tokenization, malformed input encoding)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with PravopisError.
pub type Result<T> = std::result::Result<T, PravopisError>;

impl PravopisError {
    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        PravopisError::Lexicon(msg.into())
    }

    /// Create a new snapshot error.
    pub fn snapshot<S: Into<String>>(msg: S) -> Self {
        PravopisError::Snapshot(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        PravopisError::Analysis(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        PravopisError::InvalidOperation(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PravopisError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PravopisError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = PravopisError::lexicon("word list not found");
        assert_eq!(error.to_string(), "Lexicon error: word list not found");

        let error = PravopisError::snapshot("checksum mismatch");
        assert_eq!(error.to_string(), "Snapshot error: checksum mismatch");

        let error = PravopisError::analysis("invalid UTF-8");
        assert_eq!(error.to_string(), "Analysis error: invalid UTF-8");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = PravopisError::from(io_error);

        match error {
            PravopisError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
