//! Error types for the vecsyn library.
//!
//! All fallible operations return [`VecsynError`] through the crate-wide
//! [`Result`] alias. Reaching the end of a token stream is not an error; it is
//! reported as `Ok(None)` by [`TokenStream::next_token`].
//!
//! [`TokenStream::next_token`]: crate::analysis::token_stream::TokenStream::next_token
//!
//! # Examples
//!
//! ```
//! use vecsyn::error::{Result, VecsynError};
//!
//! fn lookup() -> Result<()> {
//!     Err(VecsynError::oracle("embedding backend unavailable"))
//! }
//!
//! match lookup() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for vecsyn operations.
#[derive(Error, Debug)]
pub enum VecsynError {
    /// I/O errors (configuration and table files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// The similarity oracle could not be queried.
    ///
    /// Raised from inside a pull; the pull is aborted and no token is returned.
    #[error("Oracle error: {0}")]
    Oracle(String),

    /// A stream was driven in a way its lifecycle does not allow,
    /// e.g. pulling from a closed stream.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

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

/// Result type alias for operations that may fail with VecsynError.
pub type Result<T> = std::result::Result<T, VecsynError>;

impl VecsynError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        VecsynError::Analysis(msg.into())
    }

    /// Create a new oracle error.
    pub fn oracle<S: Into<String>>(msg: S) -> Self {
        VecsynError::Oracle(msg.into())
    }

    /// Create a new invalid state error.
    pub fn invalid_state<S: Into<String>>(msg: S) -> Self {
        VecsynError::InvalidState(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        VecsynError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        VecsynError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        VecsynError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = VecsynError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = VecsynError::oracle("backend down");
        assert_eq!(error.to_string(), "Oracle error: backend down");

        let error = VecsynError::invalid_state("stream closed");
        assert_eq!(error.to_string(), "Invalid state: stream closed");

        let error = VecsynError::invalid_argument("bad");
        assert_eq!(error.to_string(), "Error: Invalid argument: bad");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = VecsynError::from(io_error);

        match error {
            VecsynError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
