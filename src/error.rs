//! Error types for markify.
//!
//! Conversion itself never fails: structural oddities in the HTML are resolved
//! with defaults. Errors only come from missing input or from fetching.

/// Error type for conversion and fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither HTML content nor a URL was supplied.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The URL to fetch could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a non-success status.
    #[error("Error status: {status}. Message: {reason}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status.
        reason: String,
    },

    /// The request failed before a response was received (or while reading it).
    #[error("Network error: {0}")]
    Network(String),

    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for markify operations.
pub type Result<T> = std::result::Result<T, Error>;
