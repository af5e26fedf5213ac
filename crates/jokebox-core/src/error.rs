//! Error types for Jokebox core operations.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching and displaying jokes.
#[derive(Debug, Error)]
pub enum Error {
    /// No endpoint configured, or the configured value is unusable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request rejected, timed out, or returned a non-success status.
    #[error("Network error: {0}")]
    Network(String),

    /// Response body lacks the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
