//! Fetch Error Types

use thiserror::Error;

/// Fetch error type
#[derive(Error, Debug)]
pub enum FetchError {
    /// TCP connection error
    #[error("connection error: {0}")]
    ConnectionError(String),

    /// Connect or request timeout
    #[error("request timeout")]
    Timeout,

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP protocol error
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Response body could not be read
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// JSON serialization error
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;
