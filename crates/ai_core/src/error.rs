//! Generation errors

use thiserror::Error;

/// Errors that can occur when calling the generation service
#[derive(Debug, Error)]
pub enum GenerationError {
    /// API key missing from configuration
    #[error("Missing API key for generation service")]
    MissingApiKey,

    /// Failed to connect to the generation service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the generation service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response did not contain usable generated text
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during generation
    #[error("Generation timeout after {0}ms")]
    Timeout(u64),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Server-side error
    #[error("Server error: {0}")]
    ServerError(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(30000)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
