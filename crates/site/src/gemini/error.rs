//! Error types for the Generative Language API client.

use thiserror::Error;

/// Errors that can occur when calling the Generative Language API.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with an error body.
    #[error("API error {code} ({status}): {message}")]
    Api {
        /// HTTP-style numeric code.
        code: u16,
        /// Canonical status, e.g. `INVALID_ARGUMENT`.
        status: String,
        /// Human-readable message.
        message: String,
    },

    /// Rate limited by the API.
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// The API key was rejected.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Failed to parse a response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The response carried no inline image.
    #[error("response contained no image")]
    NoImage,

    /// The inline image payload was unusable.
    #[error("invalid image payload: {0}")]
    InvalidImage(String),

    /// The configured API key cannot be sent as a header.
    #[error("invalid API key: {0}")]
    InvalidApiKey(String),
}

/// Error body returned by the API.
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

/// Nested error details.
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub status: String,
}
