//! Error types for generation-client.

use chat_core::GenerationError;
use thiserror::Error;

/// Message used when a failed response carries no readable reason.
pub const DEFAULT_FAILURE_REASON: &str = "Failed to generate video";

/// Errors that can occur when talking to the generation backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the expected JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success status from the backend.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
}

impl From<ApiError> for GenerationError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Http(e) => GenerationError::Unavailable(e.to_string()),
            ApiError::Json(e) => GenerationError::InvalidResponse(e.to_string()),
            ApiError::Status { status, message } => GenerationError::Status { status, message },
        }
    }
}
