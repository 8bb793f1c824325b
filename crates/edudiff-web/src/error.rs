//! Error types for the web front end.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can occur while handling a request.
#[derive(Debug, Error)]
pub enum WebError {
    /// The chat page view is unknown or was evicted.
    #[error("Chat session not found: {0}")]
    ChatNotFound(String),

    /// The request carries no signed-in identity.
    #[error("Not signed in")]
    Unauthorized,

    /// No profile has been synced for the signed-in identity yet.
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] database::DatabaseError),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            WebError::ChatNotFound(_) | WebError::ProfileNotFound(_) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            WebError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            WebError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for request handlers.
pub type Result<T> = std::result::Result<T, WebError>;
