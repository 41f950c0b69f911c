//! Error types and HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reports::ValidationError;
use crate::repository::RepositoryError;

/// Result type alias using the service error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service
///
/// Large error variants are boxed to reduce stack size
#[derive(Debug, Error)]
pub enum Error {
    /// Payload failed a validation rule (400)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Malformed request that never reached validation (400)
    #[error("{0}")]
    BadRequest(String),

    /// Resource not found (404)
    #[error("{0}")]
    NotFound(String),

    /// Structured store error with operation context
    #[error("{0}")]
    Repository(#[from] RepositoryError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

/// Error response body
///
/// Shared by every failing endpoint: `{"success": false, "message": "..."}`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,

    /// Client-facing description
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl Error {
    /// HTTP status code this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Repository(_) | Error::Config(_) | Error::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            Error::Validation(e) => e.to_string(),
            Error::BadRequest(msg) | Error::NotFound(msg) => msg,

            Error::Repository(ref e) => {
                // Details stay in the log
                tracing::error!(
                    status = status.as_u16(),
                    operation = %e.operation,
                    kind = %e.kind,
                    entity_id = ?e.entity_id,
                    retriable = e.is_retriable(),
                    "Store error: {}", e.message
                );
                "database operation failed".to_string()
            }

            Error::Config(ref e) => {
                tracing::error!(status = status.as_u16(), "Configuration error: {}", e);
                "internal server error".to_string()
            }

            Error::Io(ref e) => {
                tracing::error!(status = status.as_u16(), "I/O error: {}", e);
                "internal server error".to_string()
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
