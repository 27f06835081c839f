//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Every body carries an `error` kind and a human readable `message`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Nothing scheduled or nothing answered (404)
    NotFound { message: String },

    /// Database error (500, logged)
    Database(DbError),
}

const GENERIC_MESSAGE: &str = "an internal error occurred";

/// JSON error body, documented for the OpenAPI output
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    /// Error kind: `validation_error`, `not_found` or `internal_error`
    #[schema(example = "not_found")]
    pub error: String,
    #[schema(example = "No question planned for today")]
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, "validation_error", e.to_string()),
            Self::NotFound { message } => (StatusCode::NOT_FOUND, "not_found", message),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    GENERIC_MESSAGE.to_owned(),
                )
            }
        };

        let body = ErrorBody {
            error: kind.to_owned(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { message, .. } => Self::NotFound { message },
            _ => Self::Database(e),
        }
    }
}
