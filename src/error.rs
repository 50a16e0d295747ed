//! Application error type and its HTTP representation.
//!
//! Validation and not-found errors are expected outcomes and are rendered to
//! the caller verbatim. Internal errors never expose their detail: the
//! response carries a [`FailureDetail`] extension which the error boundary
//! (see [`crate::web::middleware::error_boundary`]) turns into a persisted
//! error record and a correlation id.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Message shown to end users for any unexpected failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Errors produced by services and repositories.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// Bad input to a create request. The message is safe to show.
    #[error("{0}")]
    Validation(String),

    /// Unknown alias or unknown secret.
    #[error("{0}")]
    NotFound(String),

    /// A conditional insert lost against an existing key.
    #[error("{0}")]
    Conflict(String),

    /// Anything else. `detail` is diagnostic only.
    #[error("{message}: {detail}")]
    Internal { message: String, detail: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that may be shown to the end user.
    pub fn public_message(&self) -> &str {
        match self {
            AppError::Validation(m) | AppError::NotFound(m) | AppError::Conflict(m) => m,
            AppError::Internal { .. } => INTERNAL_ERROR_MESSAGE,
        }
    }

    /// Returns true for errors that must go through the error log sink.
    pub fn is_internal(&self) -> bool {
        matches!(self, AppError::Internal { .. })
    }

    /// Builds the bare response for an internal failure.
    ///
    /// The body is a placeholder; the error boundary replaces it once the
    /// failure has been captured.
    pub fn into_failure_response(self) -> Response {
        let detail = FailureDetail(self.to_string());
        let mut response = (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).into_response();
        response.extensions_mut().insert(detail);
        response
    }
}

/// Diagnostic description of an unhandled failure, attached to the response
/// so the outermost middleware can record it.
#[derive(Debug, Clone)]
pub struct FailureDetail(pub String);

/// JSON body for API errors: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_internal() {
            return self.into_failure_response();
        }

        let status = self.status();
        let body = ErrorBody {
            error: self.public_message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict("Unique constraint violation");
        }

        AppError::internal("Database error", e.to_string())
    }
}
