//! HTML rendering of errors.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::{AppError, INTERNAL_ERROR_MESSAGE};

/// Template for the error view.
///
/// `code` is the correlation id of a captured failure, if any.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
    pub code: Option<String>,
}

/// Renders the error view for an unhandled failure captured under `id`.
pub fn internal_error_page(id: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorTemplate {
            message: INTERNAL_ERROR_MESSAGE.to_string(),
            code: Some(id),
        },
    )
        .into_response()
}

/// An [`AppError`] rendered as HTML instead of JSON.
///
/// Internal errors keep their failure detail so the error boundary can
/// capture them.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let err = self.0;
        if err.is_internal() {
            return err.into_failure_response();
        }

        (
            err.status(),
            ErrorTemplate {
                message: err.public_message().to_string(),
                code: None,
            },
        )
            .into_response()
    }
}
