//! Outermost error boundary.
//!
//! Any response carrying a [`FailureDetail`] (internal errors and caught
//! panics) is turned into an error record through the
//! [`crate::application::services::ErrorSink`], and the user gets the generic
//! error view with the correlation id.

use std::any::Any;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::api::middleware::tracing::redact_path;
use crate::error::{FailureDetail, INTERNAL_ERROR_MESSAGE};
use crate::state::AppState;
use crate::utils::time::unix_now;
use crate::web::error::internal_error_page;

/// Captures unhandled failures from inner handlers.
///
/// The recorded detail is prefixed with the request method and path so the
/// record can be located without the raw request. Delete secrets in the path
/// are masked before anything is stored or logged.
pub async fn layer(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = redact_path(request.uri().path()).to_string();

    let response = next.run(request).await;

    let Some(FailureDetail(detail)) = response.extensions().get::<FailureDetail>().cloned() else {
        return response;
    };

    let id = state
        .error_sink
        .capture(format!("{method} {path}: {detail}"), unix_now())
        .await;

    internal_error_page(id)
}

/// Converts a caught panic into a failure response for [`layer`].
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    let mut response = INTERNAL_ERROR_MESSAGE.into_response();
    *response.status_mut() = axum::http::StatusCode::INTERNAL_SERVER_ERROR;
    response
        .extensions_mut()
        .insert(FailureDetail(format!("panic: {message}")));
    response
}
