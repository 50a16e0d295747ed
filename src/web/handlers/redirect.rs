//! Handler for alias redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::error::PageError;

/// Redirects an alias to its target URL with `307 Temporary Redirect`.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// The visit is queued for the background worker; the redirect never waits
/// for it.
///
/// # Errors
///
/// Renders the "Alias not found!" page with 404 if the alias does not exist.
/// A stored target that cannot be sent as a `Location` header (ASCII control
/// characters) is an internal failure and goes through the error boundary.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, PageError> {
    let target = state.alias_service.resolve(&alias).await?;

    let location = HeaderValue::from_str(&target).map_err(|e| {
        AppError::internal(
            "Invalid redirect target",
            format!("alias '{alias}' target is not a valid Location header: {e}"),
        )
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}
