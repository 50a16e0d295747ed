//! Handler for secret-based deletion.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::state::AppState;
use crate::web::error::PageError;

/// Deletes the alias owned by `secret` and returns to the home page.
///
/// # Endpoint
///
/// `GET /delete/{secret}`
///
/// # Errors
///
/// Renders a 404 error page if the secret matches no alias, including a
/// secret whose alias was already deleted.
pub async fn delete_handler(
    Path(secret): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, PageError> {
    state.alias_service.delete(&secret).await?;
    Ok(Redirect::to("/"))
}
