//! Handler for the query-string shorten API.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::shorten::{ShortenQuery, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Message returned when the `link` parameter is missing.
pub const MISSING_LINK: &str = "URL is required.";

/// Creates an alias for a URL.
///
/// # Endpoint
///
/// `GET /api/shorten?link=<url>&alias=<alias>`
///
/// # Response
///
/// ```json
/// { "alias": "k3x9q", "secret": "4f2c0d6e9a8b47c1b3e5f7a9c1d3e5f7" }
/// ```
///
/// # Errors
///
/// Returns 400 with `{"error": "..."}` on validation failure.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Query(query): Query<ShortenQuery>,
) -> Result<Json<ShortenResponse>, AppError> {
    let link = query.link.ok_or_else(|| AppError::validation(MISSING_LINK))?;

    let created = state
        .alias_service
        .create(&link, query.alias.as_deref())
        .await?;

    Ok(Json(created.into()))
}
