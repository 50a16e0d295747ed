//! API route configuration.

use crate::api::handlers::{health_handler, shorten_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET /shorten` - Create an alias from query parameters
/// - `GET /health`  - Store and visit queue health
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", get(shorten_handler))
        .route("/health", get(health_handler))
}
