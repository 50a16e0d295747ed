//! Public site route configuration.

use crate::state::AppState;
use crate::web::handlers::{delete_handler, home_handler, redirect_handler, web_shorten_handler};
use axum::{Router, routing::get};

/// Public HTML routes.
///
/// # Endpoints
///
/// - `GET  /`                - Home page with create form
/// - `POST /`                - Create an alias from the form
/// - `GET  /delete/{secret}` - Delete the alias owned by `secret`
/// - `GET  /{alias}`         - Redirect to the target URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler).post(web_shorten_handler))
        .route("/delete/{secret}", get(delete_handler))
        .route("/{alias}", get(redirect_handler))
}
