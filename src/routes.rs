//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`                - Home page (form)
//! - `POST /`                - Create an alias from the form
//! - `GET  /{alias}`         - Alias redirect
//! - `GET  /delete/{secret}` - Secret-based deletion
//! - `/api/*`                - JSON API (shorten, health)
//!
//! # Middleware (outermost first)
//!
//! - **Tracing** - Structured request/response logging
//! - **Error boundary** - Records unhandled failures, renders the error view
//! - **Catch panic** - Turns handler panics into failures for the boundary
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::middleware::error_boundary;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

// Panics are only turned into error records when they unwind.
#[cfg(panic = "abort")]
compile_error!("url-alias must be built with panic = \"unwind\"");

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}

/// Routes and middleware without path normalization.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api::routes::routes())
        .merge(web::routes::routes())
        .with_state(state.clone())
        .layer(CatchPanicLayer::custom(error_boundary::panic_response))
        .layer(middleware::from_fn_with_state(state, error_boundary::layer))
        .layer(tracing::layer())
}
