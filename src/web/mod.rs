//! Public HTML site: home page, redirects and deletion.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`error`] - HTML error view
//! - [`handlers`] - Page and redirect handlers
//! - [`middleware`] - Error boundary
//! - [`routes`] - Route configuration

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
