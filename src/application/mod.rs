//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::alias_service::AliasService`] - Alias creation, resolution and deletion
//! - [`services::visit_recorder::VisitRecorder`] - Fire-and-forget visit submission
//! - [`services::error_sink::ErrorSink`] - Correlation records for unhandled failures

pub mod services;
