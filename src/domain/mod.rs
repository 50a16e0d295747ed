//! Domain layer containing business entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`visit_worker`] - Asynchronous visit persistence
//!
//! # Visit Processing Flow
//!
//! 1. [`crate::application::services::AliasService::resolve`] finds the target
//! 2. A [`entities::Visit`] is handed to the [`crate::application::services::VisitRecorder`]
//! 3. [`visit_worker::run_visit_worker`] persists it with retry logic
//! 4. The redirect response never waits for step 3

pub mod entities;
pub mod repositories;
pub mod visit_worker;
