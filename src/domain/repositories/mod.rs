//! Repository trait definitions for the domain layer.
//!
//! These traits are the narrow storage contract the services depend on:
//! get-by-key, put, delete-by-key and a query by secret. Concrete stores live
//! in `crate::infrastructure`.
//!
//! # Available Repositories
//!
//! - [`AliasRepository`] - Alias records (`links`)
//! - [`VisitRepository`] - Visit history (`views`)
//! - [`ErrorRepository`] - Error records (`errors`)
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod alias_repository;
pub mod error_repository;
pub mod visit_repository;

pub use alias_repository::AliasRepository;
pub use error_repository::ErrorRepository;
pub use visit_repository::VisitRepository;

#[cfg(test)]
pub use alias_repository::MockAliasRepository;
#[cfg(test)]
pub use error_repository::MockErrorRepository;
#[cfg(test)]
pub use visit_repository::MockVisitRepository;
