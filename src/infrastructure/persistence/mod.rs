//! PostgreSQL repository implementations.
//!
//! Queries are built at runtime with `sqlx::query`/`query_as`; the schema is
//! managed by the migrations in `migrations/`.
//!
//! # Repositories
//!
//! - [`PgAliasRepository`] - `links`
//! - [`PgVisitRepository`] - `views`
//! - [`PgErrorRepository`] - `errors`

pub mod pg_alias_repository;
pub mod pg_error_repository;
pub mod pg_visit_repository;

pub use pg_alias_repository::PgAliasRepository;
pub use pg_error_repository::PgErrorRepository;
pub use pg_visit_repository::PgVisitRepository;
