//! Repository trait for alias record storage.

use crate::domain::entities::AliasRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `links` collection.
///
/// Records are keyed by alias and queryable by secret. There is no update:
/// a record is inserted once and later deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAliasRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryStore`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasRepository: Send + Sync {
    /// Inserts a record if its alias is not taken yet.
    ///
    /// The check and the write are a single atomic step in the store, so of
    /// two concurrent inserts for the same alias exactly one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the alias already exists.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, record: AliasRecord) -> Result<(), AppError>;

    /// Finds a record by its alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_alias(&self, alias: &str) -> Result<Option<AliasRecord>, AppError>;

    /// Finds the record owned by `secret`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_secret(&self, secret: &str) -> Result<Option<AliasRecord>, AppError>;

    /// Deletes the record stored under `alias` if it is owned by `secret`.
    ///
    /// Returns `Ok(true)` if a record was removed, `Ok(false)` if none existed
    /// or the alias now belongs to a different secret. The ownership check and
    /// the removal are one atomic step in the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, alias: &str, secret: &str) -> Result<bool, AppError>;

    /// Checks whether the backing store is reachable.
    async fn health_check(&self) -> bool;
}
