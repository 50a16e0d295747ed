//! Repository trait for error records.

use crate::domain::entities::ErrorRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only repository for the `errors` collection, keyed by correlation id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ErrorRepository: Send + Sync {
    /// Persists an error record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, record: ErrorRecord) -> Result<(), AppError>;

    /// Looks up a record by correlation id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<ErrorRecord>, AppError>;

    /// Returns up to `limit` records, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<ErrorRecord>, AppError>;
}
