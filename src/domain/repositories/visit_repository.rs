//! Repository trait for visit history.

use crate::domain::entities::Visit;
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only repository for the `views` collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Appends a visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn record(&self, visit: Visit) -> Result<(), AppError>;
}
