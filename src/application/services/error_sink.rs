//! Error log sink: persists unhandled failures under a correlation id.

use std::sync::Arc;

use tracing::error;

use crate::domain::entities::ErrorRecord;
use crate::domain::repositories::ErrorRepository;
use crate::error::AppError;

/// Records unhandled failures and hands back the id shown to the user.
#[derive(Clone)]
pub struct ErrorSink {
    repository: Arc<dyn ErrorRepository>,
}

impl ErrorSink {
    pub fn new(repository: Arc<dyn ErrorRepository>) -> Self {
        Self { repository }
    }

    /// Persists `detail` under a fresh correlation id and returns the id.
    ///
    /// Always returns an id. If the record cannot be stored, the failure and
    /// the original detail are written to the log under the same id instead.
    pub async fn capture(&self, detail: impl Into<String>, timestamp: i64) -> String {
        let record = ErrorRecord::capture(detail.into(), timestamp);
        let id = record.id.clone();

        error!(error_id = %id, detail = %record.detail, "Unhandled failure");

        if let Err(e) = self.repository.insert(record).await {
            error!(error_id = %id, error = %e, "Failed to persist error record");
        }

        id
    }

    /// Looks up a captured failure by correlation id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    pub async fn find(&self, id: &str) -> Result<ErrorRecord, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Error record not found"))
    }

    /// Returns the most recent captured failures, newest first.
    pub async fn recent(&self, limit: i64) -> Result<Vec<ErrorRecord>, AppError> {
        self.repository.list_recent(limit.max(1)).await
    }
}
