//! PostgreSQL implementation of the error repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::ErrorRecord;
use crate::domain::repositories::ErrorRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct ErrorRow {
    id: String,
    time: i64,
    detail: String,
}

impl From<ErrorRow> for ErrorRecord {
    fn from(row: ErrorRow) -> Self {
        ErrorRecord::new(row.id, row.time, row.detail)
    }
}

/// PostgreSQL repository for the `errors` table.
pub struct PgErrorRepository {
    pool: Arc<PgPool>,
}

impl PgErrorRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ErrorRepository for PgErrorRepository {
    async fn insert(&self, record: ErrorRecord) -> Result<(), AppError> {
        sqlx::query("INSERT INTO errors (id, time, detail) VALUES ($1, $2, $3)")
            .bind(&record.id)
            .bind(record.timestamp)
            .bind(&record.detail)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ErrorRecord>, AppError> {
        let row = sqlx::query_as::<_, ErrorRow>("SELECT id, time, detail FROM errors WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(ErrorRecord::from))
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ErrorRecord>, AppError> {
        let rows = sqlx::query_as::<_, ErrorRow>(
            "SELECT id, time, detail FROM errors ORDER BY time DESC, id LIMIT $1",
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ErrorRecord::from).collect())
    }
}
