//! PostgreSQL implementation of the visit repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Visit;
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;

/// PostgreSQL repository for the append-only `views` table.
pub struct PgVisitRepository {
    pool: Arc<PgPool>,
}

impl PgVisitRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitRepository for PgVisitRepository {
    async fn record(&self, visit: Visit) -> Result<(), AppError> {
        sqlx::query("INSERT INTO views (alias, time) VALUES ($1, $2)")
            .bind(&visit.alias)
            .bind(visit.timestamp)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
