//! PostgreSQL implementation of the alias repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::AliasRecord;
use crate::domain::repositories::AliasRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct AliasRow {
    alias: String,
    target: String,
    secret: String,
}

impl From<AliasRow> for AliasRecord {
    fn from(row: AliasRow) -> Self {
        AliasRecord::new(row.alias, row.target, row.secret)
    }
}

/// PostgreSQL repository for the `links` table.
pub struct PgAliasRepository {
    pool: Arc<PgPool>,
}

impl PgAliasRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AliasRepository for PgAliasRepository {
    async fn insert(&self, record: AliasRecord) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO links (alias, target, secret)
            VALUES ($1, $2, $3)
            ON CONFLICT (alias) DO NOTHING
            "#,
        )
        .bind(&record.alias)
        .bind(&record.target)
        .bind(&record.secret)
        .execute(self.pool.as_ref())
        .await
        // A unique violation here can only come from the secret column.
        .map_err(|e| AppError::internal("Database error", e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AppError::conflict(format!(
                "alias '{}' already exists",
                record.alias
            )));
        }

        Ok(())
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<AliasRecord>, AppError> {
        let row = sqlx::query_as::<_, AliasRow>(
            "SELECT alias, target, secret FROM links WHERE alias = $1",
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(AliasRecord::from))
    }

    async fn find_by_secret(&self, secret: &str) -> Result<Option<AliasRecord>, AppError> {
        let row = sqlx::query_as::<_, AliasRow>(
            "SELECT alias, target, secret FROM links WHERE secret = $1",
        )
        .bind(secret)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(AliasRecord::from))
    }

    async fn delete(&self, alias: &str, secret: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE alias = $1 AND secret = $2")
            .bind(alias)
            .bind(secret)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
