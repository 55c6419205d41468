//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `urls` table.
///
/// Queries use bound parameters only.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        // Dropping an uncommitted transaction rolls it back and returns the connection.
        let mut tx = self.pool.begin().await?;

        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            INSERT INTO urls (long_url, short_url)
            VALUES ($1, $2)
            RETURNING id, long_url, short_url, created_at
            "#,
        )
        .bind(&new_mapping.long_url)
        .bind(&new_mapping.short_code)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(mapping)
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<String>, AppError> {
        let long_url = sqlx::query_scalar::<_, String>(
            "SELECT long_url FROM urls WHERE short_url = $1 ORDER BY id LIMIT 1",
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(long_url)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
