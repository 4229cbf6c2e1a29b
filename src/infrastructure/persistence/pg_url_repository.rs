//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository over the `urls` table.
///
/// Expected schema:
///
/// ```sql
/// CREATE TABLE urls (
///     short_url TEXT PRIMARY KEY,
///     long_url  TEXT NOT NULL
/// );
/// ```
///
/// Queries use runtime binding; prepared statements protect against SQL
/// injection.
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
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            "INSERT INTO urls (short_url, long_url) VALUES ($1, $2) RETURNING short_url, long_url",
        )
        .bind(&new_mapping.short_code)
        .bind(&new_mapping.long_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            "SELECT short_url, long_url FROM urls WHERE short_url = $1",
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlMapping>, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            "SELECT short_url, long_url FROM urls WHERE long_url = $1",
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn list(&self) -> Result<Vec<UrlMapping>, AppError> {
        // No ORDER BY: callers get the store's natural row order.
        let mappings =
            sqlx::query_as::<_, UrlMapping>("SELECT short_url, long_url FROM urls")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(mappings)
    }

    async fn delete(&self, short_code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM urls WHERE short_url = $1")
            .bind(short_code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
