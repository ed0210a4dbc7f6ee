//! SQLite implementation of the link repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, map_store_error};

/// SQLite repository for link storage and retrieval.
///
/// Uses prepared statements with positional binds. The `shortcode` UNIQUE
/// constraint is the authoritative uniqueness guard.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (shortcode, url, created_at, expiry_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, shortcode, url, created_at, expiry_at, clicks_count
            "#,
        )
        .bind(&new_link.shortcode)
        .bind(&new_link.url)
        .bind(new_link.created_at)
        .bind(new_link.expiry_at)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_store_error)?;

        Ok(link)
    }

    async fn find_by_shortcode(&self, shortcode: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, shortcode, url, created_at, expiry_at, clicks_count
            FROM links
            WHERE shortcode = ?
            "#,
        )
        .bind(shortcode)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_store_error)?;

        Ok(link)
    }

    async fn shortcode_exists(&self, shortcode: &str) -> Result<bool, AppError> {
        let row = sqlx::query_scalar::<_, i64>("SELECT 1 FROM links WHERE shortcode = ?")
            .bind(shortcode)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(map_store_error)?;

        Ok(row.is_some())
    }
}
