//! SQLite implementation of the statistics repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Click, Link, NewClick};
use crate::domain::repositories::{LinkStats, StatsRepository};
use crate::error::{AppError, map_store_error};

/// SQLite repository for click tracking and per-link statistics.
pub struct SqliteStatsRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for SqliteStatsRepository {
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        let mut tx = self.pool.begin().await.map_err(map_store_error)?;

        let click = sqlx::query_as::<_, Click>(
            r#"
            INSERT INTO clicks (link_id, timestamp, referrer, ip, country)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, link_id, timestamp, referrer, ip, country
            "#,
        )
        .bind(new_click.link_id)
        .bind(new_click.timestamp)
        .bind(&new_click.referrer)
        .bind(&new_click.ip)
        .bind(&new_click.country)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_store_error)?;

        // The counter moves at the store, never via read-then-write in
        // application memory.
        let updated = sqlx::query("UPDATE links SET clicks_count = clicks_count + 1 WHERE id = ?")
            .bind(new_click.link_id)
            .execute(&mut *tx)
            .await
            .map_err(map_store_error)?;

        if updated.rows_affected() == 0 {
            // Dropping the transaction rolls the insert back.
            return Err(AppError::NotFound);
        }

        tx.commit().await.map_err(map_store_error)?;

        Ok(click)
    }

    async fn stats_by_shortcode(&self, shortcode: &str) -> Result<Option<LinkStats>, AppError> {
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

        let link = match link {
            Some(link) => link,
            None => return Ok(None),
        };

        let clicks = sqlx::query_as::<_, Click>(
            r#"
            SELECT id, link_id, timestamp, referrer, ip, country
            FROM clicks
            WHERE link_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(link.id)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_store_error)?;

        Ok(Some(LinkStats { link, clicks }))
    }
}
