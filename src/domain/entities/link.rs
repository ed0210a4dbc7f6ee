//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A shortened URL with its metadata.
///
/// The `shortcode` is globally unique and immutable after creation. The
/// target `url` is stored exactly as received. `clicks_count` is incremented
/// by the store once per recorded click; it is never written from application
/// memory.
#[derive(Debug, Clone, FromRow)]
pub struct Link {
    pub id: i64,
    pub shortcode: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub expiry_at: DateTime<Utc>,
    pub clicks_count: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        shortcode: String,
        url: String,
        created_at: DateTime<Utc>,
        expiry_at: DateTime<Utc>,
        clicks_count: i64,
    ) -> Self {
        Self {
            id,
            shortcode,
            url,
            created_at,
            expiry_at,
            clicks_count,
        }
    }

    /// Returns true if the link is expired at `now`.
    ///
    /// A link whose expiry equals `now` exactly is expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry_at <= now
    }
}

/// Input data for creating a new link.
///
/// `created_at` and `expiry_at` derive from the same `now` snapshot taken by
/// the caller.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub shortcode: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub expiry_at: DateTime<Utc>,
}
