//! Click entity representing a single recorded visit.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A click recorded when a short link is resolved.
///
/// Immutable after creation. A click belongs to exactly one [`super::Link`];
/// deleting the link cascades to its clicks.
#[derive(Debug, Clone, FromRow)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub timestamp: DateTime<Utc>,
    pub referrer: Option<String>,
    pub ip: Option<String>,
    /// Two-letter country code, `"unknown"` when undeterminable, absent when
    /// no resolver is configured and no IP was available.
    pub country: Option<String>,
}

impl Click {
    /// Creates a new Click instance.
    ///
    /// All client metadata is optional to handle missing headers gracefully.
    pub fn new(
        id: i64,
        link_id: i64,
        timestamp: DateTime<Utc>,
        referrer: Option<String>,
        ip: Option<String>,
        country: Option<String>,
    ) -> Self {
        Self {
            id,
            link_id,
            timestamp,
            referrer,
            ip,
            country,
        }
    }
}

/// Input data for recording a new click event.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub link_id: i64,
    pub timestamp: DateTime<Utc>,
    pub referrer: Option<String>,
    pub ip: Option<String>,
    pub country: Option<String>,
}
