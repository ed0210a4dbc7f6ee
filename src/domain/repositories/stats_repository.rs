//! Repository trait for click recording and statistics.

use crate::domain::entities::{Click, Link, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// A link together with its complete click history.
///
/// `link.clicks_count` is the aggregate counter maintained by the store;
/// `clicks` preserves insertion order.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub link: Link,
    pub clicks: Vec<Click>,
}

/// Repository interface for click tracking and per-link statistics.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteStatsRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Records a click and increments the owning link's counter.
    ///
    /// Both writes happen in a single transaction: either the Click row
    /// exists and the counter moved by one, or neither happened.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link no longer exists,
    /// [`AppError::StoreUnavailable`] on other store errors.
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Retrieves a link and its full click list by shortcode.
    ///
    /// Clicks are returned in insertion order, unpaginated.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(LinkStats))` if the shortcode exists
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store errors.
    async fn stats_by_shortcode(&self, shortcode: &str) -> Result<Option<LinkStats>, AppError>;
}
