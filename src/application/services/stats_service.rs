//! Per-link statistics service.

use std::sync::Arc;

use crate::domain::repositories::{LinkStats, StatsRepository};
use crate::error::AppError;

/// Service for assembling the statistics view of a short link.
///
/// Stats are available for expired links as well: only the redirect path
/// checks expiry.
pub struct StatsService<S: StatsRepository> {
    repository: Arc<S>,
}

impl<S: StatsRepository> StatsService<S> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<S>) -> Self {
        Self { repository }
    }

    /// Retrieves the aggregate and per-click view for a shortcode.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the shortcode.
    /// Returns [`AppError::StoreUnavailable`] on store errors.
    pub async fn get_stats(&self, shortcode: &str) -> Result<LinkStats, AppError> {
        self.repository
            .stats_by_shortcode(shortcode)
            .await?
            .ok_or(AppError::NotFound)
    }
}
