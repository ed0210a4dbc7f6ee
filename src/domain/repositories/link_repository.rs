//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link.
    ///
    /// The store enforces shortcode uniqueness; the pre-check in the
    /// allocator is advisory only.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ShortcodeConflict`] if the shortcode already
    /// exists, [`AppError::StoreUnavailable`] on other store errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its shortcode.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store errors.
    async fn find_by_shortcode(&self, shortcode: &str) -> Result<Option<Link>, AppError>;

    /// Returns whether a shortcode is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store errors.
    async fn shortcode_exists(&self, shortcode: &str) -> Result<bool, AppError>;
}
