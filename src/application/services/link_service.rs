//! Link creation and redirect resolution service.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{Link, NewClick, NewLink};
use crate::domain::repositories::{LinkRepository, StatsRepository};
use crate::error::AppError;
use crate::infrastructure::geoip::{CountryResolver, resolve_country};
use crate::utils::codegen::{generate_code, validate_shortcode};
use crate::utils::expiry::compute_expiry;
use crate::utils::validate::validate_url;

/// Service for creating short links and resolving them into redirects.
///
/// Owns the shortcode allocation policy and the redirect-side click
/// recording. The optional country resolver and the default validity come
/// from configuration at construction time.
pub struct LinkService<L: LinkRepository, S: StatsRepository> {
    link_repository: Arc<L>,
    stats_repository: Arc<S>,
    resolver: Option<Arc<dyn CountryResolver>>,
    default_validity_minutes: i64,
}

impl<L: LinkRepository, S: StatsRepository> LinkService<L, S> {
    /// Creates a new link service.
    pub fn new(
        link_repository: Arc<L>,
        stats_repository: Arc<S>,
        resolver: Option<Arc<dyn CountryResolver>>,
        default_validity_minutes: i64,
    ) -> Self {
        Self {
            link_repository,
            stats_repository,
            resolver,
            default_validity_minutes,
        }
    }

    /// Creates a short link.
    ///
    /// Validates the URL, allocates a shortcode (user-supplied or
    /// generated), computes the expiry from a single `now` snapshot, and
    /// persists the link. The store's uniqueness constraint backs the
    /// allocation pre-check, so a lost race still surfaces as a conflict.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] when the URL is malformed
    /// - [`AppError::InvalidShortcode`] when a supplied code fails validation
    /// - [`AppError::ShortcodeConflict`] when a supplied code is taken
    /// - [`AppError::AllocationExhausted`] when generation keeps colliding
    pub async fn create_short_link(
        &self,
        url: String,
        validity_minutes: Option<i64>,
        requested_code: Option<String>,
    ) -> Result<Link, AppError> {
        validate_url(&url)?;

        let shortcode = self.allocate_shortcode(requested_code).await?;

        let now = Utc::now();
        let expiry_at = compute_expiry(now, validity_minutes, self.default_validity_minutes);

        self.link_repository
            .create(NewLink {
                shortcode,
                url,
                created_at: now,
                expiry_at,
            })
            .await
    }

    /// Resolves a shortcode into its target URL and records the click.
    ///
    /// The expiry comparison and the click timestamp use the same `now`
    /// snapshot. The click insert and the counter increment happen in one
    /// store transaction. The returned URL is the stored value, unchanged.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] for an unknown shortcode
    /// - [`AppError::Expired`] when `expiry_at <= now`
    pub async fn resolve_and_record(
        &self,
        shortcode: &str,
        client_ip: Option<String>,
        referrer: Option<String>,
    ) -> Result<String, AppError> {
        let link = self
            .link_repository
            .find_by_shortcode(shortcode)
            .await?
            .ok_or(AppError::NotFound)?;

        let now = Utc::now();
        if link.is_expired_at(now) {
            return Err(AppError::Expired);
        }

        let country = resolve_country(self.resolver.as_deref(), client_ip.as_deref());

        self.stats_repository
            .record_click(NewClick {
                link_id: link.id,
                timestamp: now,
                referrer,
                ip: client_ip,
                country,
            })
            .await?;

        Ok(link.url)
    }

    /// Allocates a shortcode.
    ///
    /// A supplied code is validated and checked for existence; otherwise
    /// 6-character candidates are generated with a bounded retry loop.
    async fn allocate_shortcode(&self, requested: Option<String>) -> Result<String, AppError> {
        if let Some(code) = requested {
            validate_shortcode(&code)?;

            if self.link_repository.shortcode_exists(&code).await? {
                return Err(AppError::ShortcodeConflict);
            }

            return Ok(code);
        }

        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let candidate = generate_code();

            if !self.link_repository.shortcode_exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        Err(AppError::AllocationExhausted)
    }
}
