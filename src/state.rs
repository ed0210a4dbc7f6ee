//! Shared application state injected into handlers.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::config::Config;
use crate::infrastructure::geoip::CountryResolver;
use crate::infrastructure::persistence::{SqliteLinkRepository, SqliteStatsRepository};

/// Link service wired to the SQLite repositories.
pub type AppLinkService = LinkService<SqliteLinkRepository, SqliteStatsRepository>;

/// Stats service wired to the SQLite repository.
pub type AppStatsService = StatsService<SqliteStatsRepository>;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<SqlitePool>,
    pub link_service: Arc<AppLinkService>,
    pub stats_service: Arc<AppStatsService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires repositories and services over a connection pool.
    pub fn build(
        pool: SqlitePool,
        config: Arc<Config>,
        resolver: Option<Arc<dyn CountryResolver>>,
    ) -> Self {
        let pool = Arc::new(pool);

        let link_repository = Arc::new(SqliteLinkRepository::new(pool.clone()));
        let stats_repository = Arc::new(SqliteStatsRepository::new(pool.clone()));

        let link_service = Arc::new(LinkService::new(
            link_repository,
            stats_repository.clone(),
            resolver,
            config.default_validity_minutes,
        ));
        let stats_service = Arc::new(StatsService::new(stats_repository));

        Self {
            db: pool,
            link_service,
            stats_service,
            config,
        }
    }
}
