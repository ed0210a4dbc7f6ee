//! SQLite repository implementations.

pub mod sqlite_link_repository;
pub mod sqlite_stats_repository;

pub use sqlite_link_repository::SqliteLinkRepository;
pub use sqlite_stats_repository::SqliteStatsRepository;
