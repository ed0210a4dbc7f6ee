//! # shorturl
//!
//! A URL shortening microservice built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Database and GeoIP integrations
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Custom or generated alphanumeric short codes with conflict detection
//! - Per-click analytics (timestamp, referrer, IP, derived country)
//! - Link expiry with a configurable default validity
//! - Optional MaxMind GeoIP country resolution
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional overrides; the store defaults to sqlite://data/urls.db
//! export DATABASE_URL="sqlite://data/urls.db"
//! export BASE_URL="https://sho.rt"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, StatsService};
    pub use crate::domain::entities::{Click, Link, NewClick, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
