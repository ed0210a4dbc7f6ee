//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls`             - Create a short link
//! - `GET  /shorturls/{shortcode}` - Aggregate + per-click statistics
//! - `GET  /{shortcode}`           - Short link redirect (records a click)
//! - `GET  /health`                - Store connectivity check
//!
//! # Middleware
//!
//! - **Access log** - One line per request via `tracing`
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler, stats_handler};
use crate::api::middleware::access_log::access_log_mw;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorturls", post(shorten_handler))
        .route("/shorturls/{shortcode}", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/{shortcode}", get(redirect_handler))
        .with_state(state)
        .layer(middleware::from_fn(access_log_mw));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
