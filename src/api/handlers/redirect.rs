//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, header},
    response::Redirect,
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Redirects a shortcode to its target URL and records the click.
///
/// # Endpoint
///
/// `GET /{shortcode}`
///
/// # Request Flow
///
/// 1. Extract client IP (X-Forwarded-For, else peer address) and referrer
/// 2. Resolve the shortcode and record the click in one service call
/// 3. Return 307 Temporary Redirect to the stored URL
///
/// # Errors
///
/// - 404 for an unknown shortcode
/// - 410 when the link has expired
pub async fn redirect_handler(
    Path(shortcode): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Redirect, AppError> {
    let ip = client_ip(&headers, addr);

    let referrer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let target = state
        .link_service
        .resolve_and_record(&shortcode, ip, referrer)
        .await?;

    Ok(Redirect::temporary(&target))
}
