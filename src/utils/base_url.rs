//! Base URL selection for generated short links.

use axum::http::{HeaderMap, header};

use crate::config::Config;

/// Returns the base URL to prepend to a shortcode, without a trailing slash.
///
/// The configured `BASE_URL` wins; otherwise the URL is derived from the
/// request `Host` header.
pub fn request_base_url(config: &Config, headers: &HeaderMap) -> String {
    if let Some(base) = &config.base_url {
        return base.trim_end_matches('/').to_string();
    }

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");

    format!("http://{host}")
}
