//! DTOs for the short-link creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to create a short link.
#[derive(Debug, Deserialize)]
pub struct CreateShortUrlRequest {
    /// The target URL (must be valid http/https).
    pub url: String,

    /// Optional validity in minutes; the configured default applies when
    /// absent. Zero and negative values are accepted and produce an
    /// already-expired link.
    pub validity: Option<i64>,

    /// Optional custom shortcode (4-20 alphanumeric characters).
    pub shortcode: Option<String>,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlResponse {
    pub shortcode: String,
    pub short_link: String,
    pub expiry: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub url: String,
}
