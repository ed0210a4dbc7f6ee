//! DTOs for the per-link statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::repositories::LinkStats;

/// Aggregate and per-click statistics for a short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub shortcode: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
    pub total_clicks: i64,
    pub clicks: Vec<ClickInfo>,
}

/// One recorded click.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,
    pub referrer: Option<String>,
    pub ip: Option<String>,
    pub country: Option<String>,
}

impl From<LinkStats> for StatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            shortcode: stats.link.shortcode,
            url: stats.link.url,
            created_at: stats.link.created_at,
            expiry: stats.link.expiry_at,
            total_clicks: stats.link.clicks_count,
            clicks: stats
                .clicks
                .into_iter()
                .map(|click| ClickInfo {
                    timestamp: click.timestamp,
                    referrer: click.referrer,
                    ip: click.ip,
                    country: click.country,
                })
                .collect(),
        }
    }
}
