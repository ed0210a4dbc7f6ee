//! Expiry timestamp calculation.

use chrono::{DateTime, Duration, Utc};

/// Computes the absolute expiry for a link created at `now`.
///
/// Uses `validity_minutes` when provided, otherwise `default_minutes`. The
/// value is not validated: zero or negative validity produces an
/// already-expired link, which is accepted. The caller supplies `now` so
/// that `created_at` and `expiry_at` derive from the same snapshot.
pub fn compute_expiry(
    now: DateTime<Utc>,
    validity_minutes: Option<i64>,
    default_minutes: i64,
) -> DateTime<Utc> {
    now + Duration::minutes(validity_minutes.unwrap_or(default_minutes))
}
