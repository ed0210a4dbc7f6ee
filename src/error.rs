//! Application error taxonomy and HTTP mapping.
//!
//! Every application-level error maps to one HTTP status and a single-field
//! JSON body `{"error": <message>}`. Store-level failures surface as
//! [`AppError::StoreUnavailable`] without corrupting state; resolver failures
//! never reach a response (country resolution degrades instead).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("shortcode must be alphanumeric (4-20 chars)")]
    InvalidShortcode,

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("shortcode already exists")]
    ShortcodeConflict,

    #[error("failed to generate unique shortcode")]
    AllocationExhausted,

    #[error("shortcode not found")]
    NotFound,

    #[error("short link expired")]
    Expired,

    /// Startup-time failure to open the GeoIP database. Never propagated to
    /// a request: the caller logs it and continues without a resolver.
    #[error("geoip database unavailable: {0}")]
    ResolverUnavailable(String),

    #[error("store unavailable")]
    StoreUnavailable(#[source] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidShortcode | AppError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            AppError::ShortcodeConflict => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Expired => StatusCode::GONE,
            AppError::AllocationExhausted
            | AppError::ResolverUnavailable(_)
            | AppError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Maps a store error to the application taxonomy.
///
/// Unique-constraint violations become [`AppError::ShortcodeConflict`]; the
/// `shortcode` column carries the only unique constraint in the schema.
/// Everything else is a transient store failure.
pub fn map_store_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::ShortcodeConflict;
        }
    }

    AppError::StoreUnavailable(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::InvalidShortcode.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidUrl("no scheme".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ShortcodeConflict.into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(AppError::Expired.into_response().status(), StatusCode::GONE);
        assert_eq!(
            AppError::AllocationExhausted.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_without_db_cause_is_transient() {
        let err = map_store_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::StoreUnavailable(_)));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AppError::InvalidShortcode.to_string(),
            "shortcode must be alphanumeric (4-20 chars)"
        );
        assert_eq!(AppError::Expired.to_string(), "short link expired");
        assert_eq!(AppError::NotFound.to_string(), "shortcode not found");
    }
}
