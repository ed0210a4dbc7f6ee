//! Handler for short-link creation.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};

use crate::api::dto::shorten::{CreateShortUrlRequest, ShortUrlResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::request_base_url;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "validity": 30,          // optional, minutes
///   "shortcode": "abcd12"    // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the shortcode, the full short link, and the expiry:
///
/// ```json
/// {
///   "shortcode": "abcd12",
///   "shortLink": "https://sho.rt/abcd12",
///   "expiry": "2026-01-01T12:30:00Z",
///   "createdAt": "2026-01-01T12:00:00Z",
///   "url": "https://example.com"
/// }
/// ```
///
/// # Errors
///
/// - 400 for a malformed URL or shortcode
/// - 409 when the requested shortcode is taken
/// - 500 when code generation exhausts its attempts
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateShortUrlRequest>,
) -> Result<(StatusCode, Json<ShortUrlResponse>), AppError> {
    let link = state
        .link_service
        .create_short_link(payload.url, payload.validity, payload.shortcode)
        .await?;

    let base_url = request_base_url(&state.config, &headers);
    let short_link = format!("{}/{}", base_url, link.shortcode);

    let response = ShortUrlResponse {
        shortcode: link.shortcode,
        short_link,
        expiry: link.expiry_at,
        created_at: link.created_at,
        url: link.url,
    };

    Ok((StatusCode::CREATED, Json(response)))
}
