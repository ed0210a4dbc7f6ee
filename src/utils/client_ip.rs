//! Client IP extraction from request metadata.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Returns the client IP for a request.
///
/// Prefers the first entry of `X-Forwarded-For` when present, otherwise the
/// peer socket address.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr) -> Option<String> {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return Some(first.to_string());
            }
        }
    }

    Some(peer.ip().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> SocketAddr {
        "10.1.2.3:4567".parse().unwrap()
    }

    #[test]
    fn test_peer_address_without_forwarded_header() {
        let headers = HeaderMap::new();
        assert_eq!(client_ip(&headers, peer()), Some("10.1.2.3".to_string()));
    }

    #[test]
    fn test_forwarded_for_single_entry() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.9"));

        assert_eq!(client_ip(&headers, peer()), Some("203.0.113.9".to_string()));
    }

    #[test]
    fn test_forwarded_for_takes_first_entry() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.9, 198.51.100.2, 10.0.0.1"),
        );

        assert_eq!(client_ip(&headers, peer()), Some("203.0.113.9".to_string()));
    }

    #[test]
    fn test_forwarded_for_entry_is_trimmed() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("  203.0.113.9 , 10.0.0.1"),
        );

        assert_eq!(client_ip(&headers, peer()), Some("203.0.113.9".to_string()));
    }

    #[test]
    fn test_empty_forwarded_for_falls_back_to_peer() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static(""));

        assert_eq!(client_ip(&headers, peer()), Some("10.1.2.3".to_string()));
    }
}
