//! Target URL validation.

use crate::error::AppError;
use url::Url;

/// Validates that `input` is a well-formed http/https URL.
///
/// The URL is only checked, never rewritten: the stored value and the
/// redirect target are the exact string the client sent.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] on parse failure or a non-http scheme.
pub fn validate_url(input: &str) -> Result<(), AppError> {
    let url = Url::parse(input).map_err(|e| AppError::InvalidUrl(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::InvalidUrl(format!(
            "unsupported scheme '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_https_url_is_valid() {
        assert!(validate_url("https://example.com").is_ok());
    }

    #[test]
    fn test_http_url_with_path_and_query_is_valid() {
        assert!(validate_url("http://example.com/a/b?x=1&y=2").is_ok());
    }

    #[test]
    fn test_not_a_url() {
        assert!(matches!(
            validate_url("not-a-url"),
            Err(AppError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_missing_scheme() {
        assert!(validate_url("example.com/path").is_err());
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        assert!(validate_url("ftp://example.com/file").is_err());
    }

    #[test]
    fn test_empty_string_rejected() {
        assert!(validate_url("").is_err());
    }
}
