//! Short code generation and validation.

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// Alphabet for generated codes.
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated short codes.
const CODE_LENGTH: usize = 6;

/// Compiled pattern for user-supplied shortcodes.
static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{4,20}$").unwrap());

/// Generates a random 6-character shortcode.
///
/// Characters are drawn uniformly from the 62-character alphanumeric
/// alphabet.
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Validates a user-supplied shortcode.
///
/// # Rules
///
/// - Length: 4-20 characters
/// - Allowed characters: ASCII letters and digits
///
/// # Errors
///
/// Returns [`AppError::InvalidShortcode`] if the code does not match.
pub fn validate_shortcode(code: &str) -> Result<(), AppError> {
    if SHORTCODE_REGEX.is_match(code) {
        Ok(())
    } else {
        Err(AppError::InvalidShortcode)
    }
}
