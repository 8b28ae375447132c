//! Shared utilities used by both registries.

use chrono::Utc;
use nanoid::nanoid;

use crate::constants::TOKEN_ALPHABET;

/// Generate a random token using nanoid
///
/// Each character is drawn independently and uniformly from the 62-character
/// alphanumeric alphabet.
pub fn generate_token(length: usize) -> String {
    nanoid!(length, &TOKEN_ALPHABET)
}

/// Current UTC time formatted as a timestamp string
pub fn now_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
