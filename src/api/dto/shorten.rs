//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// A missing field deserializes to `None` so it is reported the same way as an
/// empty string.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(default)]
    #[validate(
        required(message = "long_url required"),
        length(min = 1, message = "long_url required")
    )]
    pub long_url: Option<String>,
}

/// Response carrying the full short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub shorten_url: String,
}
