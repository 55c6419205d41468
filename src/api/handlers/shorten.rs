//! Handler for the shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "shorten_url": "http://localhost:8000/aB3dE6gH" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found with `{"detail": "long_url required"}` if `long_url`
/// is missing or empty. Database failures return 500.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let long_url = payload.long_url.unwrap_or_default();
    let code = state.url_service.add_short_url(&long_url).await?;

    Ok(Json(ShortenResponse {
        shorten_url: state.url_service.short_url(&code),
    }))
}
