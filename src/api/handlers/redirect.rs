//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::location::encode_location;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// The code is matched exactly, case-sensitively, and is not checked for shape
/// before the lookup. The stored URL is percent-encoded where a header value
/// would reject it.
///
/// # Errors
///
/// Returns 404 Not Found with `{"detail": "URL not found"}` if the code is unknown.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let long_url = state.url_service.resolve(&short_code).await?;

    debug!(%short_code, "Redirecting");

    Ok(Redirect::temporary(&encode_location(&long_url)))
}
