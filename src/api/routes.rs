//! Route configuration for the public endpoints.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All service endpoints.
///
/// # Endpoints
///
/// - `POST /shorten`       - Create a short URL
/// - `GET  /health`        - Database connectivity check
/// - `GET  /{short_code}`  - Redirect to the stored long URL
///
/// `/health` is a static segment, so it wins over the `{short_code}` capture.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{short_code}", get(redirect_handler))
}
