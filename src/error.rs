//! Application error type and its HTTP mapping.
//!
//! Every handler returns `Result<_, AppError>`. Errors render as a JSON body of
//! the form `{ "detail": "..." }`.
//!
//! | Variant       | Status | Detail                       |
//! |---------------|--------|------------------------------|
//! | `ClientInput` | 404    | the validation message       |
//! | `NotFound`    | 404    | the lookup message           |
//! | `Database`    | 500    | `Internal Server Error`      |
//! | `Internal`    | 500    | `Internal Server Error`      |
//!
//! Client input errors deliberately answer 404 rather than 400; existing
//! clients of the service depend on that status.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

/// Body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request payload is missing a required value.
    #[error("{0}")]
    ClientInput(String),

    /// The requested resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Connection, pool or query failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn client_input(message: impl Into<String>) -> Self {
        Self::ClientInput(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ClientInput(_) | AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        // Surface the first message attached to a failed field rule.
        let message = errors
            .field_errors()
            .into_values()
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::ClientInput(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let detail = match &self {
            AppError::ClientInput(message) | AppError::NotFound(message) => message.clone(),
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                "Internal Server Error".to_string()
            }
            AppError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                "Internal Server Error".to_string()
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}
