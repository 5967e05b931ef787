use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use controlpanel_core::error::CoreError;
use controlpanel_review::ReviewError;

/// Application-level error type for operator review handlers.
///
/// Wraps [`CoreError`] and [`ReviewError`] for domain errors and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce consistent
/// JSON error responses.
///
/// The protocol endpoints (`notify_img`, `confirm_img`) do not use this
/// type; their error envelope is fixed by the notification protocol.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `controlpanel_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A session registry error from `controlpanel_review`.
    #[error(transparent)]
    Review(#[from] ReviewError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Io(err) => {
                    tracing::error!(error = %err, "I/O error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
                CoreError::Serialization(err) => {
                    tracing::error!(error = %err, "Serialization error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- ReviewError variants ---
            AppError::Review(review) => match review {
                ReviewError::SessionNotFound(id) => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("Review session {id} not found"),
                ),
                ReviewError::StillOpen(id) => (
                    StatusCode::CONFLICT,
                    "REVIEW_STILL_OPEN",
                    format!("Review session {id} is still awaiting a decision"),
                ),
                ReviewError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal review error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
