use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The wire shape is a flat `{"error": "<message>"}` object for every
/// variant; clients distinguish categories by status code alone.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    /// The uploaded PDF yielded no extractable text (or could not be
    /// parsed at all). Client-class: re-scanning or re-exporting the
    /// document is the only fix.
    #[error("Could not read PDF content")]
    Unreadable,

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unreadable => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
