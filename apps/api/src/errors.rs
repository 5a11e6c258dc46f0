use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::render::RenderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every pipeline stage aborts the request on first failure; nothing is
/// retried and no partial artifact is ever returned.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Text source error: {0}")]
    Upstream(#[from] LlmError),

    #[error("Render contract violation: {0}")]
    RenderContract(String),

    #[error("Render error: {0}")]
    Render(RenderError),

    #[error("Artifact missing: {0}")]
    ArtifactMissing(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        // Contract violations indicate a paginator bug, not a rendering
        // failure; keep them distinguishable in logs and responses.
        match err {
            RenderError::Contract(msg) => AppError::RenderContract(msg),
            other => AppError::Render(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Upstream(e) => {
                tracing::error!("Text source error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    format!("Text generation failed: {e}"),
                )
            }
            AppError::RenderContract(msg) => {
                tracing::error!("Render contract violation: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_CONTRACT_VIOLATION",
                    "An internal layout error occurred".to_string(),
                )
            }
            AppError::Render(e) => {
                tracing::error!("Render error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    "Failed to render the document".to_string(),
                )
            }
            AppError::ArtifactMissing(path) => {
                tracing::error!("Artifact missing after render: {path}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ARTIFACT_MISSING",
                    "Failed to generate PDF".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
