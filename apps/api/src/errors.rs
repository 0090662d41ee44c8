use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Gemini API key not configured")]
    ApiKeyMissing,

    #[error("Invalid messages payload")]
    InvalidPayload,

    /// Body could not be read (e.g. over the size limit).
    #[error("Request body rejected: {0}")]
    BodyRejected(#[from] BytesRejection),

    /// Provider rejected the call. The body is relayed verbatim.
    #[error("Upstream error (status {status})")]
    Upstream { status: u16, body: String },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Api { status, message } => AppError::Upstream {
                status,
                body: message,
            },
            other => AppError::Internal(other.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
            }
            AppError::ApiKeyMissing => {
                tracing::error!("Chat request rejected: GEMINI_API_KEY is not set");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Gemini API key not configured".to_string(),
                )
            }
            AppError::InvalidPayload => {
                (StatusCode::BAD_REQUEST, "Invalid messages payload".to_string())
            }
            AppError::BodyRejected(rejection) => {
                tracing::warn!("Chat request body rejected: {rejection}");
                (rejection.status(), rejection.body_text())
            }
            AppError::Upstream { status, body } => {
                tracing::warn!("Gemini API returned {status}: {body}");
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, body)
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_upstream_error_keeps_status_and_body() {
        let (status, body) = render(AppError::Upstream {
            status: 429,
            body: "rate limited".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body, json!({ "error": "rate limited" }));
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let (status, body) =
            render(AppError::Internal(anyhow::anyhow!("connection reset by peer"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }

    #[tokio::test]
    async fn test_llm_api_error_maps_to_upstream() {
        let err: AppError = LlmError::Api {
            status: 403,
            message: "forbidden".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Upstream { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_llm_parse_error_maps_to_internal() {
        let parse = serde_json::from_str::<Value>("not json").unwrap_err();
        let err: AppError = LlmError::Parse(parse).into();
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }
}
