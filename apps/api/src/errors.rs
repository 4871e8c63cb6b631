use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::extract::ExtractionError;

pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid file type. Please upload PDF, DOCX, or TXT files.")]
    InvalidFileType,

    #[error("{0}")]
    Extraction(#[from] ExtractionError),

    #[error("File too large. Maximum upload size is {limit} bytes.")]
    PayloadTooLarge { limit: usize },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(_) | AppError::InvalidFileType => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Extraction(e) if e.is_internal() => {
                tracing::error!("Upload storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            AppError::Extraction(e) => {
                tracing::warn!("Extraction error: {e}");
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::PayloadTooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
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

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_is_bad_request_with_message() {
        let (status, body) = body_json(AppError::Validation("No text provided".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No text provided");
    }

    #[tokio::test]
    async fn test_invalid_file_type_message() {
        let (status, body) = body_json(AppError::InvalidFileType).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid file type"));
    }

    #[tokio::test]
    async fn test_extraction_error_surfaces_reason() {
        let err = ExtractionError::InvalidUtf8("invalid utf-8 sequence".into());
        let (status, body) = body_json(AppError::Extraction(err)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("invalid utf-8"));
    }

    #[tokio::test]
    async fn test_storage_failure_hides_server_path() {
        let io = std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "No such file or directory at path /srv/uploads/cv.txt",
        );
        let (status, body) = body_json(AppError::Extraction(io.into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], INTERNAL_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_payload_too_large_is_413() {
        let (status, _) = body_json(AppError::PayloadTooLarge { limit: 10 }).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_internal_error_does_not_leak_detail() {
        let err = anyhow::anyhow!("connection string postgres://secret");
        let (status, body) = body_json(AppError::Internal(err)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], INTERNAL_ERROR_MESSAGE);
    }
}
