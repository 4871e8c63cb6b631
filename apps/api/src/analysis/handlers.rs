//! Axum route handlers for resume analysis.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::analysis::extract::{extract_upload, DocumentKind};
use crate::analysis::models::{AnalysisResponse, AnalyzeRequest};
use crate::analysis::scoring::score_resume;
use crate::analysis::suggestions::request_suggestions;
use crate::errors::AppError;
use crate::state::AppState;

pub const DEFAULT_ROLE: &str = "general";

// ────────────────────────────────────────────────────────────────────────────
// Request helpers
// ────────────────────────────────────────────────────────────────────────────

fn role_or_default(role: Option<String>) -> String {
    role.map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| DEFAULT_ROLE.to_string())
}

fn multipart_error(state: &AppState, err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge {
            limit: state.config.max_upload_bytes,
        }
    } else {
        AppError::Validation(format!("Invalid upload: {}", err.body_text()))
    }
}

fn json_error(state: &AppState, err: JsonRejection) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge {
            limit: state.config.max_upload_bytes,
        }
    } else {
        AppError::Validation(format!("Invalid JSON body: {}", err.body_text()))
    }
}

/// Score, then suggest. Shared by both entry points.
async fn analyze(
    state: &AppState,
    text: &str,
    role: String,
    filename: Option<String>,
) -> AnalysisResponse {
    let report = score_resume(text, &role);
    info!(
        score = report.score,
        role = %role,
        matched_role = ?report.factors.matched_role,
        "Resume scored"
    );

    let suggestions = request_suggestions(state.suggester.as_ref(), text, &report).await;

    AnalysisResponse {
        success: true,
        score: report.score,
        factors: report.factors,
        suggestions,
        filename,
        role,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /upload
///
/// Multipart form: `resume` (pdf/docx/txt file) and optional `role`.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let mut multipart = multipart
        .map_err(|e| AppError::Validation(format!("Invalid upload: {}", e.body_text())))?;
    let mut upload: Option<(String, bytes::Bytes)> = None;
    let mut role: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(&state, e))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("resume") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(|e| multipart_error(&state, e))?;
                upload = Some((filename, data));
            }
            Some("role") => {
                role = Some(field.text().await.map_err(|e| multipart_error(&state, e))?);
            }
            _ => {}
        }
    }

    let (filename, data) = upload
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| AppError::Validation("No file selected".to_string()))?;

    let kind = DocumentKind::from_filename(&filename).ok_or(AppError::InvalidFileType)?;
    info!(filename = %filename, bytes = data.len(), "Resume upload received");

    let text = extract_upload(state.config.upload_dir.clone(), kind, data).await?;
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "Could not extract text from file".to_string(),
        ));
    }

    let response = analyze(&state, &text, role_or_default(role), Some(filename)).await;
    Ok(Json(response))
}

/// POST /analyze
///
/// JSON body `{ "text": "...", "role": "..." }`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let Json(request) = payload.map_err(|e| json_error(&state, e))?;

    if request.text.trim().is_empty() {
        return Err(AppError::Validation("No text provided".to_string()));
    }

    let response = analyze(&state, &request.text, role_or_default(request.role), None).await;
    Ok(Json(response))
}
