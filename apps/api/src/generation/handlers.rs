//! Axum route handlers for the Generation API.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::generator::GenerationRequest;
use crate::models::document::Document;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AiHealthResponse {
    pub status: &'static str,
    pub backend: &'static str,
    pub message: &'static str,
}

/// POST /api/v1/documents/generate
///
/// Generates a resume or cover letter and stores it, ready for preview.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<(StatusCode, Json<Document>), AppError> {
    request.validate()?;

    info!(
        "Generating {:?} for {} at {} ({} backend)",
        request.content_type,
        request.job_title,
        request.company_name,
        state.generator.backend()
    );
    let raw_text = state.generator.generate(&request).await?;
    if raw_text.trim().is_empty() {
        return Err(AppError::Llm("generator returned no content".to_string()));
    }

    let document = state
        .documents
        .insert(request.document_title(), request.content_type, raw_text)
        .await;

    Ok((StatusCode::CREATED, Json(document)))
}

/// GET /api/v1/ai/health
pub async fn handle_ai_health(State(state): State<AppState>) -> Json<AiHealthResponse> {
    let response = match state.generator.backend() {
        "llm" => AiHealthResponse {
            status: "healthy",
            backend: "llm",
            message: "AI service is ready",
        },
        backend => AiHealthResponse {
            status: "limited",
            backend,
            message: "LLM not configured (ANTHROPIC_API_KEY). Template generation available.",
        },
    };
    Json(response)
}
