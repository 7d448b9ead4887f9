//! Axum route handlers for classification and the preview/edit session.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::preview::classifier::{classify, line_count, Block};
use crate::preview::controller::{
    HostEvent, Outbox, PreviewController, PreviewInput, TransitionError,
};
use crate::preview::render::{render_html, PreviewView};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub raw_text: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub line_count: usize,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Deserialize)]
pub struct DraftRequest {
    pub text: String,
}

/// POST /api/v1/classify
pub async fn handle_classify(Json(request): Json<ClassifyRequest>) -> Json<ClassifyResponse> {
    Json(ClassifyResponse {
        line_count: line_count(&request.raw_text),
        blocks: classify(&request.raw_text),
    })
}

/// Runs one controller operation against a document's preview. Saved text has
/// already reached the store when this returns.
async fn apply<F>(state: &AppState, document_id: Uuid, op: F) -> Result<PreviewView, AppError>
where
    F: FnOnce(&mut PreviewController<Outbox>) -> Result<(), TransitionError>,
{
    let outcome = state.previews.run(document_id, op).await?;

    for event in &outcome.events {
        match event {
            HostEvent::Saved(text) => info!(
                "Preview for document {document_id} saved ({} chars)",
                text.chars().count()
            ),
            HostEvent::Closed => info!("Preview for document {document_id} closed"),
        }
    }

    Ok(outcome.view)
}

/// POST /api/v1/documents/:id/preview
pub async fn handle_open_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PreviewView>, AppError> {
    let document = state
        .documents
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Document {id} not found")))?;

    let input = PreviewInput {
        raw_text: document.raw_text,
        document_kind: document.kind,
        title: document.title,
    };
    apply(&state, id, |c| c.open(input)).await.map(Json)
}

/// GET /api/v1/documents/:id/preview
pub async fn handle_get_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<PreviewView> {
    Json(state.previews.view(id).await)
}

/// GET /api/v1/documents/:id/preview/html
pub async fn handle_preview_html(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Html<String> {
    Html(render_html(&state.previews.view(id).await))
}

/// POST /api/v1/documents/:id/preview/edit
pub async fn handle_begin_edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PreviewView>, AppError> {
    apply(&state, id, |c| c.begin_edit()).await.map(Json)
}

/// PUT /api/v1/documents/:id/preview/draft
///
/// Draft text is never validated; empty text is allowed.
pub async fn handle_edit_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<DraftRequest>,
) -> Result<Json<PreviewView>, AppError> {
    apply(&state, id, |c| c.edit_draft(request.text))
        .await
        .map(Json)
}

/// POST /api/v1/documents/:id/preview/cancel
pub async fn handle_cancel_edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PreviewView>, AppError> {
    apply(&state, id, |c| c.cancel_edit()).await.map(Json)
}

/// POST /api/v1/documents/:id/preview/save
pub async fn handle_save_edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PreviewView>, AppError> {
    apply(&state, id, |c| c.save_edit()).await.map(Json)
}

/// DELETE /api/v1/documents/:id/preview
///
/// Unsaved drafts are discarded without confirmation.
pub async fn handle_close_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    apply(&state, id, |c| c.close()).await?;
    Ok(StatusCode::NO_CONTENT)
}
