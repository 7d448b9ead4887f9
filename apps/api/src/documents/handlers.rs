//! Axum route handlers for the Documents API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::document::{Document, DocumentKind};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateDocumentRequest {
    #[serde(default)]
    pub raw_text: String,
    #[serde(default)]
    pub document_kind: DocumentKind,
    /// Defaulted so a missing title is reported by validation, not the extractor.
    #[serde(default)]
    pub title: String,
}

/// POST /api/v1/documents
///
/// Registers a document produced elsewhere (e.g. an external generation step).
pub async fn handle_create_document(
    State(state): State<AppState>,
    Json(request): Json<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<Document>), AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let document = state
        .documents
        .insert(request.title, request.document_kind, request.raw_text)
        .await;

    Ok((StatusCode::CREATED, Json(document)))
}

/// GET /api/v1/documents
pub async fn handle_list_documents(State(state): State<AppState>) -> Json<Vec<Document>> {
    Json(state.documents.list().await)
}

/// GET /api/v1/documents/:id
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Document>, AppError> {
    state
        .documents
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Document {id} not found")))
}
