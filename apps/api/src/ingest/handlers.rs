//! Axum handler for résumé upload.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::ingest::extract_resume_text;
use crate::session::StageAvailability;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ResumeUploadResponse {
    /// Length in characters of the extracted résumé text.
    pub characters: usize,
    pub stages: StageAvailability,
}

/// POST /api/v1/sessions/:id/resume
///
/// Accepts a single multipart PDF file, extracts its text, and stores it on
/// the session as `resume_text`.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ResumeUploadResponse>, AppError> {
    // Resolve the session before touching the upload
    state.sessions.get(id)?;

    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart upload: {e}")))?
        .ok_or_else(|| AppError::Validation("A PDF file is required".to_string()))?;

    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read uploaded file: {e}")))?;

    if bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    // pdf-extract is CPU-bound; keep it off the async runtime threads
    let resume_text =
        tokio::task::spawn_blocking(move || extract_resume_text(&bytes))
            .await
            .map_err(anyhow::Error::from)??;

    let characters = resume_text.chars().count();
    info!("Session {id}: resume parsed ({characters} chars)");

    let stages = state
        .sessions
        .update(id, |s| s.resume_text = Some(resume_text))?;

    Ok(Json(ResumeUploadResponse { characters, stages }))
}
