//! Axum handlers for the Generation API: cover letter, résumé tailoring,
//! download, and the application summary.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::cover_letter::generate_cover_letter;
use crate::generation::enhancer::enhance_resume;
use crate::generation::summary::{build_summary, ApplicationSummary};
use crate::session::{SessionContext, StageAvailability};
use crate::state::AppState;

/// Suggested filename for the download artifact.
const DOWNLOAD_FILENAME: &str = "updated_resume.txt";

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    pub skills: String,
    /// Optional override; defaults to the job title used for the search.
    pub job_title: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
    pub stages: StageAvailability,
}

#[derive(Debug, Serialize)]
pub struct TailorResumeResponse {
    pub updated_resume: String,
    pub stages: StageAvailability,
}

fn require_text<'a>(
    value: &'a Option<String>,
    missing: &str,
) -> Result<&'a str, AppError> {
    value
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::PreconditionFailed(missing.to_string()))
}

fn require_resume(session: &SessionContext) -> Result<&str, AppError> {
    require_text(
        &session.resume_text,
        "Upload a resume before using this stage",
    )
}

/// POST /api/v1/sessions/:id/cover-letter
///
/// Requires a parsed résumé, non-empty skills, and a job title (from the
/// request or from an earlier job search).
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    if req.skills.trim().is_empty() {
        return Err(AppError::Validation(
            "Fill in your skills to generate a cover letter".to_string(),
        ));
    }

    let session = state.sessions.get(id)?;
    let resume_text = require_resume(&session)?.to_string();
    let job_title = match req.job_title {
        Some(title) if !title.trim().is_empty() => title,
        _ => session.job_title.clone().ok_or_else(|| {
            AppError::Validation(
                "Provide a job title (or run a job search first)".to_string(),
            )
        })?,
    };

    info!("Session {id}: generating cover letter for {job_title:?}");
    let cover_letter = generate_cover_letter(
        state.completion.as_ref(),
        &session.credentials.completion_api_key,
        &resume_text,
        &req.skills,
        &job_title,
    )
    .await?;

    let stages = state.sessions.update(id, |s| {
        s.skills = Some(req.skills);
        s.job_title = Some(job_title);
        s.cover_letter = Some(cover_letter.clone());
    })?;

    Ok(Json(CoverLetterResponse {
        cover_letter,
        stages,
    }))
}

/// POST /api/v1/sessions/:id/resume/tailor
///
/// Requires a parsed résumé and prior job-search results.
pub async fn handle_tailor_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TailorResumeResponse>, AppError> {
    let session = state.sessions.get(id)?;
    let resume_text = require_resume(&session)?.to_string();
    let job_results = require_text(
        &session.job_results,
        "Search for a job before tailoring the resume",
    )?
    .to_string();

    info!("Session {id}: tailoring resume");
    let updated_resume = enhance_resume(
        state.completion.as_ref(),
        &session.credentials.completion_api_key,
        &resume_text,
        &job_results,
    )
    .await?;

    let stages = state
        .sessions
        .update(id, |s| s.updated_resume = Some(updated_resume.clone()))?;

    Ok(Json(TailorResumeResponse {
        updated_resume,
        stages,
    }))
}

/// GET /api/v1/sessions/:id/resume/download
///
/// Plain-text download of the updated résumé.
pub async fn handle_download_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let session = state.sessions.get(id)?;
    let updated_resume = require_text(
        &session.updated_resume,
        "Tailor the resume before downloading it",
    )?
    .to_string();

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DOWNLOAD_FILENAME}\""),
            ),
        ],
        updated_resume,
    ))
}

/// GET /api/v1/sessions/:id/summary
///
/// All three derived texts must exist; a summary is never rendered from
/// partial state.
pub async fn handle_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApplicationSummary>, AppError> {
    let session = state.sessions.get(id)?;
    let job_results = require_text(
        &session.job_results,
        "Search for a job before requesting the summary",
    )?;
    let cover_letter = require_text(
        &session.cover_letter,
        "Generate a cover letter before requesting the summary",
    )?;
    let updated_resume = require_text(
        &session.updated_resume,
        "Tailor the resume before requesting the summary",
    )?;

    Ok(Json(build_summary(job_results, cover_letter, updated_resume)))
}
