//! Axum handler for the find-jobs action.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::agent::run_job_search;
use crate::errors::AppError;
use crate::session::StageAvailability;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FindJobsRequest {
    pub job_title: String,
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct FindJobsResponse {
    pub job_results: String,
    pub stages: StageAvailability,
}

/// POST /api/v1/sessions/:id/jobs
///
/// Builds the query `"{title} jobs in {location}"` and runs the bounded
/// search agent. The result text is stored on the session; its first line
/// later doubles as the pseudo-link in the summary.
pub async fn handle_find_jobs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<FindJobsRequest>,
) -> Result<Json<FindJobsResponse>, AppError> {
    if req.job_title.trim().is_empty() || req.location.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter both job title and location".to_string(),
        ));
    }

    let session = state.sessions.get(id)?;
    let query = format!("{} jobs in {}", req.job_title, req.location);
    info!("Session {id}: searching for {query:?}");

    let job_results = run_job_search(
        state.completion.as_ref(),
        state.search.as_ref(),
        &session.credentials,
        &query,
        state.config.agent_max_steps,
    )
    .await?;

    let stages = state.sessions.update(id, |s| {
        s.job_title = Some(req.job_title);
        s.location = Some(req.location);
        s.job_results = Some(job_results.clone());
    })?;

    Ok(Json(FindJobsResponse {
        job_results,
        stages,
    }))
}
