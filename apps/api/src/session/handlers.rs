//! Axum handlers for session lifecycle: the credential gate and the
//! stage-availability view.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::{Credentials, SessionContext, StageAvailability};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub openai_api_key: String,
    pub serpapi_api_key: String,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    pub stages: StageAvailability,
}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub job_title: Option<String>,
    pub location: Option<String>,
    pub skills: Option<String>,
    pub stages: StageAvailability,
}

/// POST /api/v1/sessions
///
/// The credential gate. If either key is empty no session is created, so no
/// downstream endpoint (they all resolve a session first) can ever fire an
/// external call. Key validity is not checked here; bad keys surface when
/// the external service rejects them.
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<CreateSessionResponse>, AppError> {
    if req.openai_api_key.trim().is_empty() || req.serpapi_api_key.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter both API keys to continue".to_string(),
        ));
    }

    let session = SessionContext::new(Credentials {
        completion_api_key: req.openai_api_key,
        search_api_key: req.serpapi_api_key,
    });
    let response = CreateSessionResponse {
        session_id: session.id,
        stages: session.stages(),
    };
    tracing::info!("Session {} created", response.session_id);
    state.sessions.insert(session);

    Ok(Json(response))
}

/// GET /api/v1/sessions/:id
///
/// Echoes the non-secret session fields plus stage availability.
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.get(id)?;
    let stages = session.stages();
    Ok(Json(SessionView {
        session_id: session.id,
        job_title: session.job_title,
        location: session.location,
        skills: session.skills,
        stages,
    }))
}
