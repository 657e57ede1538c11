pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::agent;
use crate::generation;
use crate::ingest;
use crate::session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Credential gate & session view
        .route(
            "/api/v1/sessions",
            post(session::handlers::handle_create_session),
        )
        .route(
            "/api/v1/sessions/:id",
            get(session::handlers::handle_get_session),
        )
        // Resume ingestion
        .route(
            "/api/v1/sessions/:id/resume",
            post(ingest::handlers::handle_upload_resume),
        )
        // Job search agent
        .route(
            "/api/v1/sessions/:id/jobs",
            post(agent::handlers::handle_find_jobs),
        )
        // Generation
        .route(
            "/api/v1/sessions/:id/cover-letter",
            post(generation::handlers::handle_cover_letter),
        )
        .route(
            "/api/v1/sessions/:id/resume/tailor",
            post(generation::handlers::handle_tailor_resume),
        )
        .route(
            "/api/v1/sessions/:id/resume/download",
            get(generation::handlers::handle_download_resume),
        )
        .route(
            "/api/v1/sessions/:id/summary",
            get(generation::handlers::handle_summary),
        )
        .with_state(state)
}
