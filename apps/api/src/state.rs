use std::sync::Arc;

use crate::config::Config;
use crate::services::{CompletionService, SearchService};
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// In-memory per-session pipeline state. Nothing is persisted.
    pub sessions: SessionStore,
    /// Narrow completion seam — production: OpenAI chat completions.
    pub completion: Arc<dyn CompletionService>,
    /// Narrow search seam — production: SerpAPI.
    pub search: Arc<dyn SearchService>,
    pub config: Config,
}
