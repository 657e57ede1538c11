//! Narrow seams for the two external services.
//!
//! Each trait is one method, text in → text out, so handlers and the agent
//! loop never touch HTTP details and tests can substitute deterministic
//! stubs. Carried in `AppState` as `Arc<dyn …>`.

use async_trait::async_trait;

use crate::errors::AppError;

/// Text completion: prompt in, generated text out.
/// API keys are per-session, so the key rides along on every call.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(
        &self,
        api_key: &str,
        system: &str,
        prompt: &str,
    ) -> Result<String, AppError>;
}

/// Web search: query in, unstructured result text out.
#[async_trait]
pub trait SearchService: Send + Sync {
    async fn search(&self, api_key: &str, query: &str) -> Result<String, AppError>;
}
