//! Session context — the explicit per-session state object.
//!
//! Everything the pipeline derives (résumé text, job results, cover letter,
//! updated résumé) lives here, in memory only. A stage becomes available
//! once its textual prerequisites are non-empty; nothing survives restart.

pub mod handlers;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;

/// The two secrets entered at session start. Held for the lifetime of the
/// session, passed to every downstream call, never persisted or echoed.
#[derive(Clone)]
pub struct Credentials {
    pub completion_api_key: String,
    pub search_api_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("completion_api_key", &"<redacted>")
            .field("search_api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct SessionContext {
    pub id: Uuid,
    pub credentials: Credentials,
    pub job_title: Option<String>,
    pub location: Option<String>,
    pub skills: Option<String>,
    pub resume_text: Option<String>,
    pub job_results: Option<String>,
    pub cover_letter: Option<String>,
    pub updated_resume: Option<String>,
}

impl SessionContext {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            id: Uuid::new_v4(),
            credentials,
            job_title: None,
            location: None,
            skills: None,
            resume_text: None,
            job_results: None,
            cover_letter: None,
            updated_resume: None,
        }
    }

    /// Which stages have their textual prerequisites populated.
    pub fn stages(&self) -> StageAvailability {
        let has = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        StageAvailability {
            resume_parsed: has(&self.resume_text),
            jobs_found: has(&self.job_results),
            cover_letter_ready: has(&self.cover_letter),
            updated_resume_ready: has(&self.updated_resume),
            summary_ready: has(&self.job_results)
                && has(&self.cover_letter)
                && has(&self.updated_resume),
        }
    }
}

/// Presence flags for the gating rule: each stage of the flow activates
/// only once the texts it depends on exist.
#[derive(Debug, Clone, Serialize)]
pub struct StageAvailability {
    pub resume_parsed: bool,
    pub jobs_found: bool,
    pub cover_letter_ready: bool,
    pub updated_resume_ready: bool,
    pub summary_ready: bool,
}

/// In-memory session store. One logical writer per session (one user), so a
/// plain RwLock with short critical sections is enough; no await happens
/// while the lock is held.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, SessionContext>>>,
}

impl SessionStore {
    pub fn insert(&self, session: SessionContext) {
        self.inner
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(session.id, session);
    }

    /// Returns a snapshot of the session. Handlers work on the snapshot and
    /// write results back through `update`, keeping network calls outside
    /// the lock.
    pub fn get(&self, id: Uuid) -> Result<SessionContext, AppError> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("No session with id {id}")))
    }

    pub fn update<F>(&self, id: Uuid, f: F) -> Result<StageAvailability, AppError>
    where
        F: FnOnce(&mut SessionContext),
    {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let session = guard
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("No session with id {id}")))?;
        f(session);
        Ok(session.stages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials {
            completion_api_key: "k1".to_string(),
            search_api_key: "k2".to_string(),
        }
    }

    #[test]
    fn test_new_session_has_no_stages_available() {
        let session = SessionContext::new(creds());
        let stages = session.stages();
        assert!(!stages.resume_parsed);
        assert!(!stages.jobs_found);
        assert!(!stages.cover_letter_ready);
        assert!(!stages.updated_resume_ready);
        assert!(!stages.summary_ready);
    }

    #[test]
    fn test_summary_requires_all_three_texts() {
        let mut session = SessionContext::new(creds());
        session.job_results = Some("Engineer - Remote".to_string());
        session.cover_letter = Some("Dear hiring manager".to_string());
        assert!(!session.stages().summary_ready);

        session.updated_resume = Some("Updated resume".to_string());
        assert!(session.stages().summary_ready);
    }

    #[test]
    fn test_store_get_unknown_session_is_not_found() {
        let store = SessionStore::default();
        let err = store.get(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_store_update_writes_back() {
        let store = SessionStore::default();
        let session = SessionContext::new(creds());
        let id = session.id;
        store.insert(session);

        let stages = store
            .update(id, |s| s.resume_text = Some("text".to_string()))
            .unwrap();
        assert!(stages.resume_parsed);
        assert_eq!(store.get(id).unwrap().resume_text.as_deref(), Some("text"));
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let debug = format!("{:?}", creds());
        assert!(!debug.contains("k1"));
        assert!(!debug.contains("k2"));
    }
}
