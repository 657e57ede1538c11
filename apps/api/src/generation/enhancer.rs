//! Résumé tailoring — rewrite the résumé against the job-search results.

use crate::errors::AppError;
use crate::generation::prompts::{GENERATION_SYSTEM, RESUME_UPDATE_PROMPT_TEMPLATE};
use crate::generation::{truncate_chars, PROMPT_CHAR_BUDGET};
use crate::services::CompletionService;

/// Fills the tailoring template with the first 2000 characters of both the
/// résumé and the job-search result text, and requests one completion.
pub async fn enhance_resume(
    completion: &dyn CompletionService,
    api_key: &str,
    resume_text: &str,
    job_results: &str,
) -> Result<String, AppError> {
    let prompt = RESUME_UPDATE_PROMPT_TEMPLATE
        .replace("{resume}", truncate_chars(resume_text, PROMPT_CHAR_BUDGET))
        .replace("{jobdesc}", truncate_chars(job_results, PROMPT_CHAR_BUDGET));

    completion.complete(api_key, GENERATION_SYSTEM, &prompt).await
}
