//! Cover letter generation — one template fill, one completion call.

use crate::errors::AppError;
use crate::generation::prompts::{COVER_LETTER_PROMPT_TEMPLATE, GENERATION_SYSTEM};
use crate::generation::{truncate_chars, PROMPT_CHAR_BUDGET};
use crate::services::CompletionService;

/// Fills the cover-letter template with the first 2000 characters of the
/// résumé plus skills and job title, and requests one completion. The output
/// is not validated or length-capped.
pub async fn generate_cover_letter(
    completion: &dyn CompletionService,
    api_key: &str,
    resume_text: &str,
    skills: &str,
    job_title: &str,
) -> Result<String, AppError> {
    let prompt = COVER_LETTER_PROMPT_TEMPLATE
        .replace("{resume}", truncate_chars(resume_text, PROMPT_CHAR_BUDGET))
        .replace("{skills}", skills)
        .replace("{job}", job_title);

    completion.complete(api_key, GENERATION_SYSTEM, &prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::stubs::StubCompletion;

    #[tokio::test]
    async fn test_resume_truncated_to_first_2000_chars() {
        let completion = StubCompletion::scripted(&["Dear Hiring Manager,"]);
        let resume = format!("{}{}", "a".repeat(2000), "OVERFLOW");

        generate_cover_letter(&completion, "k1", &resume, "Python", "Engineer")
            .await
            .unwrap();

        let prompts = completion.prompts.lock().unwrap();
        assert!(prompts[0].contains(&"a".repeat(2000)));
        assert!(!prompts[0].contains("OVERFLOW"));
    }

    #[tokio::test]
    async fn test_prompt_carries_skills_and_job_title() {
        let completion = StubCompletion::scripted(&["Dear Hiring Manager,"]);

        let letter =
            generate_cover_letter(&completion, "k1", "resume text", "Python", "Engineer")
                .await
                .unwrap();

        assert_eq!(letter, "Dear Hiring Manager,");
        let prompts = completion.prompts.lock().unwrap();
        assert!(prompts[0].contains("Engineer"));
        assert!(prompts[0].contains("Python"));
        assert!(prompts[0].contains("resume text"));
    }
}
