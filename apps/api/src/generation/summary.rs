//! Application summary — pure display step, no network or file calls.

use serde::Serialize;

use crate::generation::truncate_chars;

/// How much of the updated résumé the summary echoes.
pub const RESUME_EXCERPT_CHARS: usize = 1000;

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationSummary {
    /// First line of the raw search result text, used as a pseudo-link.
    pub job_link: String,
    pub cover_letter: String,
    /// First 1000 characters of the updated résumé, with a literal trailing
    /// ellipsis.
    pub resume_excerpt: String,
}

pub fn build_summary(
    job_results: &str,
    cover_letter: &str,
    updated_resume: &str,
) -> ApplicationSummary {
    let job_link = job_results
        .split('\n')
        .next()
        .unwrap_or_default()
        .to_string();
    let resume_excerpt = format!(
        "{}...",
        truncate_chars(updated_resume, RESUME_EXCERPT_CHARS)
    );

    ApplicationSummary {
        job_link,
        cover_letter: cover_letter.to_string(),
        resume_excerpt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_link_is_first_line_of_results() {
        let results = "Engineer - https://example.com/jobs/1\nSecond line\nThird line";
        let summary = build_summary(results, "letter", "resume");
        assert_eq!(summary.job_link, "Engineer - https://example.com/jobs/1");
    }

    #[test]
    fn test_job_link_of_single_line_result_is_whole_text() {
        let summary = build_summary("only line", "letter", "resume");
        assert_eq!(summary.job_link, "only line");
    }

    #[test]
    fn test_resume_excerpt_is_first_1000_chars_plus_ellipsis() {
        let resume = format!("{}{}", "x".repeat(1000), "TAIL");
        let summary = build_summary("link", "letter", &resume);
        assert_eq!(summary.resume_excerpt, format!("{}...", "x".repeat(1000)));
    }

    #[test]
    fn test_short_resume_still_gets_ellipsis() {
        let summary = build_summary("link", "letter", "short");
        assert_eq!(summary.resume_excerpt, "short...");
    }
}
