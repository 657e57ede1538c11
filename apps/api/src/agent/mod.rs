//! Job search agent — a bounded search-augmented reasoning loop.
//!
//! Explicit state machine: `Querying` asks the completion service for the
//! next directive, `AwaitingToolResult` runs one web search and feeds the
//! observation back, `Finalizing` yields the answer. The maximum number of
//! completion steps is injected (config `AGENT_MAX_STEPS`), so a model that
//! never finalizes terminates with an error instead of looping forever.
//! Malformed directives get a bounded number of corrective re-prompts.

pub mod handlers;
pub mod prompts;

use tracing::{debug, info};

use crate::agent::prompts::{AGENT_REPARSE_NOTE, AGENT_STEP_PROMPT_TEMPLATE, AGENT_SYSTEM};
use crate::errors::AppError;
use crate::services::{CompletionService, SearchService};
use crate::session::Credentials;

/// Max corrective re-prompts for replies carrying no directive, across the
/// whole run.
const MAX_PARSE_RETRIES: u32 = 2;

/// Agent phases. `AwaitingToolResult` and `Finalizing` carry the text that
/// moved the machine there.
#[derive(Debug)]
enum AgentPhase {
    Querying,
    AwaitingToolResult { search_query: String },
    Finalizing { answer: String },
}

/// One directive parsed from a model reply.
#[derive(Debug, PartialEq)]
enum Directive {
    Search(String),
    Final(String),
}

/// Finds the first `SEARCH:` or `FINAL:` directive at a line start.
/// `FINAL:` captures everything after the keyword, including later lines.
fn parse_directive(reply: &str) -> Option<Directive> {
    for (idx, line) in reply.lines().enumerate() {
        let line = line.trim_start();
        if let Some(query) = line.strip_prefix("SEARCH:") {
            let query = query.trim();
            if !query.is_empty() {
                return Some(Directive::Search(query.to_string()));
            }
        }
        if let Some(rest) = line.strip_prefix("FINAL:") {
            let mut answer = rest.trim_start().to_string();
            for later in reply.lines().skip(idx + 1) {
                if !answer.is_empty() {
                    answer.push('\n');
                }
                answer.push_str(later);
            }
            let answer = answer.trim().to_string();
            if !answer.is_empty() {
                return Some(Directive::Final(answer));
            }
        }
    }
    None
}

/// Runs the agent loop for one query and returns the final answer text.
pub async fn run_job_search(
    completion: &dyn CompletionService,
    search: &dyn SearchService,
    credentials: &Credentials,
    query: &str,
    max_steps: u32,
) -> Result<String, AppError> {
    let mut phase = AgentPhase::Querying;
    let mut transcript = String::from("(no searches yet)\n");
    let mut completion_steps = 0;
    let mut parse_retries = 0;

    loop {
        phase = match phase {
            AgentPhase::Querying => {
                if completion_steps >= max_steps {
                    return Err(AppError::Llm(format!(
                        "Job search agent did not produce a final answer within {max_steps} steps"
                    )));
                }
                completion_steps += 1;

                let prompt = AGENT_STEP_PROMPT_TEMPLATE
                    .replace("{query}", query)
                    .replace("{transcript}", &transcript);
                let reply = completion
                    .complete(&credentials.completion_api_key, AGENT_SYSTEM, &prompt)
                    .await?;
                debug!("Agent step {completion_steps}: {reply:?}");

                match parse_directive(&reply) {
                    Some(Directive::Search(search_query)) => {
                        AgentPhase::AwaitingToolResult { search_query }
                    }
                    Some(Directive::Final(answer)) => AgentPhase::Finalizing { answer },
                    None => {
                        parse_retries += 1;
                        if parse_retries > MAX_PARSE_RETRIES {
                            return Err(AppError::Llm(format!(
                                "Job search agent replies stayed unparseable after {MAX_PARSE_RETRIES} corrections"
                            )));
                        }
                        transcript.push_str(&format!("NOTE: {AGENT_REPARSE_NOTE}\n"));
                        AgentPhase::Querying
                    }
                }
            }
            AgentPhase::AwaitingToolResult { search_query } => {
                let observation = search
                    .search(&credentials.search_api_key, &search_query)
                    .await?;
                transcript.push_str(&format!(
                    "SEARCH: {search_query}\nOBSERVATION:\n{observation}\n\n"
                ));
                AgentPhase::Querying
            }
            AgentPhase::Finalizing { answer } => {
                info!("Agent finalized after {completion_steps} completion steps");
                return Ok(answer);
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::stubs::{StubCompletion, StubSearch};
    use crate::session::Credentials;

    fn creds() -> Credentials {
        Credentials {
            completion_api_key: "k1".to_string(),
            search_api_key: "k2".to_string(),
        }
    }

    #[test]
    fn test_parse_directive_search() {
        assert_eq!(
            parse_directive("SEARCH: engineer jobs in remote"),
            Some(Directive::Search("engineer jobs in remote".to_string()))
        );
    }

    #[test]
    fn test_parse_directive_final_spans_lines() {
        let reply = "FINAL: Engineer - https://example.com/jobs/1\nEngineer II - https://example.com/jobs/2";
        assert_eq!(
            parse_directive(reply),
            Some(Directive::Final(
                "Engineer - https://example.com/jobs/1\nEngineer II - https://example.com/jobs/2"
                    .to_string()
            ))
        );
    }

    #[test]
    fn test_parse_directive_skips_preamble_lines() {
        let reply = "Let me search for that.\nSEARCH: rust jobs";
        assert_eq!(
            parse_directive(reply),
            Some(Directive::Search("rust jobs".to_string()))
        );
    }

    #[test]
    fn test_parse_directive_rejects_undirected_reply() {
        assert_eq!(parse_directive("Here are some thoughts about jobs."), None);
    }

    #[tokio::test]
    async fn test_agent_search_then_final() {
        let completion = StubCompletion::scripted(&[
            "SEARCH: Engineer jobs in Remote",
            "FINAL: Senior Engineer - https://example.com/jobs/1",
        ]);
        let search = StubSearch::returning("Senior Engineer - https://example.com/jobs/1\nGreat role");

        let answer = run_job_search(&completion, &search, &creds(), "Engineer jobs in Remote", 8)
            .await
            .unwrap();

        assert_eq!(answer, "Senior Engineer - https://example.com/jobs/1");
        assert_eq!(search.call_count(), 1);
        assert_eq!(
            search.queries.lock().unwrap()[0],
            "Engineer jobs in Remote"
        );
        // Second step prompt carries the first observation
        let prompts = completion.prompts.lock().unwrap();
        assert!(prompts[1].contains("Great role"));
    }

    #[tokio::test]
    async fn test_agent_never_finalizing_stops_at_max_steps() {
        let completion = StubCompletion::scripted(&[
            "SEARCH: a",
            "SEARCH: b",
            "SEARCH: c",
            "SEARCH: d",
            "SEARCH: e",
        ]);
        let search = StubSearch::returning("nothing useful");

        let err = run_job_search(&completion, &search, &creds(), "query", 3)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Llm(_)));
        assert_eq!(completion.call_count(), 3);
        assert_eq!(search.call_count(), 3);
    }

    #[tokio::test]
    async fn test_agent_reprompts_on_malformed_reply_then_succeeds() {
        let completion = StubCompletion::scripted(&[
            "I think I should look online.",
            "FINAL: Engineer - https://example.com/jobs/1",
        ]);
        let search = StubSearch::returning("unused");

        let answer = run_job_search(&completion, &search, &creds(), "query", 8)
            .await
            .unwrap();

        assert_eq!(answer, "Engineer - https://example.com/jobs/1");
        assert_eq!(search.call_count(), 0);
        let prompts = completion.prompts.lock().unwrap();
        assert!(prompts[1].contains("did not start with SEARCH"));
    }

    #[tokio::test]
    async fn test_agent_gives_up_after_repeated_malformed_replies() {
        let completion =
            StubCompletion::scripted(&["no directive", "still none", "nope", "never"]);
        let search = StubSearch::returning("unused");

        let err = run_job_search(&completion, &search, &creds(), "query", 8)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Llm(_)));
        assert_eq!(completion.call_count(), 3); // initial + MAX_PARSE_RETRIES corrections
    }
}
