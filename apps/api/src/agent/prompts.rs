// Prompt constants for the job search agent loop.

/// System prompt enforcing the two-directive protocol the step parser
/// understands. Anything else triggers a bounded corrective re-prompt.
pub const AGENT_SYSTEM: &str = "You are a job search assistant with access to one tool: \
    a web search engine for finding current job listings. \
    On every turn you MUST reply with exactly one directive: \
    either 'SEARCH: <query>' to run a web search, \
    or 'FINAL: <answer>' once you have enough information. \
    In the FINAL answer, list the most relevant job listings you found, \
    one per line, starting each line with the job title and a link. \
    Do NOT output anything before the directive keyword.";

/// Step prompt template. Replace `{query}` and `{transcript}` before sending.
pub const AGENT_STEP_PROMPT_TEMPLATE: &str = "\
The user is looking for: {query}

Transcript of your previous searches and their results:
{transcript}

Reply with your next directive (SEARCH: or FINAL:).";

/// Corrective observation appended when a reply carries no directive.
pub const AGENT_REPARSE_NOTE: &str =
    "Your previous reply did not start with SEARCH: or FINAL:. Reply with exactly one directive.";
