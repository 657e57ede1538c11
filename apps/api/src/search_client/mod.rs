//! Search client — SerpAPI wrapper behind the `SearchService` seam.
//!
//! Returns a plain-text block, one result per paragraph with the
//! `title - link` on the first line, so downstream consumers that treat the
//! first line as a pseudo-link keep working.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::errors::AppError;
use crate::services::SearchService;

const SERPAPI_URL: &str = "https://serpapi.com/search.json";
const ENGINE: &str = "google";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct SerpResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    title: String,
    link: String,
    #[serde(default)]
    snippet: Option<String>,
}

#[derive(Clone)]
pub struct SerpApiClient {
    client: Client,
}

impl Default for SerpApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SerpApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    async fn run_query(&self, api_key: &str, query: &str) -> Result<String, SearchError> {
        let response = self
            .client
            .get(SERPAPI_URL)
            .query(&[("engine", ENGINE), ("q", query), ("api_key", api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: SerpResponse = response.json().await?;
        debug!(
            "Search for {query:?} returned {} organic results",
            parsed.organic_results.len()
        );
        Ok(render_results(query, &parsed.organic_results))
    }
}

/// Flattens organic results into the unstructured text the rest of the
/// pipeline expects.
fn render_results(query: &str, results: &[OrganicResult]) -> String {
    if results.is_empty() {
        return format!("No good search results found for {query:?}");
    }
    results
        .iter()
        .map(|r| match r.snippet.as_deref() {
            Some(snippet) => format!("{} - {}\n{}", r.title, r.link, snippet),
            None => format!("{} - {}", r.title, r.link),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[async_trait]
impl SearchService for SerpApiClient {
    async fn search(&self, api_key: &str, query: &str) -> Result<String, AppError> {
        self.run_query(api_key, query)
            .await
            .map_err(|e| AppError::Search(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_results_first_line_is_title_and_link() {
        let results = vec![
            OrganicResult {
                title: "Senior Engineer at Acme".to_string(),
                link: "https://example.com/jobs/1".to_string(),
                snippet: Some("Remote-friendly engineering role".to_string()),
            },
            OrganicResult {
                title: "Engineer II".to_string(),
                link: "https://example.com/jobs/2".to_string(),
                snippet: None,
            },
        ];
        let text = render_results("engineer jobs", &results);
        let first_line = text.lines().next().unwrap();
        assert_eq!(
            first_line,
            "Senior Engineer at Acme - https://example.com/jobs/1"
        );
        assert!(text.contains("Engineer II - https://example.com/jobs/2"));
    }

    #[test]
    fn test_render_results_empty_mentions_query() {
        let text = render_results("underwater basket weaver jobs", &[]);
        assert!(text.contains("underwater basket weaver jobs"));
    }

    #[test]
    fn test_serp_response_tolerates_missing_organic_results() {
        let parsed: SerpResponse = serde_json::from_str(r#"{"search_metadata": {}}"#).unwrap();
        assert!(parsed.organic_results.is_empty());
    }
}
