use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// API credentials are NOT configured here: both secrets are supplied per
/// session through the session-create endpoint and live only in memory.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on completion calls per job-search agent run.
    pub agent_max_steps: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            agent_max_steps: std::env::var("AGENT_MAX_STEPS")
                .unwrap_or_else(|_| "8".to_string())
                .parse::<u32>()
                .context("AGENT_MAX_STEPS must be a positive integer")?,
        })
    }
}
