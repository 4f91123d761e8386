//! Environment-sourced configuration, read once at startup.

use anyhow::{Context, bail};
use resumake_llm::GroqConfig;
use std::time::Duration;

const DEFAULT_PORT: u16 = 8080;

/// Immutable server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub groq: GroqConfig,
    pub port: u16,
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// `GROQ_API_KEY` is required; everything else has defaults. A missing
    /// credential is a startup failure, never a per-request error.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Tests drive this with plain
    /// maps instead of mutating process-global env vars.
    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_key = var("GROQ_API_KEY").unwrap_or_default();
        if api_key.trim().is_empty() {
            bail!("GROQ_API_KEY is not set; refusing to start");
        }

        let mut groq = GroqConfig::new(api_key);
        if let Some(url) = var("GROQ_API_URL") {
            groq = groq.with_base_url(url);
        }
        if let Some(model) = var("GROQ_MODEL") {
            groq = groq.with_model(model);
        }
        if let Some(secs) = var("GROQ_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .context("GROQ_TIMEOUT_SECS must be an integer")?;
            groq = groq.with_timeout(Duration::from_secs(secs));
        }

        let port = match var("PORT") {
            Some(p) => p.parse().context("PORT must be a port number")?,
            None => DEFAULT_PORT,
        };

        Ok(Self { groq, port })
    }
}
