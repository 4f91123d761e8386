//! Groq chat-completions client (OpenAI-compatible API).

use crate::error::{Error, Result};
use crate::types::{ChatMessage, ChatRequest, ChatResponse, GroqConfig};
use async_trait::async_trait;
use tracing::{debug, info};

/// Completion bounds used for every resume generation.
const MAX_TOKENS: u32 = 4000;
const TEMPERATURE: f32 = 0.7;

/// Anything that can turn a prompt into raw completion text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `prompt` as a single user-role message and return the text
    /// content of the first choice.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Groq HTTP client. Bearer auth, one attempt per call, no retries.
pub struct GroqClient {
    config: GroqConfig,
    client: reqwest::Client,
}

impl GroqClient {
    /// Create a client. An empty API key is rejected here so a
    /// misconfiguration fails at startup rather than on the first request.
    ///
    /// Environment reading lives with the caller; this type only ever sees
    /// an already-built [`GroqConfig`].
    pub fn new(config: GroqConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::MissingApiKey("groq"));
        }
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let body = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };
        debug!(model = %body.model, prompt_len = prompt.len(), "sending completion request");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout(self.config.timeout.as_secs())
                } else {
                    Error::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: ChatResponse = response.json().await?;
        let content = envelope
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .ok_or_else(|| {
                Error::MalformedReply("no choices[0].message.content in response".to_string())
            })?;
        info!(content_len = content.len(), "completion received");
        Ok(content.to_string())
    }
}
