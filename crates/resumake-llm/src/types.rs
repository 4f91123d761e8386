//! Wire types for the Groq chat-completions API plus the parsed reply.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Groq completion client.
///
/// Built once at startup from the environment and passed explicitly to
/// [`GroqClient`](crate::GroqClient); no ambient/global state.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// API key for bearer authentication
    pub api_key: String,
    /// Base URL (default: https://api.groq.com/openai/v1)
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// HTTP timeout for a single completion request
    pub timeout: Duration,
}

impl GroqConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.groq.com/openai/v1";
    pub const DEFAULT_MODEL: &'static str = "llama3-70b-8192";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

    /// Create new config with API key and defaults for everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Set base URL. Operators often configure the full endpoint URL, so a
    /// trailing `/chat/completions` is stripped here.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        if let Some(stripped) = url.strip_suffix("/chat/completions") {
            url = stripped.to_string();
        }
        while url.ends_with('/') {
            url.pop();
        }
        self.base_url = url;
        self
    }

    /// Set model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the per-request HTTP timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Chat-completions request body.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// A single role/content message.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Create a user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat-completions response envelope.
///
/// Only `choices[0].message.content` is consumed; everything else the
/// endpoint sends is ignored.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatReplyMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatReplyMessage {
    pub content: Option<String>,
}

/// Parsed model reply: optional reasoning segment plus optional structured
/// payload.
///
/// Absent fields serialize as explicit `null` so API consumers always see
/// both keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedReply {
    /// Text between `<think>` and `</think>`, trimmed.
    pub think: Option<String>,
    /// JSON object from the ```json fenced block.
    pub data: Option<serde_json::Map<String, serde_json::Value>>,
}
