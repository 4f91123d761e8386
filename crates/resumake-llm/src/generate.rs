//! End-to-end generation pipeline: template → completion → parse.

use crate::client::CompletionClient;
use crate::error::Result;
use crate::parse::{FenceStrategy, parse_reply_with};
use crate::prompt::{PromptStore, RESUME_PROMPT_NAME};
use crate::template::render;
use crate::types::ParsedReply;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Orchestrates one resume generation: renders the prompt template with the
/// user description, calls the completion client, parses the reply.
///
/// Stateless per call; a single instance serves concurrent requests.
pub struct ResumeGenerator {
    client: Arc<dyn CompletionClient>,
    prompts: PromptStore,
    fence_strategy: FenceStrategy,
}

impl ResumeGenerator {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client,
            prompts: PromptStore::new(),
            fence_strategy: FenceStrategy::default(),
        }
    }

    /// Use a custom prompt store (e.g. with an override directory).
    pub fn with_prompts(mut self, prompts: PromptStore) -> Self {
        self.prompts = prompts;
        self
    }

    /// Use a non-default closing-fence strategy.
    pub fn with_fence_strategy(mut self, strategy: FenceStrategy) -> Self {
        self.fence_strategy = strategy;
        self
    }

    /// Generate structured resume data from a free-text description.
    ///
    /// Completion failures propagate; parse degradation does not (worst
    /// case both fields of the reply are null).
    pub async fn generate(&self, description: &str) -> Result<ParsedReply> {
        let template = self.prompts.get(RESUME_PROMPT_NAME)?;
        let prompt = render(
            &template,
            &HashMap::from([("userDescription", description)]),
        );
        info!(description_len = description.len(), "starting resume generation");

        let raw = self.client.complete(&prompt).await?;
        let reply = parse_reply_with(&raw, self.fence_strategy);
        info!(
            has_think = reply.think.is_some(),
            has_data = reply.data.is_some(),
            "resume generation completed"
        );
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records the prompt it was given and replies with canned text.
    struct CannedClient {
        reply: &'static str,
        seen_prompt: Mutex<Option<String>>,
    }

    impl CannedClient {
        fn new(reply: &'static str) -> Self {
            Self {
                reply,
                seen_prompt: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl CompletionClient for CannedClient {
        async fn complete(&self, prompt: &str) -> Result<String> {
            *self.seen_prompt.lock().unwrap() = Some(prompt.to_string());
            Ok(self.reply.to_string())
        }
    }

    struct FailingClient;

    #[async_trait]
    impl CompletionClient for FailingClient {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            Err(Error::Api {
                status: 500,
                body: "upstream broke".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_pipeline_substitutes_description_and_parses_reply() {
        let client = Arc::new(CannedClient::new(
            "<think>drafting</think>```json\n{\"summary\":\"Rust dev\"}\n```",
        ));
        let generator = ResumeGenerator::new(client.clone());

        let reply = generator.generate("a rust developer").await.unwrap();
        assert_eq!(reply.think.as_deref(), Some("drafting"));
        assert_eq!(
            reply.data.unwrap().get("summary"),
            Some(&serde_json::json!("Rust dev"))
        );

        let prompt = client.seen_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("a rust developer"));
        assert!(!prompt.contains("{{userDescription}}"));
    }

    #[tokio::test]
    async fn test_completion_failure_propagates() {
        let generator = ResumeGenerator::new(Arc::new(FailingClient));
        let err = generator.generate("anything").await.unwrap_err();
        assert!(matches!(err, Error::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_unparseable_reply_is_still_a_success() {
        let generator =
            ResumeGenerator::new(Arc::new(CannedClient::new("no structure at all")));
        let reply = generator.generate("anything").await.unwrap();
        assert_eq!(reply, ParsedReply::default());
    }
}
