//! Shared LLM client and the text generation seam
//!
//! Services talk to the model only through [`TextGenerator`], so the OpenAI
//! client can be swapped for a scripted generator in tests.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::openai;

/// Error from the external text generation engine
///
/// Transport, auth and rate-limit failures are not distinguished.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
}

/// Per-call generation settings
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub model: String,
    pub temperature: f64,
    /// `None` leaves the provider default in place
    pub max_tokens: Option<u64>,
}

/// Capability to turn a system prompt plus user content into text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GenerationError>;
}

/// Shared LLM client wrapper
#[derive(Clone)]
pub struct LlmClient {
    client: openai::Client,
}

impl LlmClient {
    /// Create a new LLM client with the provided API key
    pub fn new(api_key: &str) -> Self {
        Self {
            client: openai::Client::new(api_key),
        }
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GenerationError> {
        let mut builder = self
            .client
            .agent(&params.model)
            .preamble(system_prompt)
            .temperature(params.temperature);
        if let Some(max_tokens) = params.max_tokens {
            builder = builder.max_tokens(max_tokens);
        }
        let agent = builder.build();

        agent
            .prompt(user_prompt)
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))
    }
}
