//! Supportive chat replies with a safety overlay
//!
//! Classification runs before generation and is returned unchanged whatever
//! happens to the model call. Engine failures degrade to a fixed reply.

use std::sync::Arc;

use crate::model::{ChatExchange, ChatOutcome, ClassificationResult};
use crate::service::classify::classify;
use crate::service::llm::{GenerationError, GenerationParams, TextGenerator};

pub mod prompts;

use prompts::compose;

/// Sampling temperature for chat replies
const CHAT_TEMPERATURE: f64 = 0.7;

/// Token ceiling for chat replies
const CHAT_MAX_TOKENS: u64 = 200;

/// Reply used when the engine is unavailable
pub const FALLBACK_RESPONSE: &str =
    "I'm here to help! Can you tell me more about what's on your mind?";

/// Appended to every generated reply when a crisis is detected
pub const CRISIS_RESOURCES_BLOCK: &str = "\n\nI'm concerned about you. Your safety is important. Here are resources:\n- Crisis Text Line: Text HOME to 741741\n- National Suicide Prevention Lifeline: 988";

/// Service producing chat replies
pub struct ChatService {
    generator: Arc<dyn TextGenerator>,
    model: String,
}

impl ChatService {
    pub fn new(generator: Arc<dyn TextGenerator>, model: String) -> Self {
        tracing::info!(model = %model, "Chat service initialized");
        Self { generator, model }
    }

    /// Classify, compose, generate and apply the safety overlay. Never fails.
    pub async fn respond(&self, exchange: &ChatExchange) -> ChatOutcome {
        let classification = classify(&exchange.message);

        tracing::debug!(
            sentiment = %classification.sentiment,
            emotions = ?classification.emotions,
            crisis_severity = %classification.crisis.severity(),
            history_turns = exchange.history.len(),
            "Classified chat message"
        );

        if classification.crisis.is_crisis() {
            tracing::warn!(
                severity = %classification.crisis.severity(),
                action = ?classification.crisis.action(),
                "Crisis signal detected in chat message"
            );
        }

        let generated = self.generate_reply(exchange, &classification).await;
        let response_text = finalize_reply(generated, &classification);

        ChatOutcome {
            response_text,
            classification,
        }
    }

    async fn generate_reply(
        &self,
        exchange: &ChatExchange,
        classification: &ClassificationResult,
    ) -> Result<String, GenerationError> {
        let prompt = compose(&exchange.message, &exchange.user_context, classification);
        let params = GenerationParams {
            model: self.model.clone(),
            temperature: CHAT_TEMPERATURE,
            max_tokens: Some(CHAT_MAX_TOKENS),
        };
        let prompt_length = prompt.system_prompt.len() + prompt.user_prompt.len();
        let start_time = std::time::Instant::now();

        let result = self
            .generator
            .generate(&prompt.system_prompt, &prompt.user_prompt, &params)
            .await;

        let elapsed = start_time.elapsed();
        match &result {
            Ok(text) => tracing::info!(
                model = %self.model,
                elapsed_ms = elapsed.as_millis(),
                prompt_length = prompt_length,
                response_length = text.len(),
                "Chat reply generated"
            ),
            Err(e) => tracing::warn!(
                model = %self.model,
                elapsed_ms = elapsed.as_millis(),
                prompt_length = prompt_length,
                error = %e,
                "Chat reply generation failed, using fallback"
            ),
        }

        result
    }
}

/// Turn the engine outcome into the final reply text
fn finalize_reply(
    generated: Result<String, GenerationError>,
    classification: &ClassificationResult,
) -> String {
    match generated {
        Ok(mut text) => {
            if classification.crisis.is_crisis() {
                text.push_str(CRISIS_RESOURCES_BLOCK);
            }
            text
        }
        Err(_) => FALLBACK_RESPONSE.to_string(),
    }
}
