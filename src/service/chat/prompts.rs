//! Prompts for supportive chat replies

use crate::model::{ClassificationResult, UserContext};

/// Persona constraints, always present
pub const BASE_SYSTEM_PROMPT: &str = r#"You are ZENI, an empathetic AI student companion. Your role is to:
- Provide emotional support and validation
- Help students feel understood, not judged
- Offer practical help when appropriate
- Act like a caring friend, NOT a therapist
- Use warm, conversational language (not robotic)
- Keep responses under 150 words
- Acknowledge and validate their feelings
- Don't dismiss or minimize their feelings
- Don't give clinical advice"#;

/// Appended to the base prompt when a crisis is detected
pub const CRISIS_DIRECTIVE: &str =
    "IMPORTANT: Crisis detected. Provide immediate support and resources.";

/// Closing instruction for the user turn
const RESPONSE_INSTRUCTION: &str = "Generate your empathetic response:";

/// System and user prompt for one chat turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub system_prompt: String,
    pub user_prompt: String,
}

/// Build the system prompt; the crisis directive is an extra paragraph, never a replacement
pub fn build_system_prompt(classification: &ClassificationResult) -> String {
    if classification.crisis.is_crisis() {
        format!("{BASE_SYSTEM_PROMPT}\n\n{CRISIS_DIRECTIVE}")
    } else {
        BASE_SYSTEM_PROMPT.to_string()
    }
}

/// Build the context block describing the user and what was detected
pub fn build_context(
    message: &str,
    user_context: &UserContext,
    classification: &ClassificationResult,
) -> String {
    format!(
        r#"User Context:
- Name: {}
- Field of Study: {}

User Message: "{}"

Detected Emotions: {}
Sentiment: {}"#,
        user_context.display_name(),
        user_context.field_of_study(),
        message,
        classification.emotion_labels().join(", "),
        classification.sentiment,
    )
}

pub fn compose(
    message: &str,
    user_context: &UserContext,
    classification: &ClassificationResult,
) -> ComposedPrompt {
    let context = build_context(message, user_context, classification);

    ComposedPrompt {
        system_prompt: build_system_prompt(classification),
        user_prompt: format!("{context}\n\n{RESPONSE_INSTRUCTION}"),
    }
}
