use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::classification::ClassificationResult;

const KEY_FIRST_NAME: &str = "first_name";
const KEY_FIELD_OF_STUDY: &str = "field_of_study";

/// Caller-supplied profile data (display name, field of study, preferences, ...)
///
/// Read-only. Only `first_name` and `field_of_study` are consulted, and both
/// fall back to a presentational default when missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct UserContext(pub Map<String, Value>);

impl UserContext {
    pub fn display_name(&self) -> String {
        self.text_or(KEY_FIRST_NAME, "there")
    }

    pub fn field_of_study(&self) -> String {
        self.text_or(KEY_FIELD_OF_STUDY, "student")
    }

    fn text_or(&self, key: &str, default: &str) -> String {
        match self.0.get(key) {
            None | Some(Value::Null) => default.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// One prior turn, passed through untouched
pub type ConversationTurn = Map<String, Value>;

/// A single chat request as seen by the chat service
#[derive(Debug, Clone)]
pub struct ChatExchange {
    pub message: String,
    pub user_context: UserContext,
    /// Accepted for forward compatibility; not folded into the prompt
    pub history: Vec<ConversationTurn>,
}

/// Result of one chat exchange
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    pub response_text: String,
    pub classification: ClassificationResult,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
    pub user_context: UserContext,
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub conversation_history: Vec<ConversationTurn>,
}

impl From<ChatRequest> for ChatExchange {
    fn from(req: ChatRequest) -> Self {
        Self {
            message: req.message,
            user_context: req.user_context,
            history: req.conversation_history,
        }
    }
}

/// Structured crisis contacts, returned alongside the reply when a crisis is detected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CrisisResources {
    pub crisis_text_line: String,
    pub suicide_prevention: String,
    pub message: String,
}

impl CrisisResources {
    pub fn standard() -> Self {
        Self {
            crisis_text_line: "Text HOME to 741741".to_string(),
            suicide_prevention: "988".to_string(),
            message: "Your safety is important. Please reach out to someone you trust or a professional."
                .to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
    pub sentiment: String,
    pub emotions: Vec<String>,
    pub crisis_detected: bool,
    pub crisis_severity: String,
    pub resources: Option<CrisisResources>,
}

impl From<ChatOutcome> for ChatResponse {
    fn from(outcome: ChatOutcome) -> Self {
        let crisis = outcome.classification.crisis;
        Self {
            sentiment: outcome.classification.sentiment.to_string(),
            emotions: outcome.classification.emotion_labels(),
            crisis_detected: crisis.is_crisis(),
            crisis_severity: crisis.severity().to_string(),
            resources: crisis.is_crisis().then(CrisisResources::standard),
            response: outcome.response_text,
        }
    }
}
