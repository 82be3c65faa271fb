use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emotion categories, declared in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EmotionTag {
    Stress,
    Anxiety,
    Burnout,
    Overwhelm,
    Sadness,
    Frustration,
    Neutral,
}

impl EmotionTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionTag::Stress => "stress",
            EmotionTag::Anxiety => "anxiety",
            EmotionTag::Burnout => "burnout",
            EmotionTag::Overwhelm => "overwhelm",
            EmotionTag::Sadness => "sadness",
            EmotionTag::Frustration => "frustration",
            EmotionTag::Neutral => "neutral",
        }
    }
}

impl fmt::Display for EmotionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CrisisSeverity {
    Low,
    Medium,
    High,
}

impl CrisisSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrisisSeverity::Low => "low",
            CrisisSeverity::Medium => "medium",
            CrisisSeverity::High => "high",
        }
    }
}

impl fmt::Display for CrisisSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CrisisAction {
    None,
    ResourceReferral,
    ImmediateIntervention,
}

/// Outcome of crisis screening for a single message.
///
/// Only constructible through [`CrisisVerdict::none`] and
/// [`CrisisVerdict::from_severity`], which keeps severity and action aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct CrisisVerdict {
    is_crisis: bool,
    severity: CrisisSeverity,
    action: CrisisAction,
}

impl CrisisVerdict {
    /// No crisis signal.
    pub const fn none() -> Self {
        Self {
            is_crisis: false,
            severity: CrisisSeverity::Low,
            action: CrisisAction::None,
        }
    }

    /// Verdict for a matched rule. `Low` means no crisis.
    pub const fn from_severity(severity: CrisisSeverity) -> Self {
        match severity {
            CrisisSeverity::High => Self {
                is_crisis: true,
                severity,
                action: CrisisAction::ImmediateIntervention,
            },
            CrisisSeverity::Medium => Self {
                is_crisis: true,
                severity,
                action: CrisisAction::ResourceReferral,
            },
            CrisisSeverity::Low => Self::none(),
        }
    }

    pub fn is_crisis(&self) -> bool {
        self.is_crisis
    }

    pub fn severity(&self) -> CrisisSeverity {
        self.severity
    }

    pub fn action(&self) -> CrisisAction {
        self.action
    }
}

impl Default for CrisisVerdict {
    fn default() -> Self {
        Self::none()
    }
}

/// Everything the classifiers say about one message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ClassificationResult {
    pub sentiment: Sentiment,
    /// Never empty; `[Neutral]` when nothing matched
    pub emotions: Vec<EmotionTag>,
    pub crisis: CrisisVerdict,
}

impl ClassificationResult {
    pub fn emotion_labels(&self) -> Vec<String> {
        self.emotions.iter().map(|e| e.as_str().to_string()).collect()
    }
}
