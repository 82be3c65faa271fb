//! Keyword vocabularies and the substring scan over them
//!
//! Matching is plain substring containment on already-lowercased text, so a
//! phrase embedded in a longer word still counts ("low" in "slow").

use crate::model::EmotionTag;

/// A list of trigger phrases
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    pub phrases: &'static [&'static str],
}

impl Lexicon {
    pub const fn new(phrases: &'static [&'static str]) -> Self {
        Self { phrases }
    }

    /// Whether any phrase occurs in `lowered`
    pub fn contains_any(&self, lowered: &str) -> bool {
        self.phrases.iter().any(|phrase| lowered.contains(phrase))
    }

    /// Number of distinct phrases that occur in `lowered`
    pub fn count_present(&self, lowered: &str) -> usize {
        self.phrases
            .iter()
            .filter(|phrase| lowered.contains(*phrase))
            .count()
    }
}

pub const NEGATIVE_WORDS: Lexicon = Lexicon::new(&[
    "stress",
    "stressed",
    "overwhelmed",
    "anxious",
    "worried",
    "sad",
    "depressed",
    "burnout",
]);

pub const POSITIVE_WORDS: Lexicon =
    Lexicon::new(&["good", "great", "happy", "excited", "confident", "ready"]);

/// Emotion categories in output order
pub const EMOTION_LEXICONS: &[(EmotionTag, Lexicon)] = &[
    (
        EmotionTag::Stress,
        Lexicon::new(&["stress", "stressed", "stressing"]),
    ),
    (
        EmotionTag::Anxiety,
        Lexicon::new(&["anxious", "anxiety", "worried", "worry"]),
    ),
    (
        EmotionTag::Burnout,
        Lexicon::new(&["burnout", "burned out", "exhausted"]),
    ),
    (
        EmotionTag::Overwhelm,
        Lexicon::new(&["overwhelmed", "too much", "can't handle"]),
    ),
    (
        EmotionTag::Sadness,
        Lexicon::new(&["sad", "depressed", "down", "low"]),
    ),
    (
        EmotionTag::Frustration,
        Lexicon::new(&["frustrated", "frustrating", "annoyed"]),
    ),
];
