//! Lexicon-based sentiment and emotion tagging

use crate::model::{EmotionTag, Sentiment};

use super::lexicon::{EMOTION_LEXICONS, NEGATIVE_WORDS, POSITIVE_WORDS};

/// Compare distinct negative and positive phrase hits; ties are neutral
pub fn analyze_sentiment(message: &str) -> Sentiment {
    let lowered = message.to_lowercase();
    let negative_count = NEGATIVE_WORDS.count_present(&lowered);
    let positive_count = POSITIVE_WORDS.count_present(&lowered);

    if negative_count > positive_count {
        Sentiment::Negative
    } else if positive_count > negative_count {
        Sentiment::Positive
    } else {
        Sentiment::Neutral
    }
}

/// Tag every matching emotion category, or `[Neutral]` when none match
pub fn detect_emotions(message: &str) -> Vec<EmotionTag> {
    let lowered = message.to_lowercase();
    let emotions: Vec<EmotionTag> = EMOTION_LEXICONS
        .iter()
        .filter(|(_, lexicon)| lexicon.contains_any(&lowered))
        .map(|(tag, _)| *tag)
        .collect();

    if emotions.is_empty() {
        vec![EmotionTag::Neutral]
    } else {
        emotions
    }
}

/// Sentiment and emotions in one call
pub fn analyze(message: &str) -> (Sentiment, Vec<EmotionTag>) {
    (analyze_sentiment(message), detect_emotions(message))
}
