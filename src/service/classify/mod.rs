//! Message classification: crisis screening, sentiment and emotions
//!
//! All functions here are pure and total. They never fail and return their
//! "no signal" defaults for empty input.

pub mod crisis;
pub mod lexicon;
pub mod sentiment;

use crate::model::ClassificationResult;

use crisis::classify_crisis;
use sentiment::analyze;

/// Run every classifier over a message
pub fn classify(message: &str) -> ClassificationResult {
    let crisis = classify_crisis(message);
    let (sentiment, emotions) = analyze(message);

    ClassificationResult {
        sentiment,
        emotions,
        crisis,
    }
}
