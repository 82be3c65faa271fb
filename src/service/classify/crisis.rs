//! Crisis screening with ordered pattern rules
//!
//! Rules are evaluated in declaration order and the first match decides the
//! verdict. A later, more severe rule never overrides an earlier match.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{CrisisSeverity, CrisisVerdict};

/// A pattern and the severity it implies
#[derive(Debug, Clone)]
pub struct CrisisRule {
    pattern: Regex,
    severity: CrisisSeverity,
}

impl CrisisRule {
    pub fn new(pattern: Regex, severity: CrisisSeverity) -> Self {
        Self { pattern, severity }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.pattern.is_match(lowered)
    }
}

/// Built-in rule table, order is significant
const DEFAULT_PATTERNS: &[(&str, CrisisSeverity)] = &[
    (
        r"self.?harm|suicide|kill myself|end it all",
        CrisisSeverity::High,
    ),
    (
        r"want to die|no point living|better off dead",
        CrisisSeverity::High,
    ),
    (r"cutting|hurting myself", CrisisSeverity::High),
    (
        r"hopeless|nothing matters|give up",
        CrisisSeverity::Medium,
    ),
    (
        r"can't go on|can't handle this anymore",
        CrisisSeverity::Medium,
    ),
];

static DEFAULT_RULES: LazyLock<Vec<CrisisRule>> = LazyLock::new(|| {
    DEFAULT_PATTERNS
        .iter()
        .map(|(pattern, severity)| {
            CrisisRule::new(
                Regex::new(pattern).expect("built-in crisis pattern must compile"),
                *severity,
            )
        })
        .collect()
});

/// First-match-wins classifier over an ordered rule list
#[derive(Debug, Clone, Copy)]
pub struct CrisisClassifier<'a> {
    rules: &'a [CrisisRule],
}

impl Default for CrisisClassifier<'static> {
    fn default() -> Self {
        Self::with_rules(DEFAULT_RULES.as_slice())
    }
}

impl<'a> CrisisClassifier<'a> {
    pub fn with_rules(rules: &'a [CrisisRule]) -> Self {
        Self { rules }
    }

    /// Classify a message. Matching is case-insensitive.
    pub fn classify(&self, message: &str) -> CrisisVerdict {
        let lowered = message.to_lowercase();

        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| CrisisVerdict::from_severity(rule.severity))
            .unwrap_or_else(CrisisVerdict::none)
    }
}

/// Classify with the built-in rules
pub fn classify_crisis(message: &str) -> CrisisVerdict {
    CrisisClassifier::default().classify(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::classification::CrisisAction;

    #[test]
    fn test_high_severity_patterns() {
        for message in [
            "I want to kill myself",
            "thinking about self-harm again",
            "I've been thinking about suicide",
            "I just want to end it all",
            "Sometimes I want to die",
            "there's no point living like this",
            "everyone would be better off dead without me",
            "I started cutting again",
            "I keep hurting myself",
        ] {
            let verdict = classify_crisis(message);
            assert!(verdict.is_crisis(), "{message}");
            assert_eq!(verdict.severity(), CrisisSeverity::High, "{message}");
            assert_eq!(verdict.action(), CrisisAction::ImmediateIntervention);
        }
    }

    #[test]
    fn test_medium_severity_patterns() {
        for message in [
            "I feel hopeless",
            "Nothing matters anymore",
            "I just want to give up on this class",
            "I can't go on like this",
            "I can't handle this anymore",
        ] {
            let verdict = classify_crisis(message);
            assert!(verdict.is_crisis(), "{message}");
            assert_eq!(verdict.severity(), CrisisSeverity::Medium, "{message}");
            assert_eq!(verdict.action(), CrisisAction::ResourceReferral);
        }
    }

    #[test]
    fn test_no_signal() {
        for message in ["I had a great day", ""] {
            let verdict = classify_crisis(message);
            assert!(!verdict.is_crisis());
            assert_eq!(verdict.severity(), CrisisSeverity::Low);
            assert_eq!(verdict.action(), CrisisAction::None);
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            classify_crisis("I FEEL HOPELESS").severity(),
            CrisisSeverity::Medium
        );
    }

    #[test]
    fn test_rule_order_not_text_order_decides() {
        // medium phrase appears first in the text, high rule is earlier in the table
        let verdict = classify_crisis("I feel hopeless and I keep hurting myself");
        assert_eq!(verdict.severity(), CrisisSeverity::High);
    }

    #[test]
    fn test_first_match_wins_over_max_severity() {
        let rules = vec![
            CrisisRule::new(Regex::new("hopeless").unwrap(), CrisisSeverity::Medium),
            CrisisRule::new(Regex::new("kill myself").unwrap(), CrisisSeverity::High),
        ];
        let classifier = CrisisClassifier::with_rules(&rules);

        let verdict = classifier.classify("I feel hopeless, I want to kill myself");
        assert_eq!(verdict.severity(), CrisisSeverity::Medium);
        assert_eq!(verdict.action(), CrisisAction::ResourceReferral);
    }

    #[test]
    fn test_deterministic() {
        let message = "I can't handle this anymore";
        assert_eq!(classify_crisis(message), classify_crisis(message));
    }
}
