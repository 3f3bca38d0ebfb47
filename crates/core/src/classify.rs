// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Keyword classifiers for urgency, sentiment and topic.
//!
//! Each classifier is an ordered table of [`KeywordRule`]s. The text is
//! lower-cased once, rules are tried in declaration order, and the first rule
//! with any keyword contained in the text decides the label. Keyword position
//! in the text never matters, only rule order.

use serde::Serialize;

use crate::feedback::{Sentiment, Topic, Urgency};
use crate::score::score_for;

/// A label paired with the substrings that select it.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<L> {
    pub label: L,
    pub keywords: &'static [&'static str],
}

impl<L: Copy> KeywordRule<L> {
    /// True if any keyword is a substring of already lower-cased `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|keyword| text.contains(keyword))
    }
}

/// Returns the label of the first matching rule, or `default`.
pub fn first_match<L: Copy>(rules: &[KeywordRule<L>], text: &str, default: L) -> L {
    let text = text.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&text))
        .map(|rule| rule.label)
        .unwrap_or(default)
}

/// Urgency tiers, most severe first. Anything else is `Low`.
pub const URGENCY_RULES: &[KeywordRule<Urgency>] = &[
    KeywordRule {
        label: Urgency::Critical,
        keywords: &[
            "critical",
            "security",
            "breach",
            "data loss",
            "outage",
            "down",
            "emergency",
        ],
    },
    KeywordRule {
        label: Urgency::High,
        keywords: &[
            "crash",
            "urgent",
            "error",
            "immediately",
            "blocking",
            "broken",
            "fail",
            "cannot",
        ],
    },
    KeywordRule {
        label: Urgency::Medium,
        keywords: &[
            "slow",
            "improvement",
            "better",
            "enhance",
            "optimize",
            "performance",
            "issue",
        ],
    },
];

// Very negative is checked before negative; "hate" is in both.
pub const SENTIMENT_RULES: &[KeywordRule<Sentiment>] = &[
    KeywordRule {
        label: Sentiment::VeryPositive,
        keywords: &["love", "amazing", "excellent", "fantastic", "perfect", "brilliant"],
    },
    KeywordRule {
        label: Sentiment::Positive,
        keywords: &["good", "great", "nice", "helpful", "useful", "satisfied"],
    },
    KeywordRule {
        label: Sentiment::VeryNegative,
        keywords: &["worst", "useless", "broken", "hate", "frustrated", "angry"],
    },
    KeywordRule {
        label: Sentiment::Negative,
        keywords: &["bad", "terrible", "awful", "horrible", "hate", "disappointed"],
    },
];

pub const TOPIC_RULES: &[KeywordRule<Topic>] = &[
    KeywordRule {
        label: Topic::Authentication,
        keywords: &["login", "password", "auth", "signin", "signout"],
    },
    KeywordRule {
        label: Topic::Performance,
        keywords: &["slow", "fast", "speed", "loading", "response"],
    },
    KeywordRule {
        label: Topic::UiUx,
        keywords: &["interface", "design", "layout", "button", "menu", "navigation"],
    },
    KeywordRule {
        label: Topic::Mobile,
        keywords: &["mobile", "phone", "tablet", "responsive", "app"],
    },
    KeywordRule {
        label: Topic::Integration,
        keywords: &["api", "webhook", "connect", "sync", "import", "export"],
    },
    KeywordRule {
        label: Topic::Security,
        keywords: &["security", "privacy", "encryption", "permission", "access"],
    },
];

pub fn detect_urgency(text: &str) -> Urgency {
    first_match(URGENCY_RULES, text, Urgency::Low)
}

pub fn detect_sentiment(text: &str) -> Sentiment {
    first_match(SENTIMENT_RULES, text, Sentiment::Neutral)
}

pub fn detect_topic(text: &str) -> Topic {
    first_match(TOPIC_RULES, text, Topic::General)
}

/// All labels derived from a description in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub urgency: Urgency,
    pub sentiment: Sentiment,
    pub topic: Topic,
    pub priority: u8,
}

impl Classification {
    /// Classifies a description. Blank text gets the lowest-severity labels.
    pub fn of(description: &str) -> Self {
        if description.trim().is_empty() {
            return Classification {
                urgency: Urgency::Low,
                sentiment: Sentiment::Neutral,
                topic: Topic::General,
                priority: score_for(Urgency::Low),
            };
        }
        let urgency = detect_urgency(description);
        Classification {
            urgency,
            sentiment: detect_sentiment(description),
            topic: detect_topic(description),
            priority: score_for(urgency),
        }
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
