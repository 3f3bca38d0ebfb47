// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Priority scoring.
//!
//! Two independent schemes exist side by side:
//! - [`score_for`] maps urgency to the 1-4 priority used for sorting.
//! - [`priority_score`] is the 0-10 display metric built from keyword
//!   weights, a category weight and an urgency weight.

use crate::feedback::{Category, Urgency};

/// Keyword weights for [`priority_score`].
pub const KEYWORD_WEIGHTS: &[(&str, f64)] = &[
    ("outage", 3.0),
    ("crash", 3.0),
    ("error", 2.0),
    ("broken", 2.0),
    ("slow", 1.5),
    ("performance", 1.5),
    ("billing", 2.0),
    ("payment", 2.0),
    ("security", 3.0),
    ("accessibility", 2.0),
    ("confusing", 1.5),
    ("bug", 2.0),
    ("feature", 1.0),
];

/// Category weights by label. Labels absent from the table weigh 1.
pub const CATEGORY_WEIGHTS: &[(&str, f64)] = &[
    ("Bug", 2.0),
    ("Performance", 1.5),
    ("Billing", 2.0),
    ("UI/UX", 1.0),
    ("Feature", 1.0),
    ("Other", 0.5),
];

/// Urgency weights by lower-case label. Labels absent from the table weigh 1.
pub const URGENCY_WEIGHTS: &[(&str, f64)] = &[("low", 1.0), ("medium", 1.5), ("high", 2.0)];

/// Upper bound of [`priority_score`].
pub const MAX_PRIORITY_SCORE: f64 = 10.0;

/// Sort priority for an urgency: Critical 4, High 3, Medium 2, Low 1.
pub fn score_for(urgency: Urgency) -> u8 {
    match urgency {
        Urgency::Critical => 4,
        Urgency::High => 3,
        Urgency::Medium => 2,
        Urgency::Low => 1,
    }
}

fn lookup(table: &[(&str, f64)], key: &str) -> f64 {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, w)| *w)
        .unwrap_or(1.0)
}

pub fn category_weight(category: Category) -> f64 {
    lookup(CATEGORY_WEIGHTS, category.as_str())
}

pub fn urgency_weight(urgency: Urgency) -> f64 {
    lookup(URGENCY_WEIGHTS, &urgency.as_str().to_lowercase())
}

/// Sum of weights of every keyword contained in `title + " " + description`.
pub fn keyword_weight(title: &str, description: &str) -> f64 {
    let text = format!("{title} {description}").to_lowercase();
    KEYWORD_WEIGHTS
        .iter()
        .filter(|(keyword, _)| text.contains(keyword))
        .map(|(_, weight)| weight)
        .sum()
}

/// 0-10 display score: `min(10, keywords * category * urgency / 2)`.
pub fn priority_score(title: &str, description: &str, category: Category, urgency: Urgency) -> f64 {
    let raw = keyword_weight(title, description) * category_weight(category) * urgency_weight(urgency)
        / 2.0;
    raw.min(MAX_PRIORITY_SCORE)
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod tests;
