// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregate counts and summary statistics over the feedback collection.
//!
//! Everything is recomputed from the records passed in; nothing is cached.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::feedback::{
    Category, FeedbackRecord, Sentiment, Status, Team, Topic, Urgency, UserType,
};

/// Sentiment ordinal reported for an empty collection.
const NEUTRAL_SENTIMENT_SCORE: f64 = 3.0;

fn count_by<K: Ord>(records: &[FeedbackRecord], key: impl Fn(&FeedbackRecord) -> K) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(key(record)).or_insert(0) += 1;
    }
    counts
}

fn mean(sum: f64, count: usize) -> Option<f64> {
    (count > 0).then(|| sum / count as f64)
}

/// Dashboard summary of a feedback collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total: usize,
    pub by_category: BTreeMap<Category, usize>,
    pub by_urgency: BTreeMap<Urgency, usize>,
    pub by_status: BTreeMap<Status, usize>,
    pub by_team: BTreeMap<Team, usize>,
    pub by_sentiment: BTreeMap<Sentiment, usize>,
    pub by_user_type: BTreeMap<UserType, usize>,
    pub by_topic: BTreeMap<Topic, usize>,
    pub critical_count: usize,
    pub resolved_count: usize,
    /// Mean days from creation to last update over resolved records; 0 if none.
    pub avg_resolution_days: f64,
    /// Mean sentiment ordinal (1-5); 3 for an empty collection.
    pub avg_sentiment_score: f64,
    pub total_votes: u64,
    pub total_views: u64,
    /// Mean impact score; 0 for an empty collection.
    pub avg_impact_score: f64,
}

impl Analytics {
    pub fn compute(records: &[FeedbackRecord]) -> Self {
        let total = records.len();

        let resolved: Vec<&FeedbackRecord> = records
            .iter()
            .filter(|r| r.status == Status::Resolved)
            .collect();
        let resolution_days: f64 = resolved.iter().map(|r| r.elapsed_days()).sum();

        let sentiment_sum: f64 = records.iter().map(|r| f64::from(r.sentiment.ordinal())).sum();
        let impact_sum: f64 = records.iter().map(|r| f64::from(r.impact_score)).sum();

        Analytics {
            total,
            by_category: count_by(records, |r| r.category),
            by_urgency: count_by(records, |r| r.urgency),
            by_status: count_by(records, |r| r.status),
            by_team: count_by(records, |r| r.assigned_team),
            by_sentiment: count_by(records, |r| r.sentiment),
            by_user_type: count_by(records, |r| r.user_type),
            by_topic: count_by(records, |r| r.topic),
            critical_count: records
                .iter()
                .filter(|r| r.urgency == Urgency::Critical)
                .count(),
            resolved_count: resolved.len(),
            avg_resolution_days: mean(resolution_days, resolved.len()).unwrap_or(0.0),
            avg_sentiment_score: mean(sentiment_sum, total).unwrap_or(NEUTRAL_SENTIMENT_SCORE),
            total_votes: records.iter().map(|r| u64::from(r.votes)).sum(),
            total_views: records.iter().map(|r| u64::from(r.views)).sum(),
            avg_impact_score: mean(impact_sum, total).unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
#[path = "analytics_tests.rs"]
mod tests;
