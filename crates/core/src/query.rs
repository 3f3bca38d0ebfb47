// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filtered, priority-sorted views over the feedback collection.

use serde::Serialize;

use crate::feedback::{Category, FeedbackRecord, Sentiment, Status, Team, Urgency, UserType};

/// Which records to keep. `None` on a field matches any value.
///
/// All set fields must match (logical AND).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeedbackFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
    /// Case-insensitive substring over title, description and tags.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
    /// `Some(true)` keeps records with attachments, `Some(false)` those without.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_attachments: Option<bool>,
}

fn field_matches<T: PartialEq>(wanted: Option<T>, actual: T) -> bool {
    wanted.is_none_or(|w| w == actual)
}

impl FeedbackFilter {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == FeedbackFilter::default()
    }

    pub fn matches(&self, record: &FeedbackRecord) -> bool {
        field_matches(self.category, record.category)
            && field_matches(self.urgency, record.urgency)
            && field_matches(self.status, record.status)
            && field_matches(self.team, record.assigned_team)
            && field_matches(self.sentiment, record.sentiment)
            && field_matches(self.user_type, record.user_type)
            && field_matches(self.has_attachments, record.has_attachments())
            && self.matches_search(record)
    }

    fn matches_search(&self, record: &FeedbackRecord) -> bool {
        let needle = self.search.trim().to_lowercase();
        needle.is_empty() || record.search_text().to_lowercase().contains(&needle)
    }

    /// Matching records, highest priority first.
    ///
    /// The sort is stable: records of equal priority keep their input order.
    pub fn apply<'a>(&self, records: &'a [FeedbackRecord]) -> Vec<&'a FeedbackRecord> {
        let mut matched: Vec<&FeedbackRecord> =
            records.iter().filter(|r| self.matches(r)).collect();
        matched.sort_by(|a, b| b.priority.cmp(&a.priority));
        matched
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
