// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core feedback types.
//!
//! This module contains the fixed enumerations (category, urgency, status,
//! team, user type, sentiment, topic) and the [`FeedbackRecord`] entity.
//! Every enumeration stores and displays as its human label ("In Progress",
//! "UX/UI") and parses leniently from CLI spellings (`in_progress`, `ux/ui`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::score::{priority_score, score_for};

/// Fold a label or CLI spelling to a comparison key.
///
/// `"In Progress"`, `"in_progress"` and `"in-progress"` all fold to `"in progress"`.
pub(crate) fn fold_label(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '_' | '-' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $err:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the label used in storage and display.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                let key = fold_label(s);
                $name::ALL
                    .iter()
                    .copied()
                    .find(|value| fold_label(value.as_str()) == key)
                    .ok_or_else(|| Error::$err(s.to_string()))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

labeled_enum! {
    /// What kind of feedback this is. Chosen by the submitter.
    Category, InvalidCategory {
        Bug => "Bug",
        Feature => "Feature",
        Improvement => "Improvement",
        Security => "Security",
        Performance => "Performance",
        UxUi => "UX/UI",
        Integration => "Integration",
        Documentation => "Documentation",
    }
}

labeled_enum! {
    /// Severity of a piece of feedback. Ordered `Low < Medium < High < Critical`.
    Urgency, InvalidUrgency {
        Low => "Low",
        Medium => "Medium",
        High => "High",
        Critical => "Critical",
    }
}

labeled_enum! {
    /// Workflow state of a feedback record.
    Status, InvalidStatus {
        /// Initial state for new submissions.
        Open => "Open",
        InProgress => "In Progress",
        Resolved => "Resolved",
        Closed => "Closed",
    }
}

labeled_enum! {
    /// Team responsible for acting on feedback.
    Team, InvalidTeam {
        Engineering => "Engineering",
        Product => "Product",
        Design => "Design",
        Support => "Support",
        Marketing => "Marketing",
        Sales => "Sales",
        Unassigned => "Unassigned",
    }
}

labeled_enum! {
    /// Kind of user that submitted the feedback.
    UserType, InvalidUserType {
        Guest => "Guest",
        Customer => "Customer",
        PowerUser => "Power User",
        Enterprise => "Enterprise",
        Admin => "Admin",
    }
}

labeled_enum! {
    /// Affect detected in the feedback text.
    Sentiment, InvalidSentiment {
        VeryNegative => "Very Negative",
        Negative => "Negative",
        Neutral => "Neutral",
        Positive => "Positive",
        VeryPositive => "Very Positive",
    }
}

labeled_enum! {
    /// Coarse subject area detected in the feedback text.
    Topic, InvalidTopic {
        Authentication => "Authentication",
        Performance => "Performance",
        UiUx => "UI/UX",
        Mobile => "Mobile",
        Integration => "Integration",
        Security => "Security",
        General => "General",
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Open
    }
}

impl Default for Team {
    fn default() -> Self {
        Team::Unassigned
    }
}

impl Default for UserType {
    fn default() -> Self {
        UserType::Guest
    }
}

impl Default for Sentiment {
    fn default() -> Self {
        Sentiment::Neutral
    }
}

impl Default for Topic {
    fn default() -> Self {
        Topic::General
    }
}

impl Sentiment {
    /// Ordinal score from 1 (very negative) to 5 (very positive).
    pub fn ordinal(&self) -> u8 {
        match self {
            Sentiment::VeryNegative => 1,
            Sentiment::Negative => 2,
            Sentiment::Neutral => 3,
            Sentiment::Positive => 4,
            Sentiment::VeryPositive => 5,
        }
    }
}

/// A file attached to a submission. Only the descriptor is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AttachmentRepr")]
pub struct Attachment {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl Attachment {
    pub fn named(name: impl Into<String>) -> Self {
        Attachment {
            name: name.into(),
            size: None,
            content_type: None,
        }
    }
}

/// Stored attachments are either bare file names or full descriptors.
#[derive(Deserialize)]
#[serde(untagged)]
enum AttachmentRepr {
    Name(String),
    Descriptor {
        name: String,
        #[serde(default)]
        size: Option<u64>,
        #[serde(rename = "type", default)]
        content_type: Option<String>,
    },
}

impl From<AttachmentRepr> for Attachment {
    fn from(repr: AttachmentRepr) -> Self {
        match repr {
            AttachmentRepr::Name(name) => Attachment::named(name),
            AttachmentRepr::Descriptor {
                name,
                size,
                content_type,
            } => Attachment {
                name,
                size,
                content_type,
            },
        }
    }
}

fn default_impact() -> u8 {
    1
}

/// A single piece of submitted feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    /// Opaque unique identifier (format: `fb-{hash}`).
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub urgency: Urgency,
    #[serde(default)]
    pub sentiment: Sentiment,
    #[serde(default)]
    pub topic: Topic,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub assigned_team: Team,
    /// Always `score_for(urgency)`; recomputed on load.
    pub priority: u8,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub user_type: UserType,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default = "default_impact")]
    pub impact_score: u8,
    #[serde(default)]
    pub votes: u32,
    #[serde(default)]
    pub views: u32,
}

impl FeedbackRecord {
    /// Creates an open, unassigned record with neutral labels.
    pub fn new(
        id: String,
        title: String,
        description: String,
        category: Category,
        urgency: Urgency,
        created_at: DateTime<Utc>,
    ) -> Self {
        FeedbackRecord {
            id,
            title,
            description,
            category,
            urgency,
            sentiment: Sentiment::Neutral,
            topic: Topic::General,
            status: Status::Open,
            assigned_team: Team::Unassigned,
            priority: score_for(urgency),
            created_at,
            updated_at: created_at,
            email: None,
            user_type: UserType::Guest,
            tags: Vec::new(),
            attachments: Vec::new(),
            response: None,
            impact_score: default_impact(),
            votes: 0,
            views: 0,
        }
    }

    /// Sets urgency and the priority derived from it.
    pub fn set_urgency(&mut self, urgency: Urgency) {
        self.urgency = urgency;
        self.priority = score_for(urgency);
    }

    /// Refreshes `updated_at`, never moving it backwards or before `created_at`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.updated_at).max(self.created_at);
    }

    /// Adds a tag unless an identical one is already present.
    pub fn add_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        if !tag.is_empty() && !self.tags.iter().any(|t| t == tag) {
            self.tags.push(tag.to_string());
        }
    }

    /// Secondary 0-10 score weighted by keywords, category and urgency.
    pub fn priority_score(&self) -> f64 {
        priority_score(&self.title, &self.description, self.category, self.urgency)
    }

    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    /// Text matched by free-text search: title, description and tags.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.tags.join(" "))
    }

    /// Days between creation and last update.
    pub fn elapsed_days(&self) -> f64 {
        let ms = (self.updated_at - self.created_at).num_milliseconds();
        ms as f64 / (1000.0 * 60.0 * 60.0 * 24.0)
    }

    /// Restores invariants on a record read from storage.
    pub(crate) fn normalize(&mut self) {
        self.priority = score_for(self.urgency);
        if self.updated_at < self.created_at {
            self.updated_at = self.created_at;
        }
        self.impact_score = self.impact_score.clamp(1, 10);
        if self.email.as_deref().is_some_and(|e| e.trim().is_empty()) {
            self.email = None;
        }
    }
}

#[cfg(test)]
#[path = "feedback_tests.rs"]
mod tests;
