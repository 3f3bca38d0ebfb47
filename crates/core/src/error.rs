// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for ff-core operations.

use thiserror::Error;

/// All possible errors that can occur in ff-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("feedback not found: {0}")]
    FeedbackNotFound(String),

    #[error("ambiguous ID '{prefix}' matches: {}", matches.join(", "))]
    AmbiguousId {
        prefix: String,
        matches: Vec<String>,
    },

    #[error("{field} is required")]
    FieldRequired { field: &'static str },

    #[error("invalid category: '{0}'\n  hint: valid categories are: bug, feature, improvement, security, performance, ux/ui, integration, documentation")]
    InvalidCategory(String),

    #[error("invalid urgency: '{0}'\n  hint: valid urgencies are: low, medium, high, critical")]
    InvalidUrgency(String),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: open, in_progress, resolved, closed")]
    InvalidStatus(String),

    #[error("invalid team: '{0}'\n  hint: valid teams are: engineering, product, design, support, marketing, sales, unassigned")]
    InvalidTeam(String),

    #[error("invalid user type: '{0}'\n  hint: valid user types are: guest, customer, power_user, enterprise, admin")]
    InvalidUserType(String),

    #[error("invalid sentiment: '{0}'\n  hint: valid sentiments are: very_negative, negative, neutral, positive, very_positive")]
    InvalidSentiment(String),

    #[error("invalid topic: '{0}'\n  hint: valid topics are: authentication, performance, ui/ux, mobile, integration, security, general")]
    InvalidTopic(String),

    #[error("invalid roadmap status: '{0}'\n  hint: valid statuses are: planned, in_progress, completed")]
    InvalidRoadmapStatus(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for ff-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
