// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the fflow library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'ff init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("feedback not found: {0}")]
    FeedbackNotFound(String),

    #[error("roadmap item not found: {0}")]
    RoadmapItemNotFound(String),

    #[error("ambiguous ID '{prefix}' matches: {}", matches.join(", "))]
    AmbiguousId {
        prefix: String,
        matches: Vec<String>,
    },

    /// An enumeration label that did not parse. Carries the full hint message.
    #[error("{0}")]
    InvalidValue(String),

    #[error("{field} is required")]
    FieldRequired { field: &'static str },

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("{field} too long ({actual} chars, max {max})")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    #[error("too many {field} (max {max} per feedback)")]
    TooMany { field: &'static str, max: usize },

    #[error("invalid email: '{0}'\n  hint: expected an address like name@example.com")]
    InvalidEmail(String),

    #[error("export path cannot be empty")]
    ExportPathEmpty,

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for fflow operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<ff_core::Error> for Error {
    fn from(e: ff_core::Error) -> Self {
        match e {
            ff_core::Error::FeedbackNotFound(id) => Error::FeedbackNotFound(id),
            ff_core::Error::AmbiguousId { prefix, matches } => {
                Error::AmbiguousId { prefix, matches }
            }
            ff_core::Error::FieldRequired { field } => Error::FieldRequired { field },
            e @ (ff_core::Error::InvalidCategory(_)
            | ff_core::Error::InvalidUrgency(_)
            | ff_core::Error::InvalidStatus(_)
            | ff_core::Error::InvalidTeam(_)
            | ff_core::Error::InvalidUserType(_)
            | ff_core::Error::InvalidSentiment(_)
            | ff_core::Error::InvalidTopic(_)
            | ff_core::Error::InvalidRoadmapStatus(_)) => Error::InvalidValue(e.to_string()),
            ff_core::Error::Database(e) => Error::Database(e),
            ff_core::Error::Io(e) => Error::Io(e),
            ff_core::Error::Json(e) => Error::Json(e),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
