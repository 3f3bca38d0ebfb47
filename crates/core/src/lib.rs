// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ff-core: Shared library for the FeedbackFlow triage tool
//!
//! This crate provides the feedback data model, the keyword classifiers and
//! scorers, the filter and analytics engines, and the persisted record store
//! used by the `ff` CLI.

pub mod analytics;
pub mod classify;
pub mod clock;
pub mod csv;
pub mod entities;
pub mod error;
pub mod feedback;
pub mod id;
pub mod query;
pub mod score;
pub mod storage;
pub mod store;

pub use analytics::Analytics;
pub use classify::Classification;
pub use clock::{ClockSource, FixedClock, SystemClock};
pub use entities::{CurrentUser, Question, QuestionKind, RoadmapItem, RoadmapStatus, Survey};
pub use error::{Error, Result};
pub use feedback::{
    Attachment, Category, FeedbackRecord, Sentiment, Status, Team, Topic, Urgency, UserType,
};
pub use query::FeedbackFilter;
pub use score::{priority_score, score_for};
pub use storage::{MemoryStorage, SqliteStorage, Storage};
pub use store::{Store, Submission};
