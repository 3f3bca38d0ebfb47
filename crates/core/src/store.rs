// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The record store.
//!
//! [`Store`] holds every feedback record plus the surveys, roadmap items and
//! current user in memory. Each mutation updates memory first and then writes
//! the affected collection through the [`Storage`] collaborator. Write
//! failures are logged and dropped; the in-memory state stays authoritative.
//!
//! Mutations addressed by id treat an unknown id as a no-op and report
//! whether anything changed.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::analytics::Analytics;
use crate::classify::Classification;
use crate::clock::{ClockSource, SystemClock};
use crate::entities::{CurrentUser, RoadmapItem, RoadmapStatus, Survey};
use crate::error::{Error, Result};
use crate::feedback::{Attachment, Category, FeedbackRecord, Status, Team, Urgency, UserType};
use crate::id::{generate_unique_id, impact_from_id, resolve_prefix, FEEDBACK_PREFIX, ROADMAP_PREFIX};
use crate::query::FeedbackFilter;
use crate::storage::Storage;

/// Storage key of the feedback records.
pub const RECORDS_KEY: &str = "feedbackflow:data:v3";
pub const SURVEYS_KEY: &str = "feedbackflow:surveys";
pub const ROADMAP_KEY: &str = "feedbackflow:roadmap";
pub const USER_KEY: &str = "feedbackflow:user";

/// A new piece of feedback as entered by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Overrides the urgency detected from the description.
    pub urgency: Option<Urgency>,
    pub email: Option<String>,
    pub user_type: UserType,
    pub tags: Vec<String>,
    pub attachments: Vec<Attachment>,
}

impl Submission {
    pub fn new(title: impl Into<String>, description: impl Into<String>, category: Category) -> Self {
        Submission {
            title: title.into(),
            description: description.into(),
            category,
            urgency: None,
            email: None,
            user_type: UserType::default(),
            tags: Vec::new(),
            attachments: Vec::new(),
        }
    }
}

/// In-memory feedback collection mirrored to a [`Storage`].
pub struct Store<S, C = SystemClock> {
    storage: S,
    clock: C,
    records: Vec<FeedbackRecord>,
    surveys: Vec<Survey>,
    roadmap: Vec<RoadmapItem>,
    user: CurrentUser,
}

impl<S: Storage> Store<S, SystemClock> {
    /// Loads every collection from `storage`, using the system clock.
    pub fn open(storage: S) -> Self {
        Store::with_clock(storage, SystemClock)
    }
}

impl<S: Storage, C: ClockSource> Store<S, C> {
    /// Loads every collection from `storage`. Missing or unreadable
    /// collections start out empty.
    pub fn with_clock(storage: S, clock: C) -> Self {
        let mut records: Vec<FeedbackRecord> = load_list(&storage, RECORDS_KEY);
        for record in &mut records {
            record.normalize();
        }
        let surveys = load_list(&storage, SURVEYS_KEY);
        let roadmap = load_list(&storage, ROADMAP_KEY);
        let user = storage
            .load(USER_KEY)
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default();

        tracing::debug!(
            records = records.len(),
            "loaded feedback store"
        );
        Store {
            storage,
            clock,
            records,
            surveys,
            roadmap,
            user,
        }
    }

    /// All records, newest submission first.
    pub fn records(&self) -> &[FeedbackRecord] {
        &self.records
    }

    pub fn surveys(&self) -> &[Survey] {
        &self.surveys
    }

    pub fn roadmap(&self) -> &[RoadmapItem] {
        &self.roadmap
    }

    pub fn current_user(&self) -> &CurrentUser {
        &self.user
    }

    pub fn get(&self, id: &str) -> Option<&FeedbackRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Resolves a full or unique partial feedback id.
    pub fn resolve_id(&self, partial: &str) -> Result<String> {
        resolve_prefix(partial, self.records.iter().map(|r| r.id.as_str()))
    }

    /// Records matching `filter`, highest priority first.
    pub fn filtered(&self, filter: &FeedbackFilter) -> Vec<&FeedbackRecord> {
        filter.apply(&self.records)
    }

    /// Current time according to the store's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn analytics(&self) -> Analytics {
        Analytics::compute(&self.records)
    }

    /// Classifies and stores a new submission at the front of the list.
    pub fn submit(&mut self, submission: Submission) -> Result<&FeedbackRecord> {
        let title = submission.title.trim();
        if title.is_empty() {
            return Err(Error::FieldRequired { field: "title" });
        }
        let description = submission.description.trim();
        if description.is_empty() {
            return Err(Error::FieldRequired {
                field: "description",
            });
        }

        let now = self.clock.now();
        let id = generate_unique_id(FEEDBACK_PREFIX, title, &now, |candidate| {
            self.records.iter().any(|r| r.id == candidate)
        });
        let classification = Classification::of(description);

        let mut record = FeedbackRecord::new(
            id,
            title.to_string(),
            description.to_string(),
            submission.category,
            submission.urgency.unwrap_or(classification.urgency),
            now,
        );
        record.sentiment = classification.sentiment;
        record.topic = classification.topic;
        record.user_type = submission.user_type;
        record.email = submission
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        for tag in &submission.tags {
            record.add_tag(tag);
        }
        record.attachments = submission.attachments;
        record.impact_score = impact_from_id(&record.id);

        tracing::debug!(id = %record.id, urgency = %record.urgency, "submitted feedback");
        self.records.insert(0, record);
        self.persist_records();
        Ok(&self.records[0])
    }

    /// Replaces every collection except the current user, e.g. with seed data.
    pub fn replace_all(
        &mut self,
        mut records: Vec<FeedbackRecord>,
        surveys: Vec<Survey>,
        roadmap: Vec<RoadmapItem>,
    ) {
        for record in &mut records {
            record.normalize();
        }
        self.records = records;
        self.surveys = surveys;
        self.roadmap = roadmap;
        self.persist_records();
        self.persist(SURVEYS_KEY, &self.surveys);
        self.persist(ROADMAP_KEY, &self.roadmap);
    }

    pub fn update_status(&mut self, id: &str, status: Status) -> bool {
        self.modify(id, |record| record.status = status)
    }

    pub fn assign_team(&mut self, id: &str, team: Team) -> bool {
        self.modify(id, |record| record.assigned_team = team)
    }

    /// Sets the admin response. Blank text clears it.
    pub fn respond(&mut self, id: &str, text: &str) -> bool {
        let text = text.trim();
        let response = (!text.is_empty()).then(|| text.to_string());
        self.modify(id, move |record| record.response = response)
    }

    pub fn vote(&mut self, id: &str) -> bool {
        self.modify(id, |record| record.votes = record.votes.saturating_add(1))
    }

    /// Counts a view. Views are not edits, so `updated_at` is left alone.
    pub fn record_view(&mut self, id: &str) -> bool {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        record.views = record.views.saturating_add(1);
        self.persist_records();
        true
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return false;
        }
        self.persist_records();
        true
    }

    /// Marks every selected record resolved. Returns how many matched.
    pub fn bulk_resolve(&mut self, ids: &[String]) -> usize {
        let count = self.bulk_modify(ids, |record| record.status = Status::Resolved);
        tracing::info!(count, "bulk resolved feedback");
        count
    }

    pub fn bulk_assign(&mut self, ids: &[String], team: Team) -> usize {
        let count = self.bulk_modify(ids, |record| record.assigned_team = team);
        tracing::info!(count, team = %team, "bulk assigned feedback");
        count
    }

    /// Removes every selected record. Returns how many were removed.
    pub fn bulk_delete(&mut self, ids: &[String]) -> usize {
        if ids.is_empty() {
            return 0;
        }
        let before = self.records.len();
        self.records.retain(|r| !ids.contains(&r.id));
        let count = before - self.records.len();
        if count > 0 {
            self.persist_records();
        }
        tracing::info!(count, "bulk deleted feedback");
        count
    }

    /// Resolves a full or unique partial roadmap id.
    pub fn resolve_roadmap_id(&self, partial: &str) -> Result<String> {
        resolve_prefix(partial, self.roadmap.iter().map(|item| item.id.as_str()))
    }

    pub fn add_roadmap_item(
        &mut self,
        title: &str,
        description: &str,
        target_date: Option<String>,
    ) -> Result<&RoadmapItem> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::FieldRequired { field: "title" });
        }
        let now = self.clock.now();
        let id = generate_unique_id(ROADMAP_PREFIX, title, &now, |candidate| {
            self.roadmap.iter().any(|item| item.id == candidate)
        });
        self.roadmap.push(RoadmapItem {
            id,
            title: title.to_string(),
            description: description.trim().to_string(),
            status: RoadmapStatus::Planned,
            votes: 0,
            target_date: target_date.filter(|d| !d.trim().is_empty()),
        });
        self.persist(ROADMAP_KEY, &self.roadmap);
        let index = self.roadmap.len() - 1;
        Ok(&self.roadmap[index])
    }

    pub fn vote_roadmap(&mut self, id: &str) -> bool {
        let Some(item) = self.roadmap.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.votes = item.votes.saturating_add(1);
        self.persist(ROADMAP_KEY, &self.roadmap);
        true
    }

    pub fn set_surveys(&mut self, surveys: Vec<Survey>) {
        self.surveys = surveys;
        self.persist(SURVEYS_KEY, &self.surveys);
    }

    pub fn set_current_user(&mut self, user: CurrentUser) {
        self.user = user;
        self.persist(USER_KEY, &self.user);
    }

    fn modify<F>(&mut self, id: &str, change: F) -> bool
    where
        F: FnOnce(&mut FeedbackRecord),
    {
        let now = self.clock.now();
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        change(record);
        record.touch(now);
        self.persist_records();
        true
    }

    fn bulk_modify<F>(&mut self, ids: &[String], change: F) -> usize
    where
        F: Fn(&mut FeedbackRecord),
    {
        if ids.is_empty() {
            return 0;
        }
        let now = self.clock.now();
        let mut count = 0;
        for record in self.records.iter_mut().filter(|r| ids.contains(&r.id)) {
            change(record);
            record.touch(now);
            count += 1;
        }
        if count > 0 {
            self.persist_records();
        }
        count
    }

    fn persist_records(&self) {
        self.persist(RECORDS_KEY, &self.records);
    }

    fn persist<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let result = serde_json::to_value(value)
            .map_err(Error::from)
            .and_then(|json| self.storage.save(key, &json));
        if let Err(e) = result {
            tracing::warn!("failed to save '{}': {}", key, e);
        }
    }
}

/// Loads a stored list, dropping entries that no longer parse.
fn load_list<T: DeserializeOwned>(storage: &impl Storage, key: &str) -> Vec<T> {
    let Some(Value::Array(items)) = storage.load(key) else {
        return Vec::new();
    };
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("skipping unreadable entry in '{}': {}", key, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
