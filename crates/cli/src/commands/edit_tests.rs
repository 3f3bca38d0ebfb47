// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;
use chrono::Duration;
use yare::parameterized;

#[parameterized(
    in_progress = { "in_progress", Status::InProgress },
    resolved = { "Resolved", Status::Resolved },
    closed = { "closed", Status::Closed },
)]
fn status_updates_record_and_touches(input: &str, expected: Status) {
    let mut ctx = TestContext::new();
    let id = ctx.submit("Crash", "Crash on save");
    ctx.advance(Duration::hours(2));

    let (resolved, status) = status_impl(&mut ctx.store, &id, input).unwrap();
    assert_eq!(resolved, id);
    assert_eq!(status, expected);
    let record = ctx.record(&id);
    assert_eq!(record.status, expected);
    assert!(record.updated_at > record.created_at);
}

#[test]
fn invalid_status_leaves_record_unchanged() {
    let mut ctx = TestContext::new();
    let id = ctx.submit("Crash", "Crash on save");
    let err = status_impl(&mut ctx.store, &id, "done").unwrap_err();
    assert!(matches!(err, Error::InvalidValue(_)));
    assert_eq!(ctx.record(&id).status, Status::Open);
}

#[test]
fn unknown_id_is_reported() {
    let mut ctx = TestContext::new();
    ctx.submit("Crash", "Crash on save");
    let err = status_impl(&mut ctx.store, "fb-nothere", "resolved").unwrap_err();
    assert!(matches!(err, Error::FeedbackNotFound(_)));
    assert!(matches!(
        vote_impl(&mut ctx.store, "fb-nothere").unwrap_err(),
        Error::FeedbackNotFound(_)
    ));
}

#[test]
fn assign_sets_team() {
    let mut ctx = TestContext::new();
    let id = ctx.submit("Crash", "Crash on save");
    assign_impl(&mut ctx.store, &id, "design").unwrap();
    assert_eq!(ctx.record(&id).assigned_team, Team::Design);
}

#[test]
fn respond_sets_and_clears() {
    let mut ctx = TestContext::new();
    let id = ctx.submit("Crash", "Crash on save");

    let (_, cleared) = respond_impl(&mut ctx.store, &id, " Fixed in 2.1 ").unwrap();
    assert!(!cleared);
    assert_eq!(ctx.record(&id).response.as_deref(), Some("Fixed in 2.1"));

    let (_, cleared) = respond_impl(&mut ctx.store, &id, "   ").unwrap();
    assert!(cleared);
    assert_eq!(ctx.record(&id).response, None);
}

#[test]
fn vote_increments() {
    let mut ctx = TestContext::new();
    let id = ctx.submit("Crash", "Crash on save");
    vote_impl(&mut ctx.store, &id).unwrap();
    let (_, votes) = vote_impl(&mut ctx.store, &id).unwrap();
    assert_eq!(votes, 2);
}

#[test]
fn delete_removes_only_target() {
    let mut ctx = TestContext::new();
    let keep = ctx.submit("Keep", "Keep me");
    let drop = ctx.submit("Drop", "Drop me");
    assert_eq!(delete_impl(&mut ctx.store, &drop).unwrap(), drop);
    assert!(ctx.store.get(&drop).is_none());
    assert!(ctx.store.get(&keep).is_some());

    let err = delete_impl(&mut ctx.store, &drop).unwrap_err();
    assert!(matches!(err, Error::FeedbackNotFound(_)));
}
