// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::clock::FixedClock;
use crate::feedback::{Sentiment, Topic};
use crate::storage::MemoryStorage;
use chrono::{Duration, TimeZone, Utc};
use serde_json::json;

fn clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap())
}

fn submit(store: &mut Store<&MemoryStorage, &FixedClock>, title: &str, description: &str) -> String {
    store
        .submit(Submission::new(title, description, Category::Bug))
        .unwrap()
        .id
        .clone()
}

#[test]
fn empty_storage_opens_empty_store() {
    let storage = MemoryStorage::new();
    let store = Store::open(&storage);
    assert!(store.records().is_empty());
    assert!(store.roadmap().is_empty());
    assert_eq!(store.current_user(), &CurrentUser::default());
}

#[test]
fn submit_classifies_and_prepends() {
    let storage = MemoryStorage::new();
    let clock = clock();
    let mut store = Store::with_clock(&storage, &clock);

    let first = submit(&mut store, "Dark mode", "Love the new dark mode, excellent design");
    clock.advance(Duration::minutes(1));
    let second = submit(
        &mut store,
        "Breach",
        "Critical security breach, data loss in production",
    );

    let ids: Vec<&str> = store.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec![second.as_str(), first.as_str()]);

    let breach = store.get(&second).unwrap();
    assert_eq!(breach.urgency, Urgency::Critical);
    assert_eq!(breach.priority, 4);
    assert_eq!(breach.topic, Topic::Security);
    assert_eq!(breach.status, Status::Open);
    assert_eq!(breach.assigned_team, Team::Unassigned);
    assert!((1..=10).contains(&breach.impact_score));

    let dark = store.get(&first).unwrap();
    assert_eq!(dark.sentiment, Sentiment::VeryPositive);
    assert_eq!(dark.urgency, Urgency::Low);
}

#[test]
fn submit_trims_and_applies_overrides() {
    let storage = MemoryStorage::new();
    let mut store = Store::open(&storage);
    let mut submission = Submission::new("  Export  ", "  export is slow  ", Category::Feature);
    submission.urgency = Some(Urgency::High);
    submission.email = Some("   ".to_string());
    submission.tags = vec!["csv".to_string(), "csv".to_string()];
    submission.attachments = vec![Attachment::named("trace.log")];
    submission.user_type = UserType::Enterprise;

    let record = store.submit(submission).unwrap();
    assert_eq!(record.title, "Export");
    assert_eq!(record.description, "export is slow");
    assert_eq!(record.urgency, Urgency::High);
    assert_eq!(record.priority, 3);
    assert_eq!(record.email, None);
    assert_eq!(record.tags, vec!["csv"]);
    assert_eq!(record.user_type, UserType::Enterprise);
    assert!(record.has_attachments());
}

#[test]
fn submit_rejects_blank_fields_without_mutating() {
    let storage = MemoryStorage::new();
    let mut store = Store::open(&storage);

    let err = store
        .submit(Submission::new("   ", "text", Category::Bug))
        .unwrap_err();
    assert!(matches!(err, Error::FieldRequired { field: "title" }));

    let err = store
        .submit(Submission::new("title", "\n", Category::Bug))
        .unwrap_err();
    assert!(matches!(err, Error::FieldRequired { field: "description" }));

    assert!(store.records().is_empty());
    assert!(!storage.contains(RECORDS_KEY));
}

#[test]
fn same_title_same_instant_gets_distinct_ids() {
    let storage = MemoryStorage::new();
    let clock = clock();
    let mut store = Store::with_clock(&storage, &clock);
    let a = submit(&mut store, "Same", "first");
    let b = submit(&mut store, "Same", "second");
    assert_ne!(a, b);
    assert_eq!(b, format!("{}-2", a));
}

#[test]
fn mutations_touch_updated_at() {
    let storage = MemoryStorage::new();
    let clock = clock();
    let mut store = Store::with_clock(&storage, &clock);
    let id = submit(&mut store, "Crash", "App crash on launch");
    let created = store.get(&id).unwrap().created_at;

    clock.advance(Duration::hours(1));
    assert!(store.update_status(&id, Status::InProgress));
    clock.advance(Duration::hours(1));
    assert!(store.assign_team(&id, Team::Engineering));
    clock.advance(Duration::hours(1));
    assert!(store.respond(&id, "  Fixed in 2.1  "));
    clock.advance(Duration::hours(1));
    assert!(store.vote(&id));

    let record = store.get(&id).unwrap();
    assert_eq!(record.status, Status::InProgress);
    assert_eq!(record.assigned_team, Team::Engineering);
    assert_eq!(record.response.as_deref(), Some("Fixed in 2.1"));
    assert_eq!(record.votes, 1);
    assert_eq!(record.updated_at, created + Duration::hours(4));
    assert_eq!(record.priority, 3);
}

#[test]
fn view_does_not_touch_updated_at() {
    let storage = MemoryStorage::new();
    let clock = clock();
    let mut store = Store::with_clock(&storage, &clock);
    let id = submit(&mut store, "Typo", "typo on pricing page");
    let before = store.get(&id).unwrap().updated_at;

    clock.advance(Duration::days(2));
    assert!(store.record_view(&id));
    assert!(store.record_view(&id));

    let record = store.get(&id).unwrap();
    assert_eq!(record.views, 2);
    assert_eq!(record.updated_at, before);
}

#[test]
fn unknown_id_operations_are_no_ops() {
    let storage = MemoryStorage::new();
    let mut store = Store::open(&storage);
    let id = submit_plain(&mut store);
    let snapshot = store.records().to_vec();

    assert!(!store.update_status("fb-missing", Status::Closed));
    assert!(!store.assign_team("fb-missing", Team::Sales));
    assert!(!store.respond("fb-missing", "hi"));
    assert!(!store.vote("fb-missing"));
    assert!(!store.record_view("fb-missing"));
    assert!(!store.delete("fb-missing"));

    assert_eq!(store.records(), snapshot.as_slice());
    assert!(store.get(&id).is_some());
}

fn submit_plain(store: &mut Store<&MemoryStorage>) -> String {
    store
        .submit(Submission::new("Plain", "plain text", Category::Improvement))
        .unwrap()
        .id
        .clone()
}

#[test]
fn delete_removes_record_entirely() {
    let storage = MemoryStorage::new();
    let mut store = Store::open(&storage);
    let id = submit_plain(&mut store);
    assert!(store.delete(&id));
    assert!(store.get(&id).is_none());
    assert!(!store.delete(&id));

    let reopened = Store::open(&storage);
    assert!(reopened.records().is_empty());
}

#[test]
fn bulk_actions_apply_to_selection() {
    let storage = MemoryStorage::new();
    let clock = clock();
    let mut store = Store::with_clock(&storage, &clock);
    let a = submit(&mut store, "A", "slow dashboard");
    let b = submit(&mut store, "B", "broken export");
    let c = submit(&mut store, "C", "add dark mode");

    let selection = vec![a.clone(), b.clone(), "fb-nothere".to_string()];
    assert_eq!(store.bulk_resolve(&selection), 2);
    assert_eq!(store.get(&a).unwrap().status, Status::Resolved);
    assert_eq!(store.get(&b).unwrap().status, Status::Resolved);
    assert_eq!(store.get(&c).unwrap().status, Status::Open);

    assert_eq!(store.bulk_assign(&[c.clone()], Team::Design), 1);
    assert_eq!(store.get(&c).unwrap().assigned_team, Team::Design);

    assert_eq!(store.bulk_delete(&selection), 2);
    assert_eq!(store.records().len(), 1);
    assert_eq!(store.records()[0].id, c);
}

#[test]
fn empty_bulk_selection_is_a_no_op() {
    let storage = MemoryStorage::new();
    let mut store = Store::open(&storage);
    let id = submit_plain(&mut store);
    let snapshot = store.records().to_vec();

    assert_eq!(store.bulk_resolve(&[]), 0);
    assert_eq!(store.bulk_assign(&[], Team::Support), 0);
    assert_eq!(store.bulk_delete(&[]), 0);
    assert_eq!(store.records(), snapshot.as_slice());
    assert_eq!(store.get(&id).unwrap().status, Status::Open);
}

#[test]
fn storage_round_trip_preserves_records() {
    let storage = MemoryStorage::new();
    let clock = clock();
    let original = {
        let mut store = Store::with_clock(&storage, &clock);
        let id = submit(&mut store, "Login", "Cannot login after password reset");
        store.assign_team(&id, Team::Support);
        store.record_view(&id);
        store.set_current_user(CurrentUser {
            user_type: UserType::Admin,
            name: "Dana".to_string(),
        });
        store.records().to_vec()
    };

    let reopened = Store::with_clock(&storage, &clock);
    assert_eq!(reopened.records(), original.as_slice());
    assert_eq!(reopened.current_user().user_type, UserType::Admin);
}

#[test]
fn save_failures_keep_memory_authoritative() {
    let storage = MemoryStorage::new();
    let mut store = Store::open(&storage);
    storage.set_fail_writes(true);

    let id = submit_plain(&mut store);
    assert!(store.vote(&id));
    assert_eq!(store.get(&id).unwrap().votes, 1);
    assert!(!storage.contains(RECORDS_KEY));
}

#[test]
fn corrupt_storage_falls_back_to_defaults() {
    let storage = MemoryStorage::new();
    storage.insert_raw(RECORDS_KEY, "{{{");
    storage.insert_raw(USER_KEY, "[1, 2]");
    let store = Store::open(&storage);
    assert!(store.records().is_empty());
    assert_eq!(store.current_user(), &CurrentUser::default());
}

#[test]
fn load_skips_unreadable_entries_and_restores_priority() {
    let storage = MemoryStorage::new();
    let stored = json!([
        {"id": "fb-good", "title": "t", "description": "d", "category": "Bug",
         "urgency": "Critical", "priority": 1, "createdAt": 1000, "updatedAt": 500},
        {"id": "fb-bad", "title": "t", "description": "d", "category": "Nope",
         "urgency": "Low", "priority": 1, "createdAt": 0, "updatedAt": 0}
    ]);
    storage.save(RECORDS_KEY, &stored).unwrap();

    let store = Store::open(&storage);
    assert_eq!(store.records().len(), 1);
    let record = &store.records()[0];
    assert_eq!(record.priority, 4);
    assert!(record.updated_at >= record.created_at);
}

#[test]
fn resolve_id_accepts_unique_prefix() {
    let storage = MemoryStorage::new();
    let mut store = Store::open(&storage);
    let id = submit_plain(&mut store);
    assert_eq!(store.resolve_id(&id[..6]).unwrap(), id);
    assert!(matches!(
        store.resolve_id("fb-zzzzzzzz"),
        Err(Error::FeedbackNotFound(_))
    ));
}

#[test]
fn filtered_and_analytics_reflect_store() {
    let storage = MemoryStorage::new();
    let clock = clock();
    let mut store = Store::with_clock(&storage, &clock);
    submit(&mut store, "Outage", "site is down");
    submit(&mut store, "Dark", "please add dark mode");

    let filter = FeedbackFilter {
        urgency: Some(Urgency::Critical),
        ..Default::default()
    };
    assert_eq!(store.filtered(&filter).len(), 1);

    let analytics = store.analytics();
    assert_eq!(analytics.total, 2);
    assert_eq!(analytics.critical_count, 1);
}

#[test]
fn roadmap_items_are_added_and_voted() {
    let storage = MemoryStorage::new();
    let clock = clock();
    let mut store = Store::with_clock(&storage, &clock);
    let id = store
        .add_roadmap_item("Offline mode", "work without network", Some("2024-09-01".to_string()))
        .unwrap()
        .id
        .clone();
    assert!(id.starts_with("rm-"));
    assert!(store.vote_roadmap(&id));
    assert!(!store.vote_roadmap("rm-missing"));
    assert!(store.add_roadmap_item(" ", "", None).is_err());

    let reopened = Store::with_clock(&storage, &clock);
    assert_eq!(reopened.roadmap()[0].votes, 1);
    assert_eq!(reopened.roadmap()[0].status, RoadmapStatus::Planned);
    assert_eq!(reopened.resolve_roadmap_id(&id[..5]).unwrap(), id);
}

#[test]
fn replace_all_swaps_collections() {
    let storage = MemoryStorage::new();
    let mut store = Store::open(&storage);
    submit_plain(&mut store);

    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let seeded = FeedbackRecord::new(
        "fb-seed".to_string(),
        "Seed".to_string(),
        "seeded".to_string(),
        Category::Feature,
        Urgency::Medium,
        created,
    );
    store.replace_all(vec![seeded], Vec::new(), Vec::new());
    assert_eq!(store.records().len(), 1);

    let reopened = Store::open(&storage);
    assert_eq!(reopened.records()[0].id, "fb-seed");
}
