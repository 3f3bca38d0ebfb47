// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

mod common;
use common::*;
use yare::parameterized;

#[test]
fn submit_reports_detected_labels() {
    let temp = init_temp();
    ff().args(["submit", "Breach", "Critical security breach, data loss"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Critical urgency"));
}

#[test]
fn submit_json_includes_priority() {
    let temp = init_temp();
    let json = stdout(&temp, &["submit", "Crash", "App crash on launch", "-o", "json"]);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["urgency"], "High");
    assert_eq!(value["priority"], 3);
    assert!(value["id"].as_str().unwrap().starts_with("fb-"));
}

#[parameterized(
    blank_title = { &["submit", " ", "Body"] },
    blank_description = { &["submit", "Title", "  "] },
    bad_category = { &["submit", "Title", "Body", "-c", "billing"] },
    bad_email = { &["submit", "Title", "Body", "-e", "nope"] },
)]
fn submit_rejects_invalid_input(args: &[&str]) {
    let temp = init_temp();
    ff().args(args).current_dir(temp.path()).assert().failure();
    assert!(list_ids(&temp, &[]).is_empty());
}

#[test]
fn list_orders_by_priority() {
    let temp = init_temp();
    let low = submit(&temp, "Theme", "Please add a dark theme");
    let critical = submit(&temp, "Outage", "Everything is down");
    let high = submit(&temp, "Crash", "Crash when saving");

    assert_eq!(list_ids(&temp, &[]), vec![critical, high, low]);
}

#[test]
fn list_filters_and_limits() {
    let temp = init_temp();
    let low = submit(&temp, "Theme", "Please add a dark theme");
    let critical = submit(&temp, "Outage", "Everything is down");
    submit(&temp, "Crash", "Crash when saving");

    assert_eq!(list_ids(&temp, &["-u", "critical"]), vec![critical.clone()]);
    assert_eq!(list_ids(&temp, &["-q", "THEME"]), vec![low]);
    assert_eq!(list_ids(&temp, &["-n", "1"]), vec![critical]);
}

#[test]
fn list_rejects_unknown_label() {
    let temp = init_temp();
    ff().args(["list", "-s", "done"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid status"));
}

#[test]
fn list_empty_project() {
    let temp = init_temp();
    ff().arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No feedback found."));
}

#[test]
fn lifecycle_edits_are_persisted() {
    let temp = init_temp();
    let id = submit(&temp, "Crash", "Crash when saving");

    stdout(&temp, &["status", &id, "in_progress"]);
    stdout(&temp, &["assign", &id, "engineering"]);
    stdout(&temp, &["respond", &id, "Looking into it"]);
    stdout(&temp, &["vote", &id]);

    let details = stdout(&temp, &["show", &id]);
    assert!(details.contains("Status: In Progress"));
    assert!(details.contains("Team: Engineering"));
    assert!(details.contains("Looking into it"));
    assert!(details.contains("Votes: 1"));

    let line = stdout(&temp, &["list", "-s", "in_progress"]);
    assert!(line.contains(&format!("(In Progress, @Engineering) {}: Crash", id)));
}

#[test]
fn show_counts_views() {
    let temp = init_temp();
    let id = submit(&temp, "Crash", "Crash when saving");
    stdout(&temp, &["show", &id]);
    let json = stdout(&temp, &["show", &id, "-o", "json"]);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["views"], 2);
}

#[test]
fn prefix_ids_are_accepted() {
    let temp = init_temp();
    let id = submit(&temp, "Crash", "Crash when saving");
    stdout(&temp, &["status", &id[..6], "resolved"]);
    assert_eq!(list_ids(&temp, &["-s", "resolved"]), vec![id]);
}

#[test]
fn unknown_id_fails() {
    let temp = init_temp();
    ff().args(["vote", "fb-nothere"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("feedback not found"));
}

#[test]
fn delete_removes_feedback() {
    let temp = init_temp();
    let id = submit(&temp, "Crash", "Crash when saving");
    stdout(&temp, &["delete", &id]);
    assert!(list_ids(&temp, &[]).is_empty());
}

#[test]
fn classify_needs_no_project() {
    let temp = TempDir::new().unwrap();
    ff().args(["classify", "Login", "is", "slow"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Urgency: Medium"))
        .stdout(predicate::str::contains("Topic: Authentication"));
}
