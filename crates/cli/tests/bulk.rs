// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

mod common;
use common::*;

fn three(temp: &TempDir) -> Vec<String> {
    vec![
        submit(temp, "One", "First report"),
        submit(temp, "Two", "Second report"),
        submit(temp, "Three", "Third report"),
    ]
}

#[test]
fn bulk_resolve_selection() {
    let temp = init_temp();
    let ids = three(&temp);
    ff().args(["bulk", "resolve", &ids[0], &ids[1]])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Resolved 2 feedback"));

    let mut resolved = list_ids(&temp, &["-s", "resolved"]);
    resolved.sort();
    let mut expected = ids[..2].to_vec();
    expected.sort();
    assert_eq!(resolved, expected);
}

#[test]
fn bulk_assign_selection() {
    let temp = init_temp();
    let ids = three(&temp);
    stdout(&temp, &["bulk", "assign", "--team", "design", &ids[2]]);
    assert_eq!(list_ids(&temp, &["-t", "design"]), vec![ids[2].clone()]);
}

#[test]
fn bulk_delete_selection() {
    let temp = init_temp();
    let ids = three(&temp);
    stdout(&temp, &["bulk", "delete", &ids[0], &ids[2]]);
    assert_eq!(list_ids(&temp, &[]), vec![ids[1].clone()]);
}

#[test]
fn bulk_with_empty_selection_is_noop() {
    let temp = init_temp();
    three(&temp);
    ff().args(["bulk", "resolve"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No feedback selected."));
    assert!(list_ids(&temp, &["-s", "resolved"]).is_empty());
}

#[test]
fn bulk_export_selection() {
    let temp = init_temp();
    let ids = three(&temp);
    let path = temp.path().join("selected.csv");
    ff().args(["bulk", "export", "-o"])
        .arg(&path)
        .arg(&ids[1])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 records"));

    let csv = std::fs::read_to_string(&path).unwrap();
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.lines().nth(1).unwrap().starts_with("Two,Second report,Bug,Low,1,"));
}
