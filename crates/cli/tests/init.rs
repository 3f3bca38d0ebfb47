// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

mod common;
use common::*;

#[test]
fn creates_work_dir() {
    let temp = TempDir::new().unwrap();

    ff().arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized feedback project"));

    assert!(temp.path().join(".feedbackflow/config.toml").exists());
    assert!(temp.path().join(".feedbackflow/feedback.db").exists());
    assert!(temp.path().join(".feedbackflow/.gitignore").exists());
}

#[test]
fn fails_if_already_initialized() {
    let temp = init_temp();
    ff().arg("init")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn init_with_path_flag() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("project");
    std::fs::create_dir_all(&target).unwrap();

    ff().args(["init", "--path"])
        .arg(&target)
        .assert()
        .success();
    assert!(target.join(".feedbackflow/config.toml").exists());
}

#[test]
fn commands_fail_outside_a_project() {
    let temp = TempDir::new().unwrap();
    ff().arg("list")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("run 'ff init' first"));
}

#[test]
fn commands_work_from_subdirectory() {
    let temp = init_temp();
    let nested = temp.path().join("a/b");
    std::fs::create_dir_all(&nested).unwrap();
    ff().arg("list").current_dir(&nested).assert().success();
}

#[test]
fn configured_user_type_applies_to_submissions() {
    let temp = TempDir::new().unwrap();
    ff().args(["init", "--user-type", "enterprise"])
        .current_dir(temp.path())
        .assert()
        .success();
    let id = submit(&temp, "SSO", "Please add SSO");
    let json = stdout(&temp, &["show", &id, "-o", "json"]);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["userType"], "Enterprise");
}
