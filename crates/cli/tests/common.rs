// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn ff() -> Command {
    let mut cmd = cargo_bin_cmd!("ff");
    cmd.env("NO_COLOR", "1").env_remove("FF_LOG");
    cmd
}

/// Helper to create an initialized temp directory
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    ff().arg("init").current_dir(temp.path()).assert().success();
    temp
}

/// Run a command in `temp` and return its trimmed stdout.
pub fn stdout(temp: &TempDir, args: &[&str]) -> String {
    let output = ff().args(args).current_dir(temp.path()).output().unwrap();
    assert!(
        output.status.success(),
        "ff {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Helper to submit feedback and return its ID
pub fn submit(temp: &TempDir, title: &str, description: &str) -> String {
    stdout(temp, &["submit", title, description, "-o", "ids"])
}

/// IDs printed by `ff list -o ids` with extra arguments.
pub fn list_ids(temp: &TempDir, extra: &[&str]) -> Vec<String> {
    let mut args = vec!["list", "-o", "ids"];
    args.extend_from_slice(extra);
    stdout(temp, &args)
        .lines()
        .map(str::to_string)
        .collect()
}
