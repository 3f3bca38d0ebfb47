// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use ff_core::{SqliteStorage, UserType};

use crate::config::{get_store_path, init_work_dir, write_gitignore, Config};
use crate::error::Result;

use super::filtering::parse_optional;

pub fn run(path: Option<String>, user_type: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    let work_dir = run_impl(&target_path, user_type.as_deref())?;
    println!("Initialized feedback project at {}", work_dir.display());
    Ok(())
}

/// Create `.feedbackflow/` under `target`, write config and create the store.
pub(crate) fn run_impl(target: &Path, user_type: Option<&str>) -> Result<PathBuf> {
    let config = Config {
        user_type: parse_optional::<UserType>(user_type)?.unwrap_or_default(),
        ..Config::default()
    };
    let work_dir = init_work_dir(target, &config)?;
    SqliteStorage::open(&get_store_path(&work_dir, &config))?;
    write_gitignore(&work_dir)?;
    tracing::debug!(path = %work_dir.display(), "initialized work dir");
    Ok(work_dir)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
