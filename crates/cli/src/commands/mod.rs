// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod bulk;
pub mod classify;
pub mod demo;
pub mod edit;
pub mod export;
pub mod filtering;
pub mod init;
pub mod list;
pub mod roadmap;
pub mod show;
pub mod stats;
pub mod submit;
pub mod survey;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod user;

use std::path::PathBuf;

use ff_core::{ClockSource, SqliteStorage, Storage, Store};

use crate::config::{find_work_dir, get_store_path, Config};
use crate::error::Result;

/// The store every command runs against outside of tests.
pub type FeedbackStore = Store<SqliteStorage>;

/// Helper to open the store from the current context.
pub fn open_store() -> Result<(FeedbackStore, Config, PathBuf)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let store_path = get_store_path(&work_dir, &config);
    let storage = SqliteStorage::open(&store_path)?;
    Ok((Store::open(storage), config, work_dir))
}

/// Resolve every id (full or unique prefix), failing on the first bad one.
pub(crate) fn resolve_ids<S: Storage, C: ClockSource>(
    store: &Store<S, C>,
    ids: &[String],
) -> Result<Vec<String>> {
    ids.iter()
        .map(|id| store.resolve_id(id).map_err(Into::into))
        .collect()
}
