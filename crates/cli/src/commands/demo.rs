// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ff_core::{ClockSource, Storage, Store};

use crate::demo::{demo_records, demo_roadmap, demo_surveys};
use crate::error::Result;

use super::open_store;

pub fn run() -> Result<()> {
    let (mut store, _, _) = open_store()?;
    let count = run_impl(&mut store);
    println!(
        "Loaded demo data: {} feedback, {} surveys, {} roadmap items",
        count,
        store.surveys().len(),
        store.roadmap().len()
    );
    Ok(())
}

/// Replace every collection with the demo dataset. Returns the record count.
pub(crate) fn run_impl<S: Storage, C: ClockSource>(store: &mut Store<S, C>) -> usize {
    let now = store.now();
    let records = demo_records(now);
    let count = records.len();
    store.replace_all(records, demo_surveys(now), demo_roadmap(now));
    tracing::info!(count, "loaded demo data");
    count
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod tests;
