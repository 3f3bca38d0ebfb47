// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bulk actions over an explicit selection of feedback ids.
//!
//! Every id is resolved up front, so a typo aborts the whole action before
//! anything changes. An empty selection is a no-op.

use ff_core::{ClockSource, Storage, Store, Team};

use crate::error::Result;
use crate::validate::validate_export_path;

use super::export::write_csv;
use super::{open_store, resolve_ids};

fn report(count: usize, action: &str) {
    if count == 0 {
        println!("No feedback selected.");
    } else {
        println!("{} {} feedback", action, count);
    }
}

pub fn resolve(ids: &[String]) -> Result<()> {
    let (mut store, _, _) = open_store()?;
    report(resolve_impl(&mut store, ids)?, "Resolved");
    Ok(())
}

pub(crate) fn resolve_impl<S: Storage, C: ClockSource>(
    store: &mut Store<S, C>,
    ids: &[String],
) -> Result<usize> {
    let ids = resolve_ids(store, ids)?;
    Ok(store.bulk_resolve(&ids))
}

pub fn assign(team: &str, ids: &[String]) -> Result<()> {
    let (mut store, _, _) = open_store()?;
    let count = assign_impl(&mut store, team, ids)?;
    report(count, "Assigned");
    Ok(())
}

pub(crate) fn assign_impl<S: Storage, C: ClockSource>(
    store: &mut Store<S, C>,
    team: &str,
    ids: &[String],
) -> Result<usize> {
    let team: Team = team.trim().parse()?;
    let ids = resolve_ids(store, ids)?;
    Ok(store.bulk_assign(&ids, team))
}

pub fn delete(ids: &[String]) -> Result<()> {
    let (mut store, _, _) = open_store()?;
    report(delete_impl(&mut store, ids)?, "Deleted");
    Ok(())
}

pub(crate) fn delete_impl<S: Storage, C: ClockSource>(
    store: &mut Store<S, C>,
    ids: &[String],
) -> Result<usize> {
    let ids = resolve_ids(store, ids)?;
    Ok(store.bulk_delete(&ids))
}

pub fn export(output: &str, ids: &[String]) -> Result<()> {
    validate_export_path(output)?;
    let (store, _, _) = open_store()?;
    let count = export_impl(&store, output, ids)?;
    println!("Exported {} records to {}", count, output);
    Ok(())
}

/// Write the selected records, in list order, as CSV.
pub(crate) fn export_impl<S: Storage, C: ClockSource>(
    store: &Store<S, C>,
    output: &str,
    ids: &[String],
) -> Result<usize> {
    let ids = resolve_ids(store, ids)?;
    let selected = store.records().iter().filter(|r| ids.contains(&r.id));
    write_csv(output, selected)
}

#[cfg(test)]
#[path = "bulk_tests.rs"]
mod tests;
