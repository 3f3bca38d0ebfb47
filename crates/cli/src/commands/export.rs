// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs::File;
use std::io::{BufWriter, Write};

use ff_core::csv::to_csv;
use ff_core::{ClockSource, FeedbackFilter, FeedbackRecord, Storage, Store};

use crate::cli::FilterArgs;
use crate::error::Result;
use crate::validate::validate_export_path;

use super::filtering::build_filter;
use super::open_store;

pub fn run(filepath: &str, filter: FilterArgs) -> Result<()> {
    // Validate export path
    validate_export_path(filepath)?;
    let filter = build_filter(&filter)?;

    let (store, _, _) = open_store()?;
    let count = run_impl(&store, filepath, &filter)?;
    println!("Exported {} records to {}", count, filepath);
    Ok(())
}

/// Export the filtered view, in list order, to `filepath`.
pub(crate) fn run_impl<S: Storage, C: ClockSource>(
    store: &Store<S, C>,
    filepath: &str,
    filter: &FeedbackFilter,
) -> Result<usize> {
    write_csv(filepath, store.filtered(filter))
}

/// Write records as CSV and return how many rows were written.
pub(crate) fn write_csv<'a, I>(filepath: &str, records: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a FeedbackRecord>,
{
    let records: Vec<&FeedbackRecord> = records.into_iter().collect();
    let file = File::create(filepath)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", to_csv(records.iter().copied()))?;
    writer.flush()?;
    tracing::debug!(path = filepath, rows = records.len(), "wrote csv export");
    Ok(records.len())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
