// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ff_core::{ClockSource, FeedbackRecord, Storage, Store};

use crate::cli::OutputFormat;
use crate::display::format_feedback_details;
use crate::error::{Error, Result};

use super::{open_store, resolve_ids};

pub fn run(ids: &[String], output: OutputFormat) -> Result<()> {
    let (mut store, _, _) = open_store()?;
    let records = run_impl(&mut store, ids)?;

    match output {
        OutputFormat::Json => {
            // One object per line (JSONL)
            for record in &records {
                println!("{}", serde_json::to_string(record)?);
            }
        }
        OutputFormat::Text => {
            let details: Vec<String> = records.iter().map(format_feedback_details).collect();
            println!("{}", details.join("\n\n"));
        }
        OutputFormat::Ids => {
            for record in &records {
                println!("{}", record.id);
            }
        }
    }
    Ok(())
}

/// Resolve every id, count a view on each and return the updated records.
pub(crate) fn run_impl<S: Storage, C: ClockSource>(
    store: &mut Store<S, C>,
    ids: &[String],
) -> Result<Vec<FeedbackRecord>> {
    let resolved = resolve_ids(store, ids)?;
    resolved
        .iter()
        .map(|id| {
            store.record_view(id);
            store
                .get(id)
                .cloned()
                .ok_or_else(|| Error::FeedbackNotFound(id.clone()))
        })
        .collect()
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
