// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use ff_core::{
    Category, ClockSource, FeedbackFilter, FeedbackRecord, Sentiment, Status, Storage, Store,
    Team, Topic, Urgency,
};

use crate::cli::{FilterArgs, LimitArgs, OutputFormat};
use crate::colors;
use crate::config::Config;
use crate::display::format_feedback_line;
use crate::error::Result;

use super::filtering::build_filter;
use super::open_store;

/// JSON representation of a record for list output.
#[derive(Serialize)]
struct ListFeedbackJson<'a> {
    id: &'a str,
    title: &'a str,
    category: Category,
    urgency: Urgency,
    priority: u8,
    status: Status,
    team: Team,
    sentiment: Sentiment,
    topic: Topic,
    tags: &'a [String],
    votes: u32,
}

/// JSON output structure for the list command.
#[derive(Serialize)]
struct ListOutputJson<'a> {
    feedback: Vec<ListFeedbackJson<'a>>,
    #[serde(skip_serializing_if = "FeedbackFilter::is_empty")]
    filters_applied: &'a FeedbackFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
}

pub fn run(filter: FilterArgs, limits: LimitArgs, output: OutputFormat) -> Result<()> {
    let (store, config, _) = open_store()?;
    let filter = build_filter(&filter)?;
    let limit = effective_limit(&limits, &config);
    let records = run_impl(&store, &filter, limit);

    match output {
        OutputFormat::Text => {
            if records.is_empty() {
                println!("No feedback found.");
            }
            let colorize = colors::should_colorize();
            for record in &records {
                println!("{}", format_feedback_line(record, colorize));
            }
        }
        OutputFormat::Json => {
            let json = ListOutputJson {
                feedback: records.iter().map(|r| to_json(r)).collect(),
                filters_applied: &filter,
                limit,
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Ids => {
            for record in &records {
                println!("{}", record.id);
            }
        }
    }
    Ok(())
}

/// `--limit` wins, `--no-limit` disables the configured cap.
pub(crate) fn effective_limit(limits: &LimitArgs, config: &Config) -> Option<usize> {
    match (limits.limit, limits.no_limit) {
        (Some(limit), _) => Some(limit),
        (None, true) => None,
        (None, false) => config.list_limit,
    }
}

/// Matching records, highest priority first, truncated to `limit`.
pub(crate) fn run_impl<'a, S: Storage, C: ClockSource>(
    store: &'a Store<S, C>,
    filter: &FeedbackFilter,
    limit: Option<usize>,
) -> Vec<&'a FeedbackRecord> {
    let mut records = store.filtered(filter);
    if let Some(limit) = limit {
        records.truncate(limit);
    }
    records
}

fn to_json(record: &FeedbackRecord) -> ListFeedbackJson<'_> {
    ListFeedbackJson {
        id: &record.id,
        title: &record.title,
        category: record.category,
        urgency: record.urgency,
        priority: record.priority,
        status: record.status,
        team: record.assigned_team,
        sentiment: record.sentiment,
        topic: record.topic,
        tags: &record.tags,
        votes: record.votes,
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
