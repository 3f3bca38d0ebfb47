// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CSV export of feedback records.

use chrono::SecondsFormat;
use std::borrow::Cow;

use crate::feedback::FeedbackRecord;

/// Header row of the export.
pub const CSV_HEADER: &str = "Title,Description,Category,Urgency,Priority,CreatedAt";

/// Quote a cell if it contains a comma, double quote or newline.
pub fn csv_cell(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn csv_row(record: &FeedbackRecord) -> String {
    let created_at = record
        .created_at
        .to_rfc3339_opts(SecondsFormat::Millis, true);
    let priority = record.priority.to_string();
    [
        record.title.as_str(),
        record.description.as_str(),
        record.category.as_str(),
        record.urgency.as_str(),
        priority.as_str(),
        created_at.as_str(),
    ]
    .iter()
    .map(|cell| csv_cell(cell))
    .collect::<Vec<_>>()
    .join(",")
}

/// Render records as CSV: header plus one row per record, joined by `\n`.
pub fn to_csv<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a FeedbackRecord>,
{
    std::iter::once(CSV_HEADER.to_string())
        .chain(records.into_iter().map(csv_row))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;
