// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Conversion of CLI filter flags into a [`FeedbackFilter`].
//!
//! Shared by the list and export commands.

use std::str::FromStr;

use ff_core::FeedbackFilter;

use crate::cli::FilterArgs;
use crate::error::{Error, Result};

/// Parse an optional label, treating blank input as unset.
pub(crate) fn parse_optional<T>(value: Option<&str>) -> Result<Option<T>>
where
    T: FromStr<Err = ff_core::Error>,
{
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v.parse::<T>().map(Some).map_err(Error::from),
        None => Ok(None),
    }
}

/// Build a filter from command-line flags, rejecting unknown labels.
pub(crate) fn build_filter(args: &FilterArgs) -> Result<FeedbackFilter> {
    let has_attachments = match (args.with_attachments, args.without_attachments) {
        (true, false) => Some(true),
        (false, true) => Some(false),
        _ => None,
    };
    Ok(FeedbackFilter {
        category: parse_optional(args.category.as_deref())?,
        urgency: parse_optional(args.urgency.as_deref())?,
        status: parse_optional(args.status.as_deref())?,
        team: parse_optional(args.team.as_deref())?,
        sentiment: parse_optional(args.sentiment.as_deref())?,
        user_type: parse_optional(args.user_type.as_deref())?,
        search: args.search.trim().to_string(),
        has_attachments,
    })
}

#[cfg(test)]
#[path = "filtering_tests.rs"]
mod tests;
