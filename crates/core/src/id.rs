// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Identifier generation and prefix resolution.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Prefix for feedback record IDs.
pub const FEEDBACK_PREFIX: &str = "fb";
/// Prefix for roadmap item IDs.
pub const ROADMAP_PREFIX: &str = "rm";
/// Prefix for survey IDs.
pub const SURVEY_PREFIX: &str = "sv";

/// Shortest partial ID accepted for prefix resolution.
const MIN_PARTIAL_LEN: usize = 3;

/// Generate an ID from prefix, title, and timestamp.
/// Format: {prefix}-{hash} where hash is first 8 hex chars of SHA256(title + timestamp)
pub fn generate_id(prefix: &str, title: &str, created_at: &DateTime<Utc>) -> String {
    let input = format!("{}{}", title, created_at.to_rfc3339());
    let hash = Sha256::digest(input.as_bytes());
    let short_hash = hex::encode(&hash[..4]);
    format!("{}-{}", prefix, short_hash)
}

/// Generate a unique ID, handling collisions by appending incrementing suffix.
pub fn generate_unique_id<F>(
    prefix: &str,
    title: &str,
    created_at: &DateTime<Utc>,
    exists: F,
) -> String
where
    F: Fn(&str) -> bool,
{
    let base_id = generate_id(prefix, title, created_at);

    if !exists(&base_id) {
        return base_id;
    }

    let mut suffix = 2;
    loop {
        let id = format!("{}-{}", base_id, suffix);
        if !exists(&id) {
            return id;
        }
        suffix += 1;
    }
}

/// Derive a stable 1-10 impact score from an ID.
pub fn impact_from_id(id: &str) -> u8 {
    let hash = Sha256::digest(id.as_bytes());
    hash[0] % 10 + 1
}

/// Resolve a full or partial ID against the known IDs.
///
/// An exact match always wins. Otherwise the partial ID must be at least
/// three characters and prefix exactly one known ID.
pub fn resolve_prefix<'a, I>(partial_id: &str, known: I) -> Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let known: Vec<&str> = known.into_iter().collect();
    if known.contains(&partial_id) {
        return Ok(partial_id.to_string());
    }
    if partial_id.len() < MIN_PARTIAL_LEN {
        return Err(Error::FeedbackNotFound(partial_id.to_string()));
    }

    let matches: Vec<String> = known
        .into_iter()
        .filter(|id| id.starts_with(partial_id))
        .map(str::to_string)
        .collect();

    match matches.len() {
        0 => Err(Error::FeedbackNotFound(partial_id.to_string())),
        1 => Ok(matches.into_iter().next().unwrap_or_default()),
        _ => Err(Error::AmbiguousId {
            prefix: partial_id.to_string(),
            matches,
        }),
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
