// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::error::{Error, Result};

// Input length limits
pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_DESCRIPTION_LENGTH: usize = 10_000;
pub const MAX_RESPONSE_LENGTH: usize = 5_000;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_TAG_LENGTH: usize = 50;
pub const MAX_TAGS_PER_FEEDBACK: usize = 20;
pub const MAX_ATTACHMENTS_PER_FEEDBACK: usize = 10;

fn check_length(field: &'static str, value: &str, max: usize) -> Result<()> {
    if value.len() > max {
        return Err(Error::FieldTooLong {
            field,
            actual: value.len(),
            max,
        });
    }
    Ok(())
}

/// Trim a required single-line field and check it is non-empty and short enough.
fn required(field: &'static str, value: &str, max: usize) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldEmpty { field });
    }
    check_length(field, trimmed, max)?;
    Ok(trimmed.to_string())
}

pub fn validate_title(title: &str) -> Result<String> {
    required("Title", title, MAX_TITLE_LENGTH)
}

pub fn validate_description(description: &str) -> Result<String> {
    required("Description", description, MAX_DESCRIPTION_LENGTH)
}

/// Validate a response. Blank text is allowed and clears the response.
pub fn validate_response(response: &str) -> Result<String> {
    let trimmed = response.trim();
    check_length("Response", trimmed, MAX_RESPONSE_LENGTH)?;
    Ok(trimmed.to_string())
}

/// Validate an optional contact email. Blank input means no email.
pub fn validate_email(email: Option<&str>) -> Result<Option<String>> {
    let Some(email) = email.map(str::trim).filter(|e| !e.is_empty()) else {
        return Ok(None);
    };
    check_length("Email", email, MAX_EMAIL_LENGTH)?;

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(Error::InvalidEmail(email.to_string()));
    }
    Ok(Some(email.to_string()))
}

/// Validate tags, trimming each and dropping blanks.
pub fn validate_tags(tags: &[String]) -> Result<Vec<String>> {
    let tags: Vec<String> = tags
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    if tags.len() > MAX_TAGS_PER_FEEDBACK {
        return Err(Error::TooMany {
            field: "tags",
            max: MAX_TAGS_PER_FEEDBACK,
        });
    }
    for tag in &tags {
        check_length("Tag", tag, MAX_TAG_LENGTH)?;
    }
    Ok(tags)
}

pub fn validate_attachment_count(count: usize) -> Result<()> {
    if count > MAX_ATTACHMENTS_PER_FEEDBACK {
        return Err(Error::TooMany {
            field: "attachments",
            max: MAX_ATTACHMENTS_PER_FEEDBACK,
        });
    }
    Ok(())
}

/// Validate an export file path
pub fn validate_export_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(Error::ExportPathEmpty);
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
