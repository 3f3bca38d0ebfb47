// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and list output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use ff_core::{Status, Urgency};

use crate::env;

/// ANSI 256-color codes
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;

    /// Urgency badges, least to most severe
    pub const LOW: u8 = 108;
    pub const MEDIUM: u8 = 179;
    pub const HIGH: u8 = 209;
    pub const CRITICAL: u8 = 196;

    /// Finished work (resolved/closed)
    pub const DONE: u8 = 71;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (default values, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

pub fn urgency_code(urgency: Urgency) -> u8 {
    match urgency {
        Urgency::Low => codes::LOW,
        Urgency::Medium => codes::MEDIUM,
        Urgency::High => codes::HIGH,
        Urgency::Critical => codes::CRITICAL,
    }
}

/// Urgency label, colored by severity when `colorize` is set.
pub fn urgency(urgency: Urgency, colorize: bool) -> String {
    if colorize {
        paint(urgency_code(urgency), urgency.as_str())
    } else {
        urgency.to_string()
    }
}

/// Status label; finished statuses are colored when `colorize` is set.
pub fn status(status: Status, colorize: bool) -> String {
    match status {
        Status::Resolved | Status::Closed if colorize => paint(codes::DONE, status.as_str()),
        _ => status.to_string(),
    }
}

/// Colorize an examples help block.
///
/// Lines ending with `:` become headers. In `  ff cmd args   Description`
/// lines the command part (before the first run of 2+ spaces) is a literal.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                return format!("{}{}", indent, header(trimmed));
            }
            match find_description_start(trimmed) {
                Some(end) => format!(
                    "{}{}{}",
                    indent,
                    literal(&trimmed[..end]),
                    &trimmed[end..]
                ),
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let start = line.find("  ")?;
    line[start..]
        .find(|c: char| c != ' ')
        .map(|_| start)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
