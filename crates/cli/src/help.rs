// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let color = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = color(colors::codes::HEADER);
    let context = color(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(color(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

const FEEDBACK_COMMANDS: &[(&str, &str)] = &[
    ("submit", "Submit new feedback"),
    ("classify", "Preview detected labels for text"),
    ("list", "List feedback by priority"),
    ("show", "Show feedback details"),
    ("status", "Set feedback status"),
    ("assign", "Assign feedback to a team"),
    ("respond", "Record a response to feedback"),
    ("vote", "Upvote feedback"),
    ("delete", "Delete feedback"),
    ("bulk", "Resolve, assign, delete or export many"),
    ("stats", "Show the analytics dashboard"),
];

const PROJECT_COMMANDS: &[(&str, &str)] = &[
    ("init", "Initialize a feedback project"),
    ("export", "Export feedback to CSV"),
    ("demo", "Load the demo dataset"),
    ("roadmap", "Manage roadmap items"),
    ("survey", "List surveys"),
    ("user", "Show or set the current user"),
    ("completion", "Generate shell completions"),
];

fn command_section(title: &str, commands: &[(&str, &str)]) -> String {
    let mut lines = vec![colors::header(title)];
    for (name, about) in commands {
        // Pad before coloring so escape codes don't skew the alignment.
        lines.push(format!("  {}  {}", colors::literal(&format!("{name:<10}")), about));
    }
    lines.join("\n")
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "{}\n\n{}",
        command_section("Feedback:", FEEDBACK_COMMANDS),
        command_section("Project:", PROJECT_COMMANDS)
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  ff init                              Initialize a project
  ff submit \"Title\" \"What happened\"    Submit feedback
  ff list                              List feedback by priority
  ff stats                             Show the dashboard",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
