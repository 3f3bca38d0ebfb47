// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{FilterArgs, LimitArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    #[value(alias = "id")]
    Ids,
}

#[derive(Parser)]
#[command(name = "ff")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Local feedback intake and triage with keyword classification")]
#[command(
    long_about = "Local feedback intake and triage.\n\n\
    Submitted feedback is labeled with urgency, sentiment and topic by keyword \
    matching, stored in a project-local database, and can be filtered, bulk-edited, \
    summarized and exported to CSV."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Feedback
    // ─────────────────────────────────────────────────────────────────────────
    /// Submit new feedback
    ///
    /// Urgency, sentiment and topic are detected from the description.
    #[command(after_help = colors::examples("\
Examples:
  ff submit \"Checkout crash\" \"App crashes on pay\"       Submit a bug
  ff submit \"Dark mode\" \"Please add it\" -c feature      Submit a feature request
  ff submit \"Slow\" \"Reports are slow\" --tag reports     Tag the submission
  ff submit \"Outage\" \"Site down\" --urgency critical     Override detected urgency"))]
    Submit {
        /// Short summary
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Full description; classification runs on this text
        #[arg(value_parser = non_empty_string)]
        description: String,

        /// Category (bug, feature, improvement, security, performance, ux/ui, integration, documentation)
        #[arg(long, short, default_value = "bug")]
        category: String,

        /// Contact email
        #[arg(long, short)]
        email: Option<String>,

        /// Submitter type (defaults to the configured user_type)
        #[arg(long)]
        user_type: Option<String>,

        /// Tag(s) to add (comma-separated or repeated)
        #[arg(long, short, value_delimiter = ',')]
        tag: Vec<String>,

        /// Attachment file name(s)
        #[arg(long)]
        attach: Vec<String>,

        /// Override the detected urgency
        #[arg(long, short)]
        urgency: Option<String>,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the labels that would be detected for some text
    #[command(after_help = colors::examples("\
Examples:
  ff classify \"Login fails after reset\"      Preview urgency, sentiment and topic
  ff classify -o json \"Love the new design\"  Output as JSON"))]
    Classify {
        /// Text to classify (multiple words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List feedback, highest priority first
    #[command(after_help = colors::examples("\
Examples:
  ff list                          List all feedback
  ff list -u critical              Only critical feedback
  ff list -s open -t engineering   Open feedback for engineering
  ff list -q payment               Search title, description and tags
  ff list --with-attachments       Only feedback with attachments
  ff list -n 5 -o json             Top five as JSON"))]
    List {
        #[command(flatten)]
        filter: FilterArgs,

        #[command(flatten)]
        limits: LimitArgs,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show feedback details (counts as a view)
    #[command(arg_required_else_help = true)]
    Show {
        /// Feedback ID(s); unique prefixes are accepted
        #[arg(required = true)]
        ids: Vec<String>,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Set the status of feedback
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  ff status fb-1a2b in_progress   Start work
  ff status fb-1a2b resolved      Mark resolved")
    )]
    Status {
        /// Feedback ID
        id: String,

        /// New status (open, in_progress, resolved, closed)
        status: String,
    },

    /// Assign feedback to a team
    #[command(arg_required_else_help = true)]
    Assign {
        /// Feedback ID
        id: String,

        /// Team (engineering, product, design, support, marketing, sales, unassigned)
        team: String,
    },

    /// Record a response to feedback
    #[command(arg_required_else_help = true)]
    Respond {
        /// Feedback ID
        id: String,

        /// Response text; empty text clears the response
        text: String,
    },

    /// Upvote feedback
    #[command(arg_required_else_help = true)]
    Vote {
        /// Feedback ID
        id: String,
    },

    /// Delete feedback permanently
    #[command(arg_required_else_help = true)]
    Delete {
        /// Feedback ID
        id: String,
    },

    /// Apply an action to many feedback records at once
    #[command(subcommand)]
    Bulk(BulkCommand),

    /// Show the analytics dashboard
    Stats {
        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Project
    // ─────────────────────────────────────────────────────────────────────────
    /// Initialize a feedback project in the current directory
    Init {
        /// Directory to initialize (defaults to the current directory)
        #[arg(long)]
        path: Option<String>,

        /// Default submitter type for this project
        #[arg(long)]
        user_type: Option<String>,
    },

    /// Export feedback to CSV
    #[command(after_help = colors::examples("\
Examples:
  ff export feedback.csv                 Export everything
  ff export critical.csv -u critical     Export only critical feedback"))]
    Export {
        /// Output file path
        filepath: String,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Replace all feedback, surveys and roadmap items with demo data
    Demo,

    /// Manage roadmap items
    #[command(subcommand)]
    Roadmap(RoadmapCommand),

    /// Inspect surveys
    #[command(subcommand)]
    Survey(SurveyCommand),

    /// Show or set the current user
    #[command(subcommand)]
    User(UserCommand),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Bulk actions over a selection of feedback IDs.
#[derive(Subcommand)]
pub enum BulkCommand {
    /// Mark every selected record resolved
    Resolve {
        /// Feedback ID(s)
        ids: Vec<String>,
    },

    /// Assign every selected record to a team
    #[command(after_help = colors::examples("\
Examples:
  ff bulk assign --team design fb-1a2b fb-3c4d   Assign two records to design"))]
    Assign {
        /// Team to assign
        #[arg(long, short)]
        team: String,

        /// Feedback ID(s)
        ids: Vec<String>,
    },

    /// Delete every selected record
    Delete {
        /// Feedback ID(s)
        ids: Vec<String>,
    },

    /// Export the selected records to CSV
    Export {
        /// Output file path
        #[arg(long, short = 'o')]
        output: String,

        /// Feedback ID(s)
        ids: Vec<String>,
    },
}

/// Roadmap commands.
#[derive(Subcommand)]
pub enum RoadmapCommand {
    /// List roadmap items, most votes first
    List {
        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Add a planned roadmap item
    #[command(after_help = colors::examples("\
Examples:
  ff roadmap add \"Offline mode\" -d \"Work without network\" --target 2024-09-01"))]
    Add {
        /// Item title
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Item description
        #[arg(long, short, default_value = "")]
        description: String,

        /// Target date, e.g. 2024-09-01
        #[arg(long)]
        target: Option<String>,
    },

    /// Upvote a roadmap item
    Vote {
        /// Roadmap item ID
        id: String,
    },
}

/// Survey commands.
#[derive(Subcommand)]
pub enum SurveyCommand {
    /// List surveys and their questions
    List {
        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },
}

/// Current user commands.
#[derive(Subcommand)]
pub enum UserCommand {
    /// Show the current user
    Show,

    /// Set the current user type and optionally the name
    Set {
        /// User type (guest, customer, power_user, enterprise, admin)
        user_type: String,

        /// Display name
        #[arg(long)]
        name: Option<String>,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
