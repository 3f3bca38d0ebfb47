// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` by every command that
//! selects feedback through the filter engine.

use clap::Args;

/// Feedback filter arguments. Every field left unset matches anything.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Filter by category (bug, feature, improvement, security, performance, ux/ui, ...)
    #[arg(long, short)]
    pub category: Option<String>,

    /// Filter by urgency (low, medium, high, critical)
    #[arg(long, short)]
    pub urgency: Option<String>,

    /// Filter by status (open, in_progress, resolved, closed)
    #[arg(long, short)]
    pub status: Option<String>,

    /// Filter by assigned team (engineering, product, design, ..., unassigned)
    #[arg(long, short)]
    pub team: Option<String>,

    /// Filter by detected sentiment (very_negative ... very_positive)
    #[arg(long)]
    pub sentiment: Option<String>,

    /// Filter by submitter type (guest, customer, power_user, enterprise, admin)
    #[arg(long)]
    pub user_type: Option<String>,

    /// Case-insensitive text search over title, description and tags
    #[arg(long, short = 'q', default_value = "")]
    pub search: String,

    /// Only feedback with attachments
    #[arg(long, conflicts_with = "without_attachments")]
    pub with_attachments: bool,

    /// Only feedback without attachments
    #[arg(long, conflicts_with = "with_attachments")]
    pub without_attachments: bool,
}

/// Limit arguments for long result lists.
#[derive(Args, Clone, Debug, Default)]
pub struct LimitArgs {
    /// Maximum number of results
    #[arg(short = 'n', long, conflicts_with = "no_limit")]
    pub limit: Option<usize>,

    /// Ignore the configured list_limit
    #[arg(long, conflicts_with = "limit")]
    pub no_limit: bool,
}
