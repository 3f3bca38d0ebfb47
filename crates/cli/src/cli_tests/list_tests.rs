// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use yare::parameterized;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_list_default() {
    let cli = parse(&["ff", "list"]).unwrap();
    match cli.command {
        Command::List {
            filter,
            limits,
            output,
        } => {
            assert!(filter.category.is_none());
            assert!(filter.search.is_empty());
            assert!(!filter.with_attachments);
            assert!(limits.limit.is_none());
            assert_eq!(output, OutputFormat::Text);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_list_filters() {
    let cli = parse(&[
        "ff", "list", "-c", "bug", "-u", "high", "-s", "open", "-t", "support", "--sentiment",
        "negative", "--user-type", "customer", "-q", "pay", "--without-attachments",
    ])
    .unwrap();
    match cli.command {
        Command::List { filter, .. } => {
            assert_eq!(filter.category.as_deref(), Some("bug"));
            assert_eq!(filter.urgency.as_deref(), Some("high"));
            assert_eq!(filter.status.as_deref(), Some("open"));
            assert_eq!(filter.team.as_deref(), Some("support"));
            assert_eq!(filter.sentiment.as_deref(), Some("negative"));
            assert_eq!(filter.user_type.as_deref(), Some("customer"));
            assert_eq!(filter.search, "pay");
            assert!(filter.without_attachments);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_list_attachment_flags_conflict() {
    assert!(parse(&["ff", "list", "--with-attachments", "--without-attachments"]).is_err());
}

#[test]
fn test_list_limit_flags_conflict() {
    assert!(parse(&["ff", "list", "-n", "3", "--no-limit"]).is_err());
}

#[parameterized(
    text = { "text", OutputFormat::Text },
    json = { "json", OutputFormat::Json },
    ids = { "ids", OutputFormat::Ids },
    id_alias = { "id", OutputFormat::Ids },
)]
fn test_list_output_format(value: &str, expected: OutputFormat) {
    let cli = parse(&["ff", "list", "-o", value]).unwrap();
    match cli.command {
        Command::List { output, .. } => assert_eq!(output, expected),
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_export_takes_filters() {
    let cli = parse(&["ff", "export", "out.csv", "-u", "critical"]).unwrap();
    match cli.command {
        Command::Export { filepath, filter } => {
            assert_eq!(filepath, "out.csv");
            assert_eq!(filter.urgency.as_deref(), Some("critical"));
        }
        _ => panic!("Expected Export command"),
    }
}
