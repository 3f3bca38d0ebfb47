// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_bulk_resolve_allows_empty_selection() {
    let cli = parse(&["ff", "bulk", "resolve"]).unwrap();
    match cli.command {
        Command::Bulk(BulkCommand::Resolve { ids }) => assert!(ids.is_empty()),
        _ => panic!("Expected bulk resolve"),
    }
}

#[test]
fn test_bulk_assign_requires_team() {
    assert!(parse(&["ff", "bulk", "assign", "fb-1"]).is_err());

    let cli = parse(&["ff", "bulk", "assign", "--team", "design", "fb-1", "fb-2"]).unwrap();
    match cli.command {
        Command::Bulk(BulkCommand::Assign { team, ids }) => {
            assert_eq!(team, "design");
            assert_eq!(ids, vec!["fb-1", "fb-2"]);
        }
        _ => panic!("Expected bulk assign"),
    }
}

#[test]
fn test_bulk_export_requires_output() {
    assert!(parse(&["ff", "bulk", "export", "fb-1"]).is_err());

    let cli = parse(&["ff", "bulk", "export", "-o", "sel.csv", "fb-1"]).unwrap();
    match cli.command {
        Command::Bulk(BulkCommand::Export { output, ids }) => {
            assert_eq!(output, "sel.csv");
            assert_eq!(ids, vec!["fb-1"]);
        }
        _ => panic!("Expected bulk export"),
    }
}

#[test]
fn test_user_set_parses_name() {
    let cli = parse(&["ff", "user", "set", "admin", "--name", "Dana"]).unwrap();
    match cli.command {
        Command::User(UserCommand::Set { user_type, name }) => {
            assert_eq!(user_type, "admin");
            assert_eq!(name.as_deref(), Some("Dana"));
        }
        _ => panic!("Expected user set"),
    }
}

#[test]
fn test_cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
