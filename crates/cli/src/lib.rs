// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! fflow - local feedback intake and triage.
//!
//! This crate provides the `ff` CLI on top of [`ff_core`]: submissions are
//! classified by keyword, kept in a project-local SQLite store, and can be
//! filtered, bulk-edited, summarized and exported to CSV.
//!
//! # Initialization
//!
//! Use [`init_work_dir`] to create a new `.feedbackflow/` directory, then
//! open the store:
//!
//! ```rust,ignore
//! use fflow::{find_work_dir, get_store_path, init_work_dir, Config};
//! use ff_core::{SqliteStorage, Store};
//!
//! let work_dir = init_work_dir(Path::new("."), &Config::default())?;
//!
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let store = Store::open(SqliteStorage::open(&get_store_path(&work_dir, &config))?);
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod config;
mod demo;
mod display;
pub mod env;
pub mod error;
pub mod help;
mod validate;

pub use cli::{
    BulkCommand, Cli, Command, FilterArgs, LimitArgs, OutputFormat, RoadmapCommand,
    SurveyCommand, UserCommand,
};
pub use commands::submit::SubmitArgs;
pub use config::{find_work_dir, get_store_path, init_work_dir, Config};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Submit {
            title,
            description,
            category,
            email,
            user_type,
            tag,
            attach,
            urgency,
            output,
        } => commands::submit::run(
            SubmitArgs {
                title,
                description,
                category,
                email,
                user_type,
                tags: tag,
                attachments: attach,
                urgency,
            },
            output,
        ),
        Command::Classify { text, output } => commands::classify::run(&text, output),
        Command::List {
            filter,
            limits,
            output,
        } => commands::list::run(filter, limits, output),
        Command::Show { ids, output } => commands::show::run(&ids, output),
        Command::Status { id, status } => commands::edit::status(&id, &status),
        Command::Assign { id, team } => commands::edit::assign(&id, &team),
        Command::Respond { id, text } => commands::edit::respond(&id, &text),
        Command::Vote { id } => commands::edit::vote(&id),
        Command::Delete { id } => commands::edit::delete(&id),
        Command::Bulk(cmd) => match cmd {
            BulkCommand::Resolve { ids } => commands::bulk::resolve(&ids),
            BulkCommand::Assign { team, ids } => commands::bulk::assign(&team, &ids),
            BulkCommand::Delete { ids } => commands::bulk::delete(&ids),
            BulkCommand::Export { output, ids } => commands::bulk::export(&output, &ids),
        },
        Command::Stats { output } => commands::stats::run(output),
        Command::Init { path, user_type } => commands::init::run(path, user_type),
        Command::Export { filepath, filter } => commands::export::run(&filepath, filter),
        Command::Demo => commands::demo::run(),
        Command::Roadmap(cmd) => match cmd {
            RoadmapCommand::List { output } => commands::roadmap::list(output),
            RoadmapCommand::Add {
                title,
                description,
                target,
            } => commands::roadmap::add(&title, &description, target),
            RoadmapCommand::Vote { id } => commands::roadmap::vote(&id),
        },
        Command::Survey(cmd) => match cmd {
            SurveyCommand::List { output } => commands::survey::list(output),
        },
        Command::User(cmd) => match cmd {
            UserCommand::Show => commands::user::show(),
            UserCommand::Set { user_type, name } => commands::user::set(&user_type, name),
        },
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "ff", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
