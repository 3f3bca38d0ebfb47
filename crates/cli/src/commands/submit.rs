// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use ff_core::{
    Attachment, Category, ClockSource, FeedbackRecord, Storage, Store, Submission, Urgency,
    UserType,
};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use crate::validate::{
    validate_attachment_count, validate_description, validate_email, validate_tags,
    validate_title,
};

use super::filtering::parse_optional;
use super::open_store;

/// Raw submit arguments as entered on the command line.
#[derive(Debug, Clone, Default)]
pub struct SubmitArgs {
    pub title: String,
    pub description: String,
    pub category: String,
    pub email: Option<String>,
    pub user_type: Option<String>,
    pub tags: Vec<String>,
    pub attachments: Vec<String>,
    pub urgency: Option<String>,
}

#[derive(Serialize)]
struct SubmitJson<'a> {
    id: &'a str,
    urgency: Urgency,
    sentiment: ff_core::Sentiment,
    topic: ff_core::Topic,
    priority: u8,
}

pub fn run(args: SubmitArgs, output: OutputFormat) -> Result<()> {
    let (mut store, config, _) = open_store()?;
    let record = run_impl(&mut store, &config, args)?;
    print_submitted(&record, output)
}

/// Validate input, then classify and store the submission.
pub(crate) fn run_impl<S: Storage, C: ClockSource>(
    store: &mut Store<S, C>,
    config: &Config,
    args: SubmitArgs,
) -> Result<FeedbackRecord> {
    let title = validate_title(&args.title)?;
    let description = validate_description(&args.description)?;
    let category: Category = args.category.trim().parse()?;
    let urgency = parse_optional::<Urgency>(args.urgency.as_deref())?;
    let user_type =
        parse_optional::<UserType>(args.user_type.as_deref())?.unwrap_or(config.user_type);
    let email = validate_email(args.email.as_deref())?;
    let tags = validate_tags(&args.tags)?;
    validate_attachment_count(args.attachments.len())?;

    let submission = Submission {
        urgency,
        email,
        user_type,
        tags,
        attachments: args
            .attachments
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(Attachment::named)
            .collect(),
        ..Submission::new(title, description, category)
    };
    Ok(store.submit(submission)?.clone())
}

fn print_submitted(record: &FeedbackRecord, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Text => {
            println!(
                "Submitted {}: {} ({} urgency, {} sentiment, topic {})",
                record.id, record.title, record.urgency, record.sentiment, record.topic
            );
        }
        OutputFormat::Json => {
            let json = SubmitJson {
                id: &record.id,
                urgency: record.urgency,
                sentiment: record.sentiment,
                topic: record.topic,
                priority: record.priority,
            };
            println!("{}", serde_json::to_string(&json)?);
        }
        OutputFormat::Ids => println!("{}", record.id),
    }
    Ok(())
}

#[cfg(test)]
#[path = "submit_tests.rs"]
mod tests;
