// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::BTreeMap;
use std::fmt::Display;

use ff_core::{Analytics, Classification, FeedbackRecord, RoadmapItem, Survey};

use crate::colors;

/// Maximum line width for wrapped text content (excluding 4-space indent).
const WRAP_WIDTH: usize = 96;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Wrap text at word boundaries if it's a single line.
///
/// - If content contains newlines: return as-is (preserve user formatting)
/// - If content is single line >width: wrap at word boundaries
/// - If content is single line <=width: return as-is
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.len() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

fn indented(content: &str) -> Vec<String> {
    wrap_text(content, WRAP_WIDTH)
        .lines()
        .map(|line| format!("    {}", line))
        .collect()
}

/// Format a single feedback line for list output
pub fn format_feedback_line(record: &FeedbackRecord, colorize: bool) -> String {
    let team = match record.assigned_team {
        ff_core::Team::Unassigned => String::new(),
        team => format!(", @{}", team),
    };
    format!(
        "- [{}] ({}{}) {}: {}",
        colors::urgency(record.urgency, colorize),
        colors::status(record.status, colorize),
        team,
        record.id,
        record.title
    )
}

/// Format feedback details for the show command
pub fn format_feedback_details(record: &FeedbackRecord) -> String {
    let mut output = Vec::new();

    output.push(format!("[{}] {}", record.category, record.id));
    output.push(format!("Title: {}", record.title));
    output.push(format!("Status: {}", record.status));
    output.push(format!(
        "Urgency: {} (priority {}, score {:.1})",
        record.urgency,
        record.priority,
        record.priority_score()
    ));
    output.push(format!("Sentiment: {}", record.sentiment));
    output.push(format!("Topic: {}", record.topic));
    output.push(format!("Team: {}", record.assigned_team));
    output.push(format!("Submitted by: {}", record.user_type));
    if let Some(email) = &record.email {
        output.push(format!("Email: {}", email));
    }
    output.push(format!(
        "Created: {}",
        record.created_at.format(TIMESTAMP_FORMAT)
    ));
    output.push(format!(
        "Updated: {}",
        record.updated_at.format(TIMESTAMP_FORMAT)
    ));
    output.push(format!(
        "Impact: {}/10  Votes: {}  Views: {}",
        record.impact_score, record.votes, record.views
    ));
    if !record.tags.is_empty() {
        output.push(format!("Tags: {}", record.tags.join(", ")));
    }

    output.push(String::new());
    output.push("Description:".to_string());
    output.extend(indented(&record.description));

    if !record.attachments.is_empty() {
        output.push(String::new());
        output.push("Attachments:".to_string());
        for attachment in &record.attachments {
            let mut line = format!("  - {}", attachment.name);
            if let Some(size) = attachment.size {
                line.push_str(&format!(" ({} bytes)", size));
            }
            if let Some(content_type) = &attachment.content_type {
                line.push_str(&format!(" [{}]", content_type));
            }
            output.push(line);
        }
    }

    if let Some(response) = &record.response {
        output.push(String::new());
        output.push("Response:".to_string());
        output.extend(indented(response));
    }

    output.join("\n")
}

/// Format the detected labels for the classify command
pub fn format_classification(classification: &Classification) -> String {
    [
        format!("Urgency: {}", classification.urgency),
        format!("Priority: {}", classification.priority),
        format!("Sentiment: {}", classification.sentiment),
        format!("Topic: {}", classification.topic),
    ]
    .join("\n")
}

fn format_counts<K: Display>(title: &str, counts: &BTreeMap<K, usize>) -> Vec<String> {
    let mut lines = vec![format!("{}:", title)];
    if counts.is_empty() {
        lines.push("  (none)".to_string());
    }
    for (key, count) in counts {
        lines.push(format!("  {:<16}{}", key.to_string(), count));
    }
    lines
}

/// Format the analytics dashboard
pub fn format_stats(analytics: &Analytics) -> String {
    let mut output = vec![
        format!("Total: {}", analytics.total),
        format!("Critical: {}", analytics.critical_count),
        format!("Resolved: {}", analytics.resolved_count),
        format!(
            "Avg resolution: {:.1} days",
            analytics.avg_resolution_days
        ),
        format!("Avg sentiment: {:.2} / 5", analytics.avg_sentiment_score),
        format!("Avg impact: {:.1} / 10", analytics.avg_impact_score),
        format!(
            "Votes: {}  Views: {}",
            analytics.total_votes, analytics.total_views
        ),
    ];

    let sections = [
        format_counts("By category", &analytics.by_category),
        format_counts("By urgency", &analytics.by_urgency),
        format_counts("By status", &analytics.by_status),
        format_counts("By team", &analytics.by_team),
        format_counts("By sentiment", &analytics.by_sentiment),
        format_counts("By user type", &analytics.by_user_type),
        format_counts("By topic", &analytics.by_topic),
    ];
    for lines in sections {
        output.push(String::new());
        output.extend(lines);
    }

    output.join("\n")
}

/// Format a single roadmap line
pub fn format_roadmap_line(item: &RoadmapItem) -> String {
    let target = item
        .target_date
        .as_deref()
        .map(|d| format!(", target {}", d))
        .unwrap_or_default();
    format!(
        "- [{}] {}: {} ({} votes{})",
        item.status, item.id, item.title, item.votes, target
    )
}

/// Format a survey with its numbered questions
pub fn format_survey(survey: &Survey) -> String {
    let state = if survey.is_active { "active" } else { "inactive" };
    let mut output = vec![format!("{}: {} ({})", survey.id, survey.title, state)];
    if !survey.description.is_empty() {
        output.push(format!("  {}", survey.description));
    }
    for question in &survey.questions {
        let mut line = format!("  {}. [{}] {}", question.id, question.kind.as_str(), question.text);
        if !question.options.is_empty() {
            line.push_str(&format!(" ({})", question.options.join(", ")));
        }
        output.push(line);
    }
    output.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
