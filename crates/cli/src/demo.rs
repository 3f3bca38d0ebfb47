// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Demo dataset loaded by `ff demo`.
//!
//! Counters and optional fields that would otherwise need a random source
//! are derived from a hash of each record's id, so a given clock reading
//! always produces the same dataset.

use chrono::{DateTime, Duration, Utc};
use ff_core::id::{
    generate_unique_id, impact_from_id, FEEDBACK_PREFIX, ROADMAP_PREFIX, SURVEY_PREFIX,
};
use ff_core::{
    Attachment, Category, FeedbackRecord, Question, QuestionKind, RoadmapItem, RoadmapStatus,
    Sentiment, Status, Survey, Team, Topic, Urgency, UserType,
};
use sha2::{Digest, Sha256};

const DEMO_RESPONSE: &str =
    "Thank you for your feedback. We're working on this issue and will update you soon.";

struct SeedRow {
    title: &'static str,
    description: &'static str,
    category: Category,
    urgency: Urgency,
    status: Status,
    team: Team,
    sentiment: Sentiment,
    topic: Topic,
    email: &'static str,
    user_type: UserType,
    tags: &'static [&'static str],
}

macro_rules! seed {
    ($title:literal, $desc:literal, $cat:ident, $urg:ident, $status:ident, $team:ident,
     $sent:ident, $topic:ident, $email:literal, $user:ident, [$($tag:literal),*]) => {
        SeedRow {
            title: $title,
            description: $desc,
            category: Category::$cat,
            urgency: Urgency::$urg,
            status: Status::$status,
            team: Team::$team,
            sentiment: Sentiment::$sent,
            topic: Topic::$topic,
            email: $email,
            user_type: UserType::$user,
            tags: &[$($tag),*],
        }
    };
}

const SEED_ROWS: &[SeedRow] = &[
    seed!("Critical: Payment system down", "Complete payment processing failure affecting all transactions. Revenue impact estimated at $50k/day.",
        Bug, Critical, Open, Engineering, VeryNegative, Performance, "john@company.com", Customer, ["payment", "critical", "revenue"]),
    seed!("Security vulnerability in auth", "Potential data breach in user authentication system. Immediate attention required.",
        Security, Critical, Open, Engineering, VeryNegative, Security, "security@company.com", Enterprise, ["security", "auth", "breach"]),
    seed!("Checkout crashes after pay", "Crash occurs on submit impacting revenue path. Affects 15% of transactions.",
        Bug, High, InProgress, Engineering, Negative, Performance, "user@example.com", Customer, ["checkout", "crash", "payment"]),
    seed!("Dashboard loads slowly", "Graphs take 6-8s to render, affecting user experience and productivity.",
        Performance, Medium, Open, Engineering, Negative, Performance, "analyst@company.com", PowerUser, ["dashboard", "performance", "slow"]),
    seed!("Add dark mode", "Users request dark theme for late-night usage. Popular feature request.",
        Feature, Low, Open, Design, Positive, UiUx, "designer@company.com", PowerUser, ["dark-mode", "ui", "theme"]),
    seed!("Confusing onboarding flow", "New users struggle to complete setup process. 40% drop-off rate.",
        UxUi, Medium, InProgress, Design, Negative, UiUx, "newuser@example.com", Customer, ["onboarding", "ux", "new-users"]),
    seed!("Payment declined errors", "Multiple reports of card declines incorrectly. Affecting customer satisfaction.",
        Bug, High, Resolved, Support, Negative, Performance, "billing@company.com", Customer, ["payment", "declined", "billing"]),
    seed!("Improve accessibility", "Screen reader labels missing on settings page. WCAG compliance issue.",
        UxUi, Medium, Open, Design, Neutral, UiUx, "accessibility@company.com", Enterprise, ["accessibility", "wcag", "screen-reader"]),
    seed!("Export to PDF", "Finance team needs PDF invoice export functionality for accounting.",
        Feature, Low, Open, Product, Positive, Integration, "finance@company.com", Enterprise, ["export", "pdf", "finance"]),
    seed!("Mobile navigation issues", "Primary actions are hard to reach on small screens. Touch targets too small.",
        UxUi, Low, InProgress, Design, Negative, Mobile, "mobile@example.com", Customer, ["mobile", "navigation", "touch"]),
    seed!("Android 14 crash", "App crashes on launch after latest OS update. Affects 30% of Android users.",
        Bug, High, Open, Engineering, VeryNegative, Mobile, "android@example.com", Customer, ["android", "crash", "mobile"]),
    seed!("SSO integration request", "Enterprises request SSO sign-in options for better security and management.",
        Feature, Medium, Open, Product, Positive, Authentication, "enterprise@company.com", Enterprise, ["sso", "enterprise", "auth"]),
    seed!("Error messages unclear", "Copy is vague; users cannot self-serve effectively. Support ticket volume increased.",
        UxUi, Medium, Resolved, Design, Negative, UiUx, "support@company.com", Customer, ["error-messages", "copy", "support"]),
    seed!("Search performance issues", "Large datasets cause multi-second delays in search. User frustration high.",
        Performance, High, InProgress, Engineering, Negative, Performance, "search@example.com", PowerUser, ["search", "performance", "slow"]),
    seed!("Bulk edit functionality", "Ops team needs to update many records at once. Current process is manual.",
        Feature, Medium, Open, Product, Positive, Integration, "ops@company.com", Enterprise, ["bulk-edit", "ops", "efficiency"]),
    seed!("Duplicate notifications", "Some users receive duplicate push notifications. Notification fatigue.",
        Bug, Low, Closed, Engineering, Negative, Integration, "notifications@example.com", Customer, ["notifications", "duplicate", "push"]),
    seed!("Reports UX improvement", "Reports are powerful but hard to navigate. Learning curve too steep.",
        UxUi, Low, Open, Design, Neutral, UiUx, "analyst@company.com", PowerUser, ["reports", "ux", "navigation"]),
    seed!("Database optimization", "Query performance needs improvement for speed. Scalability concerns.",
        Performance, Medium, InProgress, Engineering, Neutral, Performance, "dba@company.com", Enterprise, ["database", "performance", "scalability"]),
    seed!("User feedback system", "Allow users to rate and comment on features. Community engagement feature.",
        Feature, Low, Open, Product, Positive, UiUx, "community@example.com", PowerUser, ["feedback", "rating", "community"]),
    seed!("API rate limiting", "Need to implement rate limiting for API endpoints. Security and cost control.",
        Security, Medium, Open, Engineering, Neutral, Security, "api@company.com", Enterprise, ["api", "rate-limiting", "security"]),
    seed!("Mobile responsive issues", "Layout breaks on tablet devices. Responsive design needs work.",
        UxUi, Medium, InProgress, Design, Negative, Mobile, "tablet@example.com", Customer, ["mobile", "responsive", "tablet"]),
    seed!("Data export feature", "Users need to export their data in various formats. GDPR compliance.",
        Feature, Low, Open, Product, Positive, Integration, "privacy@example.com", Enterprise, ["export", "data", "gdpr"]),
    seed!("Login timeout issues", "Users getting logged out too frequently. Session management problems.",
        Bug, Medium, Resolved, Engineering, Negative, Authentication, "session@example.com", Customer, ["login", "session", "timeout"]),
    seed!("Color contrast problems", "Text not readable for users with visual impairments. Accessibility issue.",
        UxUi, Medium, Open, Design, Negative, UiUx, "accessibility@company.com", Enterprise, ["color", "contrast", "accessibility"]),
    seed!("Backup system needed", "Critical data needs automated backup system. Disaster recovery planning.",
        Security, High, Open, Engineering, Neutral, Security, "infrastructure@company.com", Enterprise, ["backup", "disaster-recovery", "security"]),
    seed!("Multi-language support", "International users need localized interface. Global expansion requirement.",
        Feature, Low, Open, Product, Positive, Integration, "i18n@example.com", Enterprise, ["i18n", "localization", "global"]),
    seed!("Real-time collaboration", "Teams need to work together on documents simultaneously. Productivity feature.",
        Feature, Medium, Open, Product, Positive, Integration, "collaboration@company.com", Enterprise, ["collaboration", "real-time", "productivity"]),
    seed!("Advanced analytics", "Need deeper insights into user behavior and system performance.",
        Feature, Medium, Open, Product, Positive, Performance, "analytics@company.com", Enterprise, ["analytics", "insights", "performance"]),
    seed!("Voice commands", "Accessibility feature for hands-free operation. Assistive technology support.",
        Feature, Low, Open, Product, Positive, UiUx, "accessibility@company.com", Enterprise, ["voice", "accessibility", "assistive"]),
    seed!("Offline mode", "Application should work without internet connection. Reliability improvement.",
        Feature, Medium, Open, Product, Positive, Performance, "reliability@example.com", Enterprise, ["offline", "reliability", "performance"]),
];

/// Number of demo feedback records.
pub const DEMO_RECORD_COUNT: usize = SEED_ROWS.len();

/// Uniform value in `[0, 1)` derived from `id` and `salt`.
fn roll(id: &str, salt: &str) -> f64 {
    let hash = Sha256::digest(format!("{id}:{salt}").as_bytes());
    let word = u32::from_be_bytes([hash[0], hash[1], hash[2], hash[3]]);
    f64::from(word) / (f64::from(u32::MAX) + 1.0)
}

/// Whole number in `0..bound` derived from `id` and `salt`.
fn roll_below(id: &str, salt: &str, bound: u32) -> u32 {
    (roll(id, salt) * f64::from(bound)) as u32
}

/// Demo feedback, newest first; record `i` was created `i` hours before `now`.
pub fn demo_records(now: DateTime<Utc>) -> Vec<FeedbackRecord> {
    let mut records: Vec<FeedbackRecord> = Vec::with_capacity(DEMO_RECORD_COUNT);
    for (idx, row) in SEED_ROWS.iter().enumerate() {
        let offset = i64::try_from(idx).unwrap_or_default();
        let created_at = now - Duration::hours(offset);
        let id = generate_unique_id(FEEDBACK_PREFIX, row.title, &created_at, |candidate| {
            records.iter().any(|r| r.id == candidate)
        });

        let mut record = FeedbackRecord::new(
            id,
            row.title.to_string(),
            row.description.to_string(),
            row.category,
            row.urgency,
            created_at,
        );
        record.updated_at = now - Duration::minutes(30 * offset);
        record.status = row.status;
        record.assigned_team = row.team;
        record.sentiment = row.sentiment;
        record.topic = row.topic;
        record.email = Some(row.email.to_string());
        record.user_type = row.user_type;
        for tag in row.tags {
            record.add_tag(tag);
        }
        if roll(&record.id, "attachment") > 0.7 {
            record.attachments = vec![Attachment::named(format!("screenshot-{idx}.png"))];
        }
        if roll(&record.id, "response") > 0.8 {
            record.response = Some(DEMO_RESPONSE.to_string());
        }
        record.impact_score = impact_from_id(&record.id);
        record.votes = roll_below(&record.id, "votes", 50);
        record.views = roll_below(&record.id, "views", 200);
        records.push(record);
    }
    records
}

fn text_options(options: &[&str]) -> Vec<String> {
    options.iter().map(|o| o.to_string()).collect()
}

pub fn demo_surveys(now: DateTime<Utc>) -> Vec<Survey> {
    let nps_created = now - Duration::days(1);
    let features_created = now - Duration::days(2);
    let nps_scale: Vec<String> = (0..=10).map(|n| n.to_string()).collect();
    vec![
        Survey {
            id: generate_unique_id(SURVEY_PREFIX, "NPS Survey", &nps_created, |_| false),
            title: "NPS Survey".to_string(),
            description: "How likely are you to recommend our product?".to_string(),
            questions: vec![Question {
                id: 1,
                kind: QuestionKind::Scale,
                text: "Rate from 0-10".to_string(),
                options: nps_scale,
            }],
            is_active: true,
            created_at: nps_created,
        },
        Survey {
            id: generate_unique_id(
                SURVEY_PREFIX,
                "Feature Request Survey",
                &features_created,
                |_| false,
            ),
            title: "Feature Request Survey".to_string(),
            description: "What features would you like to see?".to_string(),
            questions: vec![
                Question {
                    id: 1,
                    kind: QuestionKind::Multiple,
                    text: "Select desired features".to_string(),
                    options: text_options(&[
                        "Dark Mode",
                        "Mobile App",
                        "API Access",
                        "Advanced Analytics",
                    ]),
                },
                Question {
                    id: 2,
                    kind: QuestionKind::Text,
                    text: "Additional suggestions".to_string(),
                    options: Vec::new(),
                },
            ],
            is_active: true,
            created_at: features_created,
        },
    ]
}

pub fn demo_roadmap(now: DateTime<Utc>) -> Vec<RoadmapItem> {
    let items = [
        ("Dark Mode", RoadmapStatus::Planned, "System-wide dark theme implementation", 45, "2024-03-15"),
        ("Mobile App", RoadmapStatus::InProgress, "Native mobile application development", 32, "2024-04-30"),
        ("API v2", RoadmapStatus::Planned, "Enhanced API with better performance", 28, "2024-05-15"),
        ("Advanced Analytics", RoadmapStatus::Completed, "Real-time analytics dashboard", 15, "2024-01-30"),
    ];
    items
        .into_iter()
        .map(|(title, status, description, votes, target)| RoadmapItem {
            id: generate_unique_id(ROADMAP_PREFIX, title, &now, |_| false),
            title: title.to_string(),
            description: description.to_string(),
            status,
            votes,
            target_date: Some(target.to_string()),
        })
        .collect()
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod tests;
