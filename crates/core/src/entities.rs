// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Secondary entities kept alongside feedback: surveys, roadmap items and
//! the current user. They are stored and passed through unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::feedback::{fold_label, UserType};

/// How a survey question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Pick one option on a numeric scale.
    Scale,
    /// Pick any number of options.
    Multiple,
    /// Free text.
    Text,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Scale => "scale",
            QuestionKind::Multiple => "multiple",
            QuestionKind::Text => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// Delivery state of a roadmap item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoadmapStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
}

impl RoadmapStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoadmapStatus::Planned => "Planned",
            RoadmapStatus::InProgress => "In Progress",
            RoadmapStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for RoadmapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoadmapStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match fold_label(s).as_str() {
            "planned" => Ok(RoadmapStatus::Planned),
            "in progress" => Ok(RoadmapStatus::InProgress),
            "completed" => Ok(RoadmapStatus::Completed),
            _ => Err(Error::InvalidRoadmapStatus(s.to_string())),
        }
    }
}

impl Serialize for RoadmapStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RoadmapStatus {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: RoadmapStatus,
    #[serde(default)]
    pub votes: u32,
    /// Free-form target date as entered, e.g. `2024-03-15`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
}

/// Who is operating the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub name: String,
}

impl Default for CurrentUser {
    fn default() -> Self {
        CurrentUser {
            user_type: UserType::Guest,
            name: "Anonymous".to_string(),
        }
    }
}
