// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for the issue index.
//!
//! This module contains the fundamental data types: Issue, Status, and
//! Priority.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Lifecycle status of an issue as declared in its `**Status**:` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Reported, nobody working on it yet.
    Open,
    /// Currently being worked on.
    InProgress,
    /// Waiting on another issue or external input.
    Blocked,
    /// Partly delivered; remaining work is tracked elsewhere.
    Partial,
    /// Finished. `RESOLVED` is accepted as a synonym.
    Closed,
    /// Missing or unrecognized status text.
    Unknown,
}

impl Status {
    /// Returns the label used in issue headers and in the generated index.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "OPEN",
            Status::InProgress => "IN_PROGRESS",
            Status::Blocked => "BLOCKED",
            Status::Partial => "PARTIAL",
            Status::Closed => "CLOSED",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().replace([' ', '-'], "_").as_str() {
            "OPEN" => Ok(Status::Open),
            "IN_PROGRESS" => Ok(Status::InProgress),
            "BLOCKED" => Ok(Status::Blocked),
            "PARTIAL" => Ok(Status::Partial),
            "CLOSED" | "RESOLVED" => Ok(Status::Closed),
            "UNKNOWN" => Ok(Status::Unknown),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// Urgency of an issue. Open issues are grouped by priority in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Priority {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// All priorities, most urgent first.
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    /// Returns the label used in issue headers and in the generated index.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "CRITICAL",
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "CRITICAL" => Ok(Priority::Critical),
            "HIGH" => Ok(Priority::High),
            "MEDIUM" => Ok(Priority::Medium),
            "LOW" => Ok(Priority::Low),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// One issue file, reduced to the metadata the index needs.
///
/// Issues are rebuilt from disk on every run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Numeric identifier taken from the file name (`ISSUE-042-...` → 42).
    pub number: u32,
    /// Text of the `# ISSUE-042: ...` heading, or `Unknown`.
    pub title: String,
    pub status: Status,
    pub priority: Priority,
    /// Free-text creation date; `Unknown` when absent.
    pub created: String,
    pub completed: Option<String>,
    pub category: Option<String>,
    /// Estimated effort, e.g. `2h`.
    pub estimated: Option<String>,
    /// Actual effort spent.
    pub actual: Option<String>,
    pub related: Vec<String>,
    pub blocks: Vec<String>,
    pub blocked_by: Vec<String>,
    pub milestone: Option<String>,
    /// Name of the source file, used as the link target in the index.
    pub file_name: String,
}

impl Issue {
    /// Returns true for OPEN, IN_PROGRESS and BLOCKED issues.
    pub fn is_open(&self) -> bool {
        matches!(
            self.status,
            Status::Open | Status::InProgress | Status::Blocked
        )
    }

    pub fn is_closed(&self) -> bool {
        self.status == Status::Closed
    }

    pub fn is_partial(&self) -> bool {
        self.status == Status::Partial
    }

    /// Display identifier with a zero-padded number, e.g. `ISSUE-007`.
    pub fn reference(&self, prefix: &str) -> String {
        format!("{}-{:03}", prefix, self.number)
    }

    /// Test helper: construct an Issue with defaults for every header field.
    #[cfg(test)]
    pub fn new(number: u32, title: &str, status: Status) -> Self {
        Issue {
            number,
            title: title.to_string(),
            status,
            priority: Priority::Medium,
            created: "Unknown".to_string(),
            completed: None,
            category: None,
            estimated: None,
            actual: None,
            related: Vec::new(),
            blocks: Vec::new(),
            blocked_by: Vec::new(),
            milestone: None,
            file_name: format!("ISSUE-{:03}.md", number),
        }
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
