// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue file parsing.
//!
//! An issue file is named `<PREFIX>-<number>[-suffix].md` and starts with a
//! heading `# <PREFIX>-<number>: <title>`. Everything else comes from the
//! bold header fields handled by [`crate::extract`].

use regex::Regex;

use crate::error::{Error, Result};
use crate::extract::{extract_status, Field};
use crate::issue::{Issue, Priority};

/// Prefix used for issue file names and headings unless configured otherwise.
pub const DEFAULT_PREFIX: &str = "ISSUE";

/// Title used when a file has no matching heading.
const UNKNOWN_TITLE: &str = "Unknown";

/// Parses issue files for one naming prefix.
#[derive(Debug, Clone)]
pub struct IssueParser {
    prefix: String,
    filename_re: Regex,
    title_re: Regex,
}

impl IssueParser {
    pub fn new(prefix: &str) -> Self {
        let escaped = regex::escape(prefix);
        // Escaped input always yields a valid pattern.
        let filename_re = match Regex::new(&format!(r"{}-(\d+)", escaped)) {
            Ok(re) => re,
            Err(_) => unreachable!("escaped prefix pattern"),
        };
        let title_re = match Regex::new(&format!(r"(?m)^#[ \t]+{}-\d+:[ \t]*(.+)$", escaped)) {
            Ok(re) => re,
            Err(_) => unreachable!("escaped prefix pattern"),
        };
        IssueParser {
            prefix: prefix.to_string(),
            filename_re,
            title_re,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Extract the numeric identifier embedded in a file name.
    pub fn number(&self, file_name: &str) -> Result<u32> {
        self.filename_re
            .captures(file_name)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .ok_or_else(|| Error::InvalidFilename {
                file: file_name.to_string(),
                prefix: self.prefix.clone(),
            })
    }

    /// Text of the first `# <PREFIX>-<n>: <title>` heading, if any.
    pub fn title(&self, content: &str) -> Option<String> {
        self.title_re
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// Build an [`Issue`] from a file's name and contents.
    ///
    /// Fails only when the file name carries no numeric identifier.
    pub fn parse(&self, content: &str, file_name: &str) -> Result<Issue> {
        let number = self.number(file_name)?;

        let raw_priority = Field::Priority.text(content);
        let priority = raw_priority.parse::<Priority>().unwrap_or_else(|_| {
            tracing::warn!(
                file = file_name,
                priority = %raw_priority,
                "unrecognized priority, using MEDIUM"
            );
            Priority::Medium
        });

        Ok(Issue {
            number,
            title: self
                .title(content)
                .unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            status: extract_status(content),
            priority,
            created: Field::Created.text(content),
            completed: Field::Completed.optional(content),
            category: Field::Category.optional(content),
            estimated: Field::Estimated.optional(content),
            actual: Field::Actual.optional(content),
            related: Field::Related.list(content),
            blocks: Field::Blocks.list(content),
            blocked_by: Field::BlockedBy.list(content),
            milestone: Field::Milestone.optional(content),
            file_name: file_name.to_string(),
        })
    }
}

impl Default for IssueParser {
    fn default() -> Self {
        IssueParser::new(DEFAULT_PREFIX)
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
