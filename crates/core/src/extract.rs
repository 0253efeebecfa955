// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Header field extraction.
//!
//! Issue files carry their metadata as bold labels near the top:
//!
//! ```text
//! **Status**: ✅ RESOLVED (fixed in #12)
//! **Priority**: HIGH
//! **Blocked By**: ISSUE-003, ISSUE-009
//! ```
//!
//! Extraction is best-effort: a missing or empty field resolves to the
//! caller's default and never fails.

use std::sync::LazyLock;

use regex::Regex;

use crate::issue::Status;

/// Decorations that may prefix a status label.
const STATUS_DECORATIONS: &[char] = &['✅', '⚠', '\u{fe0f}', '🔴', '❌'];

/// List values meaning "intentionally empty".
const LIST_SENTINELS: &[&str] = &["", "-", "None", "N/A"];

// One pattern per `Field`, indexed by discriminant.
static FIELD_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| Field::ALL.iter().map(|f| label_pattern(f.label())).collect());

/// How a field's raw value is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Trimmed free text.
    Text,
    /// Decorations and notes stripped, then parsed as a [`Status`].
    Status,
    /// Comma separated references.
    List,
}

/// The header fields recognized in issue files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Status,
    Priority,
    Created,
    Completed,
    Category,
    Estimated,
    Actual,
    Related,
    Blocks,
    BlockedBy,
    Milestone,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Status,
        Field::Priority,
        Field::Created,
        Field::Completed,
        Field::Category,
        Field::Estimated,
        Field::Actual,
        Field::Related,
        Field::Blocks,
        Field::BlockedBy,
        Field::Milestone,
    ];

    /// The bold label as written in issue files.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Status => "Status",
            Field::Priority => "Priority",
            Field::Created => "Created",
            Field::Completed => "Completed",
            Field::Category => "Category",
            Field::Estimated => "Estimated",
            Field::Actual => "Actual",
            Field::Related => "Related",
            Field::Blocks => "Blocks",
            Field::BlockedBy => "Blocked By",
            Field::Milestone => "Milestone",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Status => FieldKind::Status,
            Field::Related | Field::Blocks | Field::BlockedBy => FieldKind::List,
            _ => FieldKind::Text,
        }
    }

    /// Value used when the field is absent. Empty means "no value".
    pub fn default_value(&self) -> &'static str {
        match self {
            Field::Status => "UNKNOWN",
            Field::Priority => "MEDIUM",
            Field::Created => "Unknown",
            _ => "",
        }
    }

    /// The precompiled `**label**: value` pattern for this field.
    pub fn pattern(&self) -> &'static Regex {
        &FIELD_PATTERNS[*self as usize]
    }

    /// Extract this field as text, falling back to [`Field::default_value`].
    pub fn text(&self, content: &str) -> String {
        capture_value(self.pattern(), content, self.default_value())
    }

    /// Extract this field as optional text; empty values become `None`.
    pub fn optional(&self, content: &str) -> Option<String> {
        Some(self.text(content)).filter(|v| !v.is_empty())
    }

    /// Extract this field as a list of references.
    pub fn list(&self, content: &str) -> Vec<String> {
        split_list(&capture_value(self.pattern(), content, ""))
    }
}

/// Build the pattern matching `**label**: value` up to the end of the line.
pub fn label_pattern(label: &str) -> Regex {
    let pattern = format!(r"(?m)\*\*{}\*\*:[ \t]*(.*)$", regex::escape(label));
    match Regex::new(&pattern) {
        Ok(re) => re,
        Err(_) => unreachable!("escaped label pattern"),
    }
}

/// Extract a single-line `**label**: value` field.
///
/// The first occurrence wins. Returns `default` if the label is absent or
/// its value is blank. Known labels should go through [`Field`], whose
/// patterns are compiled once.
pub fn extract_field(content: &str, label: &str, default: &str) -> String {
    capture_value(&label_pattern(label), content, default)
}

fn capture_value(re: &Regex, content: &str, default: &str) -> String {
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Normalize a raw status value.
///
/// Decorative symbols are removed and anything from the first `(` on is
/// treated as a note. `RESOLVED` maps to [`Status::Closed`]; anything
/// unrecognized is [`Status::Unknown`].
pub fn normalize_status(raw: &str) -> Status {
    let stripped: String = raw
        .chars()
        .filter(|c| !STATUS_DECORATIONS.contains(c))
        .collect();
    let label = stripped.split('(').next().unwrap_or_default().trim();

    match label.parse::<Status>() {
        Ok(status) => status,
        Err(_) => {
            tracing::debug!(raw, "unrecognized status, using UNKNOWN");
            Status::Unknown
        }
    }
}

pub fn extract_status(content: &str) -> Status {
    normalize_status(&Field::Status.text(content))
}

/// Split a comma separated list value.
///
/// Sentinel values (`-`, `None`, `N/A`, empty) yield an empty list.
pub fn split_list(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if LIST_SENTINELS.contains(&raw) {
        return Vec::new();
    }
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

pub fn extract_list_field(content: &str, label: &str) -> Vec<String> {
    split_list(&extract_field(content, label, ""))
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
