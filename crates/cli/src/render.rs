// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of the issue index document.
//!
//! The document is a pure function of the parsed issues and a
//! [`RenderContext`]. With a fixed date, unchanged issues render to
//! identical bytes.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use ix_core::{Issue, Priority};

/// Category bucket for issues without a `**Category**:` field.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Command shown in the header and footer as the way to regenerate.
pub const REGENERATE_COMMAND: &str = "issue-index";

const RULE: &str = "---";

/// Inputs of the document that do not come from the issues themselves.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub project_name: String,
    pub prefix: String,
    pub date: NaiveDate,
}

/// Issue counts by lifecycle class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
    pub partial: usize,
    /// Issues whose status is UNKNOWN.
    pub unknown: usize,
}

impl Stats {
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut stats = Stats {
            total: issues.len(),
            ..Stats::default()
        };
        for issue in issues {
            if issue.is_open() {
                stats.open += 1;
            } else if issue.is_closed() {
                stats.closed += 1;
            } else if issue.is_partial() {
                stats.partial += 1;
            } else {
                stats.unknown += 1;
            }
        }
        stats
    }

    pub fn open_pct(&self) -> f64 {
        percentage(self.open, self.total)
    }

    pub fn closed_pct(&self) -> f64 {
        percentage(self.closed, self.total)
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Glyph marking an issue's state in the category listing.
pub fn status_glyph(issue: &Issue) -> &'static str {
    if issue.is_closed() {
        "✅"
    } else if issue.is_partial() {
        "⚠️"
    } else {
        "🔴"
    }
}

/// Issues matching `pred`, in ascending number order.
fn sorted_by_number<'a>(issues: &'a [Issue], pred: impl Fn(&Issue) -> bool) -> Vec<&'a Issue> {
    let mut selected: Vec<&Issue> = issues.iter().filter(|&i| pred(i)).collect();
    selected.sort_by_key(|i| i.number);
    selected
}

/// Group issues by category name, each group in ascending number order.
pub fn group_by_category(issues: &[Issue]) -> BTreeMap<&str, Vec<&Issue>> {
    let mut groups: BTreeMap<&str, Vec<&Issue>> = BTreeMap::new();
    for issue in issues {
        let category = issue.category.as_deref().unwrap_or(UNCATEGORIZED);
        groups.entry(category).or_default().push(issue);
    }
    for group in groups.values_mut() {
        group.sort_by_key(|i| i.number);
    }
    groups
}

/// Group open issues by priority, most urgent first, skipping empty groups.
pub fn group_open_by_priority(issues: &[Issue]) -> Vec<(Priority, Vec<&Issue>)> {
    Priority::ALL
        .into_iter()
        .map(|priority| {
            (
                priority,
                sorted_by_number(issues, |i| i.is_open() && i.priority == priority),
            )
        })
        .filter(|(_, group)| !group.is_empty())
        .collect()
}

/// Entry line: `- **[ISSUE-007](ISSUE-007-x.md)** - Title`.
fn entry_line(issue: &Issue, prefix: &str) -> String {
    format!(
        "- **[{}]({})** - {}",
        issue.reference(prefix),
        issue.file_name,
        issue.title
    )
}

fn meta_line(meta: &[String]) -> String {
    format!("  - {}", meta.join(" | "))
}

fn open_meta(issue: &Issue) -> Vec<String> {
    let mut meta = vec![
        format!("Priority: {}", issue.priority),
        format!("Status: {}", issue.status),
    ];
    if let Some(category) = &issue.category {
        meta.push(format!("Category: {}", category));
    }
    if !issue.created.is_empty() {
        meta.push(format!("Created: {}", issue.created));
    }
    if let Some(estimated) = &issue.estimated {
        meta.push(format!("Est: {}", estimated));
    }
    if !issue.blocked_by.is_empty() {
        meta.push(format!("Blocked by: {}", issue.blocked_by.join(", ")));
    }
    if !issue.blocks.is_empty() {
        meta.push(format!("Blocks: {}", issue.blocks.join(", ")));
    }
    meta
}

fn partial_meta(issue: &Issue) -> Vec<String> {
    let mut meta = vec![format!("Priority: {}", issue.priority)];
    if !issue.created.is_empty() {
        meta.push(format!("Created: {}", issue.created));
    }
    meta
}

fn closed_meta(issue: &Issue) -> Vec<String> {
    let mut meta = vec![format!("Priority: {}", issue.priority)];
    if let Some(completed) = &issue.completed {
        meta.push(format!("Completed: {}", completed));
    }
    if let Some(actual) = &issue.actual {
        meta.push(format!("Actual: {}", actual));
    }
    meta
}

/// Render the complete index document.
pub fn render(issues: &[Issue], ctx: &RenderContext) -> String {
    let stats = Stats::from_issues(issues);
    let prefix = ctx.prefix.as_str();

    let mut lines = vec![
        format!("# Issue Tracking - {}", ctx.project_name),
        String::new(),
        format!(
            "**Auto-generated** - Run `{}` to update",
            REGENERATE_COMMAND
        ),
        String::new(),
        format!("**Total**: {} issues", stats.total),
        format!("**Open**: {} ({:.0}%)", stats.open, stats.open_pct()),
        format!("**Closed**: {} ({:.0}%)", stats.closed, stats.closed_pct()),
        format!("**Partial**: {}", stats.partial),
        String::new(),
        RULE.to_string(),
        String::new(),
    ];

    let open_groups = group_open_by_priority(issues);
    if !open_groups.is_empty() {
        lines.push("## Open Issues".to_string());
        lines.push(String::new());
        for (priority, group) in open_groups {
            lines.push(format!("### {} ({})", priority, group.len()));
            lines.push(String::new());
            for issue in group {
                lines.push(entry_line(issue, prefix));
                lines.push(meta_line(&open_meta(issue)));
            }
            lines.push(String::new());
        }
        lines.push(RULE.to_string());
        lines.push(String::new());
    }

    let partial = sorted_by_number(issues, Issue::is_partial);
    if !partial.is_empty() {
        lines.push("## Partial Completion".to_string());
        lines.push(String::new());
        for issue in partial {
            lines.push(entry_line(issue, prefix));
            lines.push(meta_line(&partial_meta(issue)));
        }
        lines.push(String::new());
        lines.push(RULE.to_string());
        lines.push(String::new());
    }

    let closed = sorted_by_number(issues, Issue::is_closed);
    if !closed.is_empty() {
        lines.push("## Closed Issues".to_string());
        lines.push(String::new());
        for issue in closed {
            lines.push(entry_line(issue, prefix));
            lines.push(meta_line(&closed_meta(issue)));
        }
        lines.push(String::new());
        lines.push(RULE.to_string());
        lines.push(String::new());
    }

    let categories = group_by_category(issues);
    if !categories.is_empty() {
        lines.push("## By Category".to_string());
        lines.push(String::new());
        for (category, group) in &categories {
            lines.push(format!("**{}** ({}):", category, group.len()));
            let refs: Vec<String> = group
                .iter()
                .map(|issue| format!("{} {}", issue.reference(prefix), status_glyph(issue)))
                .collect();
            lines.push(format!("  - {}", refs.join(", ")));
            lines.push(String::new());
        }
        lines.push(RULE.to_string());
        lines.push(String::new());
    }

    lines.push(format!("**Last updated**: {}", ctx.date.format("%Y-%m-%d")));
    lines.push(String::new());
    lines.push(format!("**How to update**: Run `{}`", REGENERATE_COMMAND));
    lines.push(String::new());

    lines.join("\n")
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
