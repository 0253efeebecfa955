// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Discovery, extraction and rendering, run back to back.
//!
//! The run is all-or-nothing: the first file that fails to parse aborts it
//! before anything is written, so a stale index is never replaced by a
//! partial one.

use std::fs;
use std::io::{self, Write};

use chrono::NaiveDate;
use ix_core::{Issue, IssueParser};

use crate::config::Settings;
use crate::discover::find_issue_files;
use crate::error::{Error, Result};
use crate::project::detect_project_name;
use crate::render::{render, RenderContext, Stats};

/// Generate the index as configured by `settings`.
///
/// Progress goes to stdout. With `to_stdout` the document itself goes to
/// stdout and progress moves to stderr.
pub fn run(settings: &Settings, date: NaiveDate) -> Result<Stats> {
    if settings.to_stdout {
        let issues = load_issues(settings, &mut io::stderr())?;
        print!("{}", render_index(settings, &issues, date));
        return Ok(Stats::from_issues(&issues));
    }
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_index(settings, date, &mut out)
}

/// Discover and parse every issue file, reporting each one to `progress`.
pub(crate) fn load_issues(settings: &Settings, progress: &mut dyn Write) -> Result<Vec<Issue>> {
    let files = find_issue_files(&settings.issues_dir, &settings.prefix)?;
    if files.is_empty() {
        return Err(Error::NoInputFound {
            dir: settings.issues_dir.display().to_string(),
            prefix: settings.prefix.clone(),
        });
    }
    writeln!(progress, "Found {} issue files", files.len())?;

    let parser = IssueParser::new(&settings.prefix);
    let mut issues = Vec::with_capacity(files.len());
    for path in &files {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let parsed = fs::read_to_string(path)
            .map_err(Error::from)
            .and_then(|content| parser.parse(&content, &file_name).map_err(Error::from));
        match parsed {
            Ok(issue) => {
                writeln!(
                    progress,
                    "  ✓ {}: {} [{}]",
                    issue.reference(parser.prefix()),
                    issue.title,
                    issue.status
                )?;
                issues.push(issue);
            }
            Err(e) => {
                writeln!(progress, "  ✗ {}: {}", file_name, e)?;
                tracing::debug!(file = %path.display(), error = %e, "aborting run");
                return Err(e);
            }
        }
    }
    Ok(issues)
}

fn render_index(settings: &Settings, issues: &[Issue], date: NaiveDate) -> String {
    let ctx = RenderContext {
        project_name: detect_project_name(settings.project_name.clone(), &settings.root),
        prefix: settings.prefix.clone(),
        date,
    };
    render(issues, &ctx)
}

/// Parse, render and overwrite the index file, then print a summary.
pub(crate) fn write_index(
    settings: &Settings,
    date: NaiveDate,
    progress: &mut dyn Write,
) -> Result<Stats> {
    let issues = load_issues(settings, progress)?;
    let content = render_index(settings, &issues, date);

    let output_path = settings.output_path();
    fs::write(&output_path, content)?;
    tracing::debug!(path = %output_path.display(), "index written");

    let stats = Stats::from_issues(&issues);
    writeln!(progress)?;
    writeln!(progress, "✅ Generated {}", output_path.display())?;
    writeln!(progress)?;
    writeln!(progress, "Summary:")?;
    writeln!(progress, "  Total: {}", stats.total)?;
    writeln!(progress, "  Open: {}", stats.open)?;
    writeln!(progress, "  Closed: {}", stats.closed)?;
    writeln!(progress, "  Partial: {}", stats.partial)?;
    Ok(stats)
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
