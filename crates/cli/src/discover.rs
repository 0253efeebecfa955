// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Issue files are markdown documents.
const ISSUE_EXTENSION: &str = ".md";

/// Returns true for names of the form `<prefix>-*.md`.
pub fn is_issue_file_name(name: &str, prefix: &str) -> bool {
    name.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|rest| rest.ends_with(ISSUE_EXTENSION))
}

/// List the issue files in `dir`, sorted by file name.
///
/// A missing directory holds no issues. Whether the names carry a valid
/// identifier is left to the parser.
pub fn find_issue_files(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(dir = %dir.display(), "issues directory does not exist");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        // Follows symlinks, so linked issue files are indexed too.
        if !path.is_file() {
            continue;
        }
        if is_issue_file_name(&entry.file_name().to_string_lossy(), prefix) {
            files.push(path);
        }
    }
    files.sort();

    tracing::debug!(count = files.len(), dir = %dir.display(), "discovered issue files");
    Ok(files)
}

#[cfg(test)]
#[path = "discover_tests.rs"]
mod tests;
