// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project name detection for the index title.
//!
//! Each source is best-effort: a missing git binary, a repository without an
//! `origin` remote, or an unnamed directory simply yields `None` and the next
//! source is consulted.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Name used when no source yields one.
pub const FALLBACK_PROJECT_NAME: &str = "Issues";

/// A place the project name can be read from.
pub trait NameSource {
    fn project_name(&self) -> Option<String>;
}

/// Name set explicitly in the config file, used verbatim.
pub struct ConfiguredName(pub Option<String>);

impl NameSource for ConfiguredName {
    fn project_name(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Repository name taken from `remote.origin.url`, capitalized.
pub struct GitRemote {
    pub dir: PathBuf,
}

impl NameSource for GitRemote {
    fn project_name(&self) -> Option<String> {
        let output = match Command::new("git")
            .current_dir(&self.dir)
            .args(["config", "--get", "remote.origin.url"])
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!(error = %e, "git unavailable");
                return None;
            }
        };
        if !output.status.success() {
            tracing::debug!("no origin remote configured");
            return None;
        }
        repo_name_from_url(&String::from_utf8_lossy(&output.stdout))
            .map(|name| capitalize(&name))
    }
}

/// Name of the project root directory, capitalized.
pub struct DirectoryName {
    pub dir: PathBuf,
}

impl NameSource for DirectoryName {
    fn project_name(&self) -> Option<String> {
        // Resolve `.` and relative roots to a real directory name.
        let dir = self.dir.canonicalize().unwrap_or_else(|_| self.dir.clone());
        dir.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
            .map(|name| capitalize(&name))
    }
}

/// Extract the repository name from a remote URL.
///
/// Handles `https://host/org/repo.git`, `git@host:org/repo.git` and
/// `git@host:repo`, with or without a trailing slash.
pub fn repo_name_from_url(url: &str) -> Option<String> {
    let url = url.trim().trim_end_matches('/');
    let last = url.rsplit(['/', ':']).next()?;
    let name = last.strip_suffix(".git").unwrap_or(last);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Returns the first non-blank name any source yields.
pub fn resolve_project_name(sources: &[&dyn NameSource]) -> String {
    sources
        .iter()
        .filter_map(|source| source.project_name())
        .map(|name| name.trim().to_string())
        .find(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_PROJECT_NAME.to_string())
}

/// Resolve the project name for `root`: config, then git remote, then the
/// directory name.
pub fn detect_project_name(configured: Option<String>, root: &Path) -> String {
    let configured = ConfiguredName(configured);
    let git = GitRemote {
        dir: root.to_path_buf(),
    };
    let directory = DirectoryName {
        dir: root.to_path_buf(),
    };
    resolve_project_name(&[&configured, &git, &directory])
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
