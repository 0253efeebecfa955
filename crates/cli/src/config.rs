// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration.
//!
//! Configuration is read from `.issue-index.toml` at the project root. Every
//! key is optional:
//! - `issues_dir`: directory holding the issue files (default `docs/issues`)
//! - `output`: file name of the generated index (default `README.md`)
//! - `prefix`: issue file and heading prefix (default `ISSUE`)
//! - `project_name`: name shown in the index title, skipping git detection

use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ix_core::DEFAULT_PREFIX;

use crate::cli::Cli;
use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".issue-index.toml";
const DEFAULT_ISSUES_DIR: &str = "docs/issues";
const DEFAULT_OUTPUT: &str = "README.md";

/// Settings stored in `.issue-index.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub issues_dir: Option<PathBuf>,
    pub output: Option<String>,
    pub prefix: Option<String>,
    pub project_name: Option<String>,
}

impl Config {
    /// Loads configuration from the project root.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file is
    /// an error.
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE_NAME);
        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %config_path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(Error::Config(format!("failed to read config: {}", e))),
        };
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root: PathBuf,
    pub issues_dir: PathBuf,
    pub output: String,
    pub prefix: String,
    pub project_name: Option<String>,
    pub to_stdout: bool,
}

impl Settings {
    /// Merge command line flags over the config file over the defaults.
    pub fn resolve(cli: &Cli, config: Config, root: PathBuf) -> Self {
        let issues_dir = cli
            .issues_dir
            .clone()
            .or(config.issues_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ISSUES_DIR));
        Settings {
            issues_dir: root.join(issues_dir),
            output: cli
                .output
                .clone()
                .or(config.output)
                .unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
            prefix: cli
                .prefix
                .clone()
                .or(config.prefix)
                .unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            project_name: config.project_name.filter(|n| !n.trim().is_empty()),
            to_stdout: cli.stdout,
            root,
        }
    }

    /// Path of the generated index.
    pub fn output_path(&self) -> PathBuf {
        self.issues_dir.join(&self.output)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
