// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ixrs - Regenerates the issue index of a markdown issue tracker.
//!
//! Issue files live in a directory (by default `docs/issues/`) and are named
//! `ISSUE-<n>-<slug>.md`. Each starts with a `# ISSUE-<n>: <title>` heading
//! followed by bold metadata lines such as `**Status**: OPEN`. This crate
//! turns that directory into a `README.md` summary.
//!
//! # Main Components
//!
//! - [`discover`] - Finds issue files by naming convention
//! - [`ix_core::IssueParser`] - Turns one file into an [`ix_core::Issue`]
//! - [`render`] - Aggregates issues into the index document
//! - [`project`] - Best-effort project name detection for the title
//! - [`Config`] - Optional `.issue-index.toml` settings
//!
//! ```rust,ignore
//! use clap::Parser;
//! use ixrs::Cli;
//!
//! ixrs::run(Cli::parse())?;
//! ```

mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod generate;
pub mod project;
pub mod render;

pub use cli::Cli;
pub use config::{Config, Settings};
pub use error::{Error, Result};

use std::path::PathBuf;

use chrono::{Local, NaiveDate};

/// Parse the `--date` flag, defaulting to today's local date.
pub fn resolve_date(value: Option<&str>) -> Result<NaiveDate> {
    match value {
        Some(value) => {
            NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate {
                value: value.to_string(),
            })
        }
        None => Ok(Local::now().date_naive()),
    }
}

/// Execute a run from parsed command line arguments. This is the main entry
/// point for library users and the binary alike.
pub fn run(cli: Cli) -> Result<()> {
    let date = resolve_date(cli.date.as_deref())?;
    let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = Config::load(&root)?;
    let settings = Settings::resolve(&cli, config, root);
    tracing::debug!(?settings, "resolved settings");

    generate::run(&settings, date)?;
    Ok(())
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
