// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::Parser;

const QUICKSTART_HELP: &str = "\
Examples:
  issue-index                         Regenerate docs/issues/README.md
  issue-index -C ../other-project     Run against another project root
  issue-index --stdout                Print the index without writing it
  issue-index --date 2025-01-31       Pin the \"Last updated\" date

Defaults can be set in .issue-index.toml at the project root:
  issues_dir = \"docs/issues\"
  output = \"README.md\"
  prefix = \"ISSUE\"
  project_name = \"MyProject\"";

#[derive(Parser, Debug, Default)]
#[command(name = "issue-index", version)]
#[command(about = "Regenerate the issue index from ISSUE-*.md files")]
#[command(
    long_about = "Regenerate the issue index from ISSUE-*.md files.\n\n\
    Scans the issues directory, reads the bold metadata fields of every issue \
    file, and rewrites the README.md summary grouped by status, priority and \
    category. One malformed file name aborts the run without writing anything."
)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Project root containing the issues directory and config file
    #[arg(long, short = 'C', value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Issues directory, relative to the project root [default: docs/issues]
    #[arg(long, short = 'd', value_name = "DIR")]
    pub issues_dir: Option<PathBuf>,

    /// File name of the generated index inside the issues directory [default: README.md]
    #[arg(long, short, value_name = "NAME")]
    pub output: Option<String>,

    /// Prefix of issue file names and headings [default: ISSUE]
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Date printed in the footer, as YYYY-MM-DD [default: today]
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Print the index to stdout instead of writing the file
    #[arg(long)]
    pub stdout: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
