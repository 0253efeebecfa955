// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for runs that must fail without writing the index.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

#[path = "common.rs"]
mod common;

use std::fs;

use common::*;

#[test]
fn no_issue_files_fails() {
    let project = Project::new();
    project
        .cmd()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: no issue files found"));
    assert!(!project.readme().exists());
}

#[test]
fn missing_issues_directory_fails() {
    let temp = TempDir::new().unwrap();
    ix().current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no issue files found"));
}

#[test]
fn bad_filename_aborts_without_output() {
    let project = Project::new();
    project
        .issue("ISSUE-001.md", "# ISSUE-001: Fine\n**Status**: OPEN\n")
        .issue("ISSUE-next.md", "# ISSUE-002: Unnumbered\n");

    project
        .cmd()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "  ✗ ISSUE-next.md: invalid issue filename: ISSUE-next.md",
        ))
        .stderr(predicate::str::contains("invalid issue filename: ISSUE-next.md"));
    assert!(!project.readme().exists());
}

#[test]
fn bad_filename_keeps_previous_readme() {
    let project = Project::new();
    fs::write(project.readme(), "previous index").unwrap();
    project.issue("ISSUE-x.md", "");

    project.cmd().assert().failure();
    assert_eq!(project.read_readme(), "previous index");
}

#[test]
fn invalid_date_fails() {
    let project = Project::new();
    project.issue("ISSUE-001.md", "# ISSUE-001: Fine\n");

    ix().current_dir(project.temp.path())
        .arg("--date")
        .arg("19/10/2025")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date '19/10/2025'"));
    assert!(!project.readme().exists());
}

#[test]
fn malformed_config_fails() {
    let project = Project::new();
    project.issue("ISSUE-001.md", "# ISSUE-001: Fine\n");
    fs::write(project.temp.path().join(".issue-index.toml"), "prefix = [").unwrap();

    project
        .cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error"));
    assert!(!project.readme().exists());
}

#[test]
fn unexpected_argument_fails() {
    ix().arg("docs/issues").assert().failure().code(2);
}
