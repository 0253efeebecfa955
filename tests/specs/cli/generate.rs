// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for a successful `issue-index` run.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

#[path = "common.rs"]
mod common;

use std::fs;

use common::*;
use similar_asserts::assert_eq;

fn populated() -> Project {
    let project = Project::new();
    project
        .issue(
            "ISSUE-001-schema.md",
            "# ISSUE-001: Initial schema\n\n\
             **Status**: ✅ RESOLVED (merged)\n\
             **Priority**: LOW\n\
             **Category**: Storage\n\
             **Completed**: 2025-09-30\n\
             **Actual**: 3h\n",
        )
        .issue(
            "ISSUE-002-retries.md",
            "# ISSUE-002: Add retries\n\n\
             **Status**: OPEN\n\
             **Created**: 2025-09-28\n\
             **Category**: Sync\n\
             **Estimated**: 2h\n\
             **Blocks**: ISSUE-004\n",
        )
        .issue(
            "ISSUE-003-export.md",
            "# ISSUE-003: Export pipeline\n\n\
             **Status**: ⚠️ PARTIAL\n\
             **Priority**: HIGH\n\
             **Created**: 2025-09-29\n",
        )
        .issue(
            "ISSUE-004-stall.md",
            "# ISSUE-004: Sync stalls\n\n\
             **Status**: 🔴 BLOCKED\n\
             **Priority**: CRITICAL\n\
             **Created**: 2025-10-01\n\
             **Category**: Sync\n\
             **Blocked By**: ISSUE-002\n\
             **Related**: None\n",
        );
    project
}

// =============================================================================
// Document content
// =============================================================================

#[test]
fn generates_full_index() {
    let project = populated();
    project.cmd().assert().success();

    let expected = "\
# Issue Tracking - Specs

**Auto-generated** - Run `issue-index` to update

**Total**: 4 issues
**Open**: 2 (50%)
**Closed**: 1 (25%)
**Partial**: 1

---

## Open Issues

### CRITICAL (1)

- **[ISSUE-004](ISSUE-004-stall.md)** - Sync stalls
  - Priority: CRITICAL | Status: BLOCKED | Category: Sync | Created: 2025-10-01 | Blocked by: ISSUE-002

### MEDIUM (1)

- **[ISSUE-002](ISSUE-002-retries.md)** - Add retries
  - Priority: MEDIUM | Status: OPEN | Category: Sync | Created: 2025-09-28 | Est: 2h | Blocks: ISSUE-004

---

## Partial Completion

- **[ISSUE-003](ISSUE-003-export.md)** - Export pipeline
  - Priority: HIGH | Created: 2025-09-29

---

## Closed Issues

- **[ISSUE-001](ISSUE-001-schema.md)** - Initial schema
  - Priority: LOW | Completed: 2025-09-30 | Actual: 3h

---

## By Category

**Storage** (1):
  - ISSUE-001 ✅

**Sync** (2):
  - ISSUE-002 🔴, ISSUE-004 🔴

**Uncategorized** (1):
  - ISSUE-003 ⚠️

---

**Last updated**: 2025-10-19

**How to update**: Run `issue-index`
";
    assert_eq!(project.read_readme().as_str(), expected);
}

#[test]
fn prints_progress_and_summary() {
    let project = populated();
    project
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Found 4 issue files\n"))
        .stdout(predicate::str::contains("  ✓ ISSUE-001: Initial schema [CLOSED]"))
        .stdout(predicate::str::contains("  ✓ ISSUE-004: Sync stalls [BLOCKED]"))
        .stdout(predicate::str::contains("✅ Generated"))
        .stdout(predicate::str::contains(
            "Summary:\n  Total: 4\n  Open: 2\n  Closed: 1\n  Partial: 1\n",
        ));
}

#[test]
fn rerun_with_fixed_date_is_byte_identical() {
    let project = populated();
    project.cmd().assert().success();
    let first = fs::read(project.readme()).unwrap();
    project.cmd().assert().success();
    let second = fs::read(project.readme()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn overwrites_existing_readme() {
    let project = populated();
    fs::write(project.readme(), "hand-written notes").unwrap();
    project.cmd().assert().success();
    assert!(!project.read_readme().contains("hand-written notes"));
}

#[test]
fn uncategorized_issue_is_listed() {
    let project = Project::new();
    project.issue("ISSUE-010.md", "# ISSUE-010: Loose end\n**Status**: OPEN\n");
    project.cmd().assert().success();

    let readme = project.read_readme();
    assert!(readme.contains("**Uncategorized** (1):\n  - ISSUE-010 🔴\n"));
    assert!(!readme.contains("## Closed Issues"));
    assert!(!readme.contains("## Partial Completion"));
}

#[test]
fn critical_precedes_medium_regardless_of_number() {
    let project = Project::new();
    project
        .issue("ISSUE-001.md", "# ISSUE-001: Medium first\n**Status**: OPEN\n")
        .issue(
            "ISSUE-099.md",
            "# ISSUE-099: Critical later\n**Status**: IN_PROGRESS\n**Priority**: CRITICAL\n",
        );
    project.cmd().assert().success();

    let readme = project.read_readme();
    let critical = readme.find("### CRITICAL (1)").unwrap();
    let medium = readme.find("### MEDIUM (1)").unwrap();
    assert!(critical < medium);
}

// =============================================================================
// Options
// =============================================================================

#[test]
fn stdout_flag_prints_document_without_writing() {
    let project = populated();
    project
        .cmd()
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Issue Tracking - Specs\n"))
        .stderr(predicate::str::contains("Found 4 issue files"));
    assert!(!project.readme().exists());
}

#[test]
fn root_flag_runs_elsewhere() {
    let project = populated();
    let elsewhere = TempDir::new().unwrap();
    ix().current_dir(elsewhere.path())
        .arg("-C")
        .arg(project.temp.path())
        .assert()
        .success();
    assert!(project.read_readme().starts_with("# Issue Tracking - Specs\n"));
}

#[test]
fn config_file_sets_directory_and_prefix() {
    let project = Project::new();
    fs::write(
        project.temp.path().join(".issue-index.toml"),
        "issues_dir = \"bugs\"\nprefix = \"BUG\"\noutput = \"INDEX.md\"\nproject_name = \"Specs\"\n",
    )
    .unwrap();
    let bugs = project.temp.path().join("bugs");
    fs::create_dir(&bugs).unwrap();
    fs::write(bugs.join("BUG-7-crash.md"), "# BUG-7: Crash\n**Status**: OPEN\n").unwrap();

    project
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("  ✓ BUG-007: Crash [OPEN]"));

    let index = fs::read_to_string(bugs.join("INDEX.md")).unwrap();
    assert!(index.contains("- **[BUG-007](BUG-7-crash.md)** - Crash"));
}

#[test]
fn help_mentions_config_file() {
    ix().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(".issue-index.toml"));
}
