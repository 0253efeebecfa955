// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn ix() -> Command {
    cargo_bin_cmd!("issue-index")
}

/// A project root with an empty `docs/issues/` and a pinned project name.
pub struct Project {
    pub temp: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("docs/issues")).unwrap();
        fs::write(
            temp.path().join(".issue-index.toml"),
            "project_name = \"Specs\"\n",
        )
        .unwrap();
        Project { temp }
    }

    pub fn issue(&self, name: &str, content: &str) -> &Self {
        fs::write(self.issues_dir().join(name), content).unwrap();
        self
    }

    pub fn issues_dir(&self) -> PathBuf {
        self.temp.path().join("docs/issues")
    }

    pub fn readme(&self) -> PathBuf {
        self.issues_dir().join("README.md")
    }

    pub fn read_readme(&self) -> String {
        fs::read_to_string(self.readme()).unwrap()
    }

    /// The binary, run from the project root with a fixed date.
    pub fn cmd(&self) -> Command {
        let mut cmd = ix();
        cmd.current_dir(self.temp.path()).arg("--date").arg("2025-10-19");
        cmd
    }
}
