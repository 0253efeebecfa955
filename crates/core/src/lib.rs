// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ix-core: Shared library for the issue index generator
//!
//! This crate provides the issue data model, the header field extractor, and
//! the issue file parser. It performs no I/O: callers hand it file contents
//! and file names.

pub mod error;
pub mod extract;
pub mod issue;
pub mod parse;

pub use error::{Error, Result};
pub use extract::Field;
pub use issue::{Issue, Priority, Status};
pub use parse::{IssueParser, DEFAULT_PREFIX};
