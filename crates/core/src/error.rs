// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for ix-core operations.

use thiserror::Error;

/// All possible errors that can occur while parsing issue files.
///
/// Missing header fields are never errors; only the identifier embedded in
/// the file name is mandatory.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid issue filename: {file}\n  hint: expected a name like '{prefix}-001-short-title.md'")]
    InvalidFilename { file: String, prefix: String },

    #[error("invalid status: '{0}'\n  hint: valid statuses are: OPEN, IN_PROGRESS, BLOCKED, PARTIAL, CLOSED")]
    InvalidStatus(String),

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: CRITICAL, HIGH, MEDIUM, LOW")]
    InvalidPriority(String),
}

/// A specialized Result type for ix-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
