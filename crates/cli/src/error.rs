// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur while generating the index.
///
/// Any error aborts the run before the index file is written.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no issue files found in {dir}\n  hint: expected files named like '{prefix}-001-short-title.md'")]
    NoInputFound { dir: String, prefix: String },

    #[error("{0}")]
    Parse(#[from] ix_core::Error),

    #[error("invalid date '{value}'\n  hint: use the YYYY-MM-DD format, e.g. 2025-01-31")]
    InvalidDate { value: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for ixrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
