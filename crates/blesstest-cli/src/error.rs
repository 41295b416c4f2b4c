// Dweve Blesstest - Declarative Snapshot Test Cases
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Structured error types for the blesstest CLI.
//!
//! All commands return `Result<(), CliError>`; `main` prints the error as
//! `Error: <message>` and exits with status 1.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for CLI operations.
///
/// Implements `Clone` so batch results can be shared across rayon workers.
///
/// # Examples
///
/// ```rust,no_run
/// use blesstest_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{}': {message}", path.display())]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured limit.
    #[error(
        "File '{}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)",
        path.display()
    )]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// The case file could not be loaded (syntax or template shape).
    #[error("Load error: {0}")]
    Load(String),

    /// The templates did not resolve.
    #[error("{0}")]
    Resolve(String),

    /// JSON serialization error.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// Runner error outside of single test results.
    #[error("Run error: {0}")]
    Run(String),

    /// Some tests did not pass.
    #[error("{failed} of {total} tests failed")]
    TestsFailed {
        /// Number of failing tests
        failed: usize,
        /// Number of tests run
        total: usize,
    },

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}

impl From<blesstest_runner::RunnerError> for CliError {
    fn from(source: blesstest_runner::RunnerError) -> Self {
        Self::Run(source.to_string())
    }
}
