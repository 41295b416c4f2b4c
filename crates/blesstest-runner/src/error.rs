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

//! Error types for the case runner.

use crate::harness::HarnessFailure;
use blesstest_core::BlessError;
use std::path::PathBuf;
use thiserror::Error;

/// Case runner error type.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// File system error.
    #[error("IO error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The case file could not be loaded.
    #[error("failed to load '{}': {message}", path.display())]
    Load { path: PathBuf, message: String },

    /// The case file loaded but its templates did not resolve.
    #[error("failed to resolve '{}': {source}", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: BlessError,
    },

    /// No harness with this name is registered.
    #[error("unknown harness '{harness}' in case '{case}'")]
    UnknownHarness { harness: String, case: String },

    /// The case params do not fit the harness input type.
    #[error("invalid input for harness '{harness}' in case '{case}': {message}")]
    InvalidInput {
        harness: String,
        case: String,
        message: String,
    },

    /// Harness failure raised instead of recorded (debug mode).
    #[error("harness '{harness}' failed in case '{case}': {failure}")]
    HarnessFailed {
        harness: String,
        case: String,
        failure: HarnessFailure,
    },

    /// git could not be run or exited with an error.
    #[error("git status failed for '{}': {message}", path.display())]
    Git { path: PathBuf, message: String },

    /// git printed a status this runner does not understand.
    #[error("Unexpected git status output for {}: '{output}'", path.display())]
    UnrecognizedStatus { path: PathBuf, output: String },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RunnerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RunnerError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for runner operations.
pub type RunnerResult<T> = Result<T, RunnerError>;
