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

//! Blesstest CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Case files
//!
//! - **resolve**: Print the resolved cases of a case file as JSON
//! - **validate**: Check that a case file loads and resolves
//! - **list**: List case names and harnesses (`--all` includes abstract leaves)
//!
//! ## Snapshot tests
//!
//! - **run**: Run case files with the built-in harnesses (`collect`,
//!   `identity`, `add`) and check the snapshots against git
//!
//! ## Batch Processing
//!
//! - **batch-validate**: Validate multiple files in parallel
//!
//! ## Utilities
//!
//! - **completion**: Generate shell completion scripts
//!
//! # Examples
//!
//! ```no_run
//! use blesstest_cli::commands::{resolve, validate};
//!
//! # fn main() -> Result<(), blesstest_cli::error::CliError> {
//! validate("math.blesstest.json")?;
//! resolve("math.blesstest.json", Some("cases.json"), true)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Environment
//!
//! - `BLESSTEST_MAX_FILE_SIZE`: maximum case file size in bytes (default 64 MB)
//! - `BLESSTEST_DEBUG`: abort `run` on harness failures
//! - `RUST_LOG`: log filter, logs go to stderr

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
pub mod harnesses;
