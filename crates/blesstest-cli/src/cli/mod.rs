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

//! CLI command definitions and argument parsing.
//!
//! Commands are grouped by category, each flattened into the top level:
//!
//! - [`core`]: resolve, validate, list, run
//! - [`batch`]: batch-validate
//! - [`utility`]: completion

mod batch;
mod core;
mod utility;

use crate::error::CliError;
use clap::{Parser, Subcommand};

pub use batch::BatchCommands;
pub use core::CoreCommands;
pub use utility::UtilityCommands;

/// Blesstest - declarative snapshot test cases
///
/// Resolves case files into concrete test cases and runs them as snapshot
/// tests blessed through git.
///
/// # Examples
///
/// ```bash
/// # Show the resolved cases of a file
/// blesstest resolve math.blesstest.json --pretty
///
/// # Run every case file below the current directory
/// blesstest run
///
/// # Validate many files in parallel
/// blesstest batch-validate tests/*.blesstest.json --parallel
/// ```
#[derive(Parser)]
#[command(name = "blesstest")]
#[command(author, version, about = "Blesstest - declarative snapshot test cases", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
///
/// ```text
/// Commands
/// ├── Core (resolve, validate, list, run)
/// ├── Batch (batch-validate)
/// └── Utility (completion)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Batch(BatchCommands),

    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Batch(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
