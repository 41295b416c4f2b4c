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

//! Core commands on single case files and case file trees.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Core blesstest commands.
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Print the resolved cases of a case file as JSON
    ///
    /// Accepts `.blesstest.json`, `.blesstest.jsonc`, `.blesstest.yaml` and
    /// `.blesstest.yml` files; other JSON files are read as JSONC.
    Resolve {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Check that a case file loads and resolves
    Validate {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// List case names and harnesses
    List {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Also list abstract leaves
        #[arg(short, long)]
        all: bool,
    },

    /// Run case files as snapshot tests
    ///
    /// Writes `blessed/<test>.json` next to each case file and fails for
    /// every snapshot that is not staged in git.
    Run {
        /// Case files or directories (defaults to the current directory)
        #[arg(value_name = "PATHS")]
        paths: Vec<String>,

        /// Abort on harness failures instead of recording them
        #[arg(short, long)]
        debug: bool,

        /// Write snapshots without checking git status
        #[arg(long)]
        no_git: bool,

        /// Run cases in parallel
        #[arg(short, long)]
        parallel: bool,
    },
}

impl CoreCommands {
    /// Execute the core command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Resolve {
                file,
                output,
                pretty,
            } => commands::resolve(&file, output.as_deref(), pretty),
            CoreCommands::Validate { file } => commands::validate(&file),
            CoreCommands::List { file, all } => commands::list(&file, all),
            CoreCommands::Run {
                paths,
                debug,
                no_git,
                parallel,
            } => commands::run(paths, debug, no_git, parallel),
        }
    }
}
