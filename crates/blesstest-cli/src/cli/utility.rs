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

//! Utility commands.

use super::Cli;
use crate::commands;
use crate::error::CliError;
use clap::{CommandFactory, Subcommand};
use clap_complete::Shell;

/// Utility commands.
#[derive(Subcommand)]
pub enum UtilityCommands {
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL", value_enum, ignore_case = true)]
        shell: Shell,

        /// Print installation instructions instead of generating script
        #[arg(short, long)]
        install: bool,
    },
}

impl UtilityCommands {
    /// Execute the utility command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            UtilityCommands::Completion { shell, install } => {
                let mut cmd = Cli::command();
                let text = if install {
                    commands::print_installation_instructions(shell, cmd.get_name())
                } else {
                    commands::generate_completion_for_command(shell, &mut cmd)?
                };
                commands::write_output(&text, None)
            }
        }
    }
}
