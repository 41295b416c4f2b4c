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

//! Blesstest Command Line Interface

use blesstest_cli::cli::Cli;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let default_directive: Directive = match "blesstest=info".parse() {
        Ok(directive) => directive,
        Err(e) => {
            eprintln!("Error: invalid log directive: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_directive))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
