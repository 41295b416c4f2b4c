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

//! Run command - snapshot tests with the built-in harnesses

use crate::error::CliError;
use crate::harnesses::builtin_registry;
use blesstest_runner::{run_paths, RunnerConfig};
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

/// Discover case files under `paths` and run every case.
///
/// Snapshots are written to `blessed/` next to each case file. The command
/// fails when any snapshot is new, changed, or could not be produced.
///
/// # Arguments
///
/// * `paths` - Case files or directories to search
/// * `debug` - Abort on harness failures instead of recording them
///   (also enabled by `BLESSTEST_DEBUG`)
/// * `no_git` - Write snapshots without asking git for their status
/// * `parallel` - Run cases on the rayon thread pool
pub fn run(paths: Vec<String>, debug: bool, no_git: bool, parallel: bool) -> Result<(), CliError> {
    let paths: Vec<PathBuf> = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths.iter().map(PathBuf::from).collect()
    };

    let env = RunnerConfig::from_env();
    let config = RunnerConfig {
        debug: debug || env.debug,
        check_git: !no_git,
        parallel,
    };

    debug!(?paths, ?config, "running case files");
    let registry = builtin_registry();
    let summary = run_paths(&registry, &paths, &config)?;

    if summary.total() == 0 {
        return Err(CliError::invalid_input("no blesstest case files found"));
    }

    for result in &summary.results {
        if result.passed() {
            println!("{} {}", "✓".green().bold(), result.name);
        } else {
            println!("{} {}", "✗".red().bold(), result.name);
            eprintln!("    {}", result.message().dimmed());
        }
    }

    println!();
    println!(
        "{} passed, {} failed",
        summary.passed_count().to_string().green(),
        summary.failed_count().to_string().red()
    );

    if summary.all_passed() {
        Ok(())
    } else {
        Err(CliError::TestsFailed {
            failed: summary.failed_count(),
            total: summary.total(),
        })
    }
}
