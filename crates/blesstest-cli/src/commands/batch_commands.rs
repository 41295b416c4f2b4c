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

//! Batch command implementations

use crate::batch::{BatchConfig, BatchProcessor, ValidationOperation};
use crate::error::CliError;
use colored::Colorize;
use std::path::PathBuf;

/// Batch validate multiple case files.
///
/// # Arguments
///
/// * `files` - Case files to validate
/// * `parallel` - Process files on the rayon pool
/// * `verbose` - Show per-file progress
///
/// # Examples
///
/// ```no_run
/// use blesstest_cli::commands::batch_validate;
///
/// # fn main() -> Result<(), blesstest_cli::error::CliError> {
/// let files = vec!["a.blesstest.json".to_string(), "b.blesstest.yaml".to_string()];
/// batch_validate(files, true, false)?;
/// # Ok(())
/// # }
/// ```
pub fn batch_validate(files: Vec<String>, parallel: bool, verbose: bool) -> Result<(), CliError> {
    let paths: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();

    let config = BatchConfig {
        parallel_threshold: if parallel { 1 } else { usize::MAX },
        verbose,
    };

    let results = BatchProcessor::new(config).process(&paths, ValidationOperation, true)?;

    if results.has_failures() {
        eprintln!();
        eprintln!("{}", "Validation failures:".red().bold());
        for failure in results.failures() {
            eprintln!("  {} {}", "✗".red(), failure.path.display());
            if let Err(e) = &failure.result {
                eprintln!("    {}", e.to_string().dimmed());
            }
        }
        return Err(CliError::invalid_input(format!(
            "{} of {} files failed validation",
            results.failure_count(),
            results.total_files()
        )));
    }

    let cases: usize = results.outcomes.iter().filter_map(|r| r.result.as_ref().ok()).sum();
    println!("{} cases in {} files", cases, results.total_files());
    Ok(())
}
