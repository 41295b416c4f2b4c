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

//! Validate command - case file loading and resolution check

use super::load_cases;
use crate::error::CliError;
use colored::Colorize;
use std::collections::BTreeMap;

/// Validate a case file: load it and resolve every case.
///
/// # Output
///
/// Prints `✓ <file>` with the case count and the cases per harness, or
/// `✗ <file>` followed by the error.
///
/// # Examples
///
/// ```no_run
/// use blesstest_cli::commands::validate;
///
/// # fn main() -> Result<(), blesstest_cli::error::CliError> {
/// validate("math.blesstest.json")?;
/// # Ok(())
/// # }
/// ```
pub fn validate(file: &str) -> Result<(), CliError> {
    match load_cases(file) {
        Ok(cases) => {
            let mut per_harness: BTreeMap<&str, usize> = BTreeMap::new();
            for case in cases.values() {
                *per_harness.entry(case.harness.as_str()).or_insert(0) += 1;
            }

            println!("{} {}", "✓".green().bold(), file);
            println!("  Cases: {}", cases.len());
            for (harness, count) in per_harness {
                println!("  Harness {}: {}", harness, count);
            }
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            Err(e)
        }
    }
}
