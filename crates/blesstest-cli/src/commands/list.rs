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

//! List command - case names and harnesses of a case file

use super::load_templates;
use crate::error::CliError;
use blesstest_core::variations::expand_variations;
use blesstest_core::{filter::filter_abstract, resolve_templates, Limits};
use colored::Colorize;

/// List the cases of a case file, one `<name>  <harness>` line each.
///
/// With `all`, abstract leaves are listed as well, marked `(abstract)`.
pub fn list(file: &str, all: bool) -> Result<(), CliError> {
    let templates = load_templates(file)?;
    let limits = Limits::default();
    let resolve_error = |e: blesstest_core::BlessError| CliError::Resolve(e.to_string());

    let resolved = resolve_templates(&templates, &limits).map_err(resolve_error)?;
    let expanded = expand_variations(&resolved, &limits).map_err(resolve_error)?;

    if all {
        let width = expanded.keys().map(|k| k.chars().count()).max().unwrap_or(0);
        for (name, case) in &expanded {
            let harness = case.harness.as_deref().unwrap_or("-");
            if case.is_abstract {
                let line = format!("{:width$}  {} (abstract)", name, harness, width = width);
                println!("{}", line.dimmed());
            } else {
                println!("{:width$}  {}", name, harness.cyan(), width = width);
            }
        }
        return Ok(());
    }

    let cases = filter_abstract(expanded).map_err(resolve_error)?;
    let width = cases.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    for (name, case) in &cases {
        println!("{:width$}  {}", name, case.harness.cyan(), width = width);
    }
    Ok(())
}
