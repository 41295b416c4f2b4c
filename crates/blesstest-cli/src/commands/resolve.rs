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

//! Resolve command - print the concrete cases of a case file as JSON

use super::{load_cases, write_output};
use crate::error::CliError;
use blesstest_json::{to_json, ToJsonConfig};

/// Resolve a case file and write the cases as JSON.
///
/// Output is `{"<case name>": {"params": {...}, "harness": "..."}}`, written
/// to `output` or stdout.
///
/// # Examples
///
/// ```no_run
/// use blesstest_cli::commands::resolve;
///
/// # fn main() -> Result<(), blesstest_cli::error::CliError> {
/// resolve("math.blesstest.json", None, true)?;
/// resolve("math.blesstest.yaml", Some("cases.json"), false)?;
/// # Ok(())
/// # }
/// ```
pub fn resolve(file: &str, output: Option<&str>, pretty: bool) -> Result<(), CliError> {
    let cases = load_cases(file)?;
    let mut json = to_json(&cases, &ToJsonConfig { pretty })
        .map_err(|e| CliError::JsonFormat {
            message: e.to_string(),
        })?;
    json.push('\n');
    write_output(&json, output)
}
