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

//! CLI command implementations

mod batch_commands;
mod completion;
mod list;
mod resolve;
mod run;
mod validate;

pub use batch_commands::batch_validate;
pub use completion::{generate_completion_for_command, print_installation_instructions};
pub use list::list;
pub use resolve::resolve;
pub use run::run;
pub use validate::validate;

use crate::error::CliError;
use blesstest_core::{preprocess, CaseSet, TemplateSet};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Default maximum case file size (64 MB).
/// Can be overridden via the `BLESSTEST_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`].
pub const MAX_FILE_SIZE_ENV: &str = "BLESSTEST_MAX_FILE_SIZE";

fn get_max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// Files larger than the configured maximum are rejected before reading.
///
/// # Examples
///
/// ```no_run
/// use blesstest_cli::commands::read_file;
///
/// # fn main() -> Result<(), blesstest_cli::error::CliError> {
/// let content = read_file("math.blesstest.json")?;
/// assert!(!content.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Read a case file and load its templates (YAML or JSON by suffix).
pub fn load_templates(file: &str) -> Result<TemplateSet, CliError> {
    let content = read_file(file)?;
    blesstest_runner::load_templates(Path::new(file), &content).map_err(|e| match e {
        blesstest_runner::RunnerError::Load { message, .. } => CliError::Load(message),
        other => CliError::Load(other.to_string()),
    })
}

/// Read a case file and resolve it into concrete cases.
pub fn load_cases(file: &str) -> Result<CaseSet, CliError> {
    let templates = load_templates(file)?;
    preprocess(&templates).map_err(|e| CliError::Resolve(e.to_string()))
}
