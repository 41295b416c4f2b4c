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

//! Case file discovery and collection.

use crate::error::{RunnerError, RunnerResult};
use blesstest_core::{preprocess, ConcreteCase, TemplateSet};
use blesstest_json::from_json;
use blesstest_yaml::{from_yaml, FromYamlConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Suffixes of JSON case files.
pub const JSON_SUFFIXES: &[&str] = &[".blesstest.json", ".blesstest.jsonc"];

/// Suffixes of YAML case files.
pub const YAML_SUFFIXES: &[&str] = &[".blesstest.yaml", ".blesstest.yml"];

/// Directory next to each case file that holds its snapshots.
pub const BLESSED_DIR: &str = "blessed";

/// Case file stem: the file name without its case file suffix.
///
/// Returns `None` when the path is not a case file.
pub fn case_file_stem(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    JSON_SUFFIXES
        .iter()
        .chain(YAML_SUFFIXES)
        .find_map(|suffix| name.strip_suffix(suffix))
}

/// Whether the path names a case file.
pub fn is_case_file(path: &Path) -> bool {
    case_file_stem(path).is_some()
}

fn is_yaml(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| YAML_SUFFIXES.iter().any(|s| n.ends_with(s)))
}

/// Find case files under `root`, sorted by path.
///
/// A `root` that is itself a file is returned as is.
pub fn discover(root: &Path) -> RunnerResult<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| RunnerError::io(root, e.into()))?;
        if entry.file_type().is_file() && is_case_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    debug!(root = %root.display(), files = files.len(), "discovered case files");
    Ok(files)
}

/// Parse case file text, choosing YAML or JSON by the file suffix.
pub fn load_templates(path: &Path, text: &str) -> RunnerResult<TemplateSet> {
    let load_error = |message: String| RunnerError::Load {
        path: path.to_path_buf(),
        message,
    };
    if is_yaml(path) {
        from_yaml(text, &FromYamlConfig::default()).map_err(|e| load_error(e.to_string()))
    } else {
        from_json(text).map_err(|e| load_error(e.to_string()))
    }
}

/// A resolved case ready to run.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedCase {
    /// `<file stem>_<case name>`, also the snapshot file stem.
    pub test_name: String,
    /// Case name inside its file.
    pub case_name: String,
    /// The resolved case.
    pub case: ConcreteCase,
    /// Case file the case came from.
    pub file: PathBuf,
    /// Snapshot path: `blessed/<test name>.json` next to the case file.
    pub blessed_path: PathBuf,
}

/// Load and resolve one case file.
pub fn collect_file(path: &Path) -> RunnerResult<Vec<CollectedCase>> {
    let stem = case_file_stem(path).ok_or_else(|| RunnerError::Load {
        path: path.to_path_buf(),
        message: "not a blesstest case file".to_string(),
    })?;

    let text = fs::read_to_string(path).map_err(|e| RunnerError::io(path, e))?;
    let templates = load_templates(path, &text)?;
    let cases = preprocess(&templates).map_err(|source| RunnerError::Resolve {
        path: path.to_path_buf(),
        source,
    })?;

    let blessed_dir = blessed_dir(path);
    let collected: Vec<CollectedCase> = cases
        .into_iter()
        .map(|(case_name, case)| {
            let test_name = format!("{}_{}", stem, case_name);
            CollectedCase {
                blessed_path: blessed_dir.join(format!("{}.json", test_name)),
                test_name,
                case_name,
                case,
                file: path.to_path_buf(),
            }
        })
        .collect();

    debug!(file = %path.display(), cases = collected.len(), "collected case file");
    Ok(collected)
}

/// Snapshot directory of a case file.
pub fn blessed_dir(case_file: &Path) -> PathBuf {
    case_file
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(BLESSED_DIR)
}

/// Delete `*.json` snapshots in `dir`, returning how many were removed.
///
/// Run before writing fresh snapshots so that snapshots of deleted cases
/// disappear. A missing directory removes nothing.
pub fn remove_stale_snapshots(dir: &Path) -> RunnerResult<usize> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(RunnerError::io(dir, e)),
    };

    let mut removed = 0;
    for entry in entries {
        let path = entry.map_err(|e| RunnerError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            fs::remove_file(&path).map_err(|e| RunnerError::io(&path, e))?;
            removed += 1;
        }
    }
    debug!(dir = %dir.display(), removed, "removed stale snapshots");
    Ok(removed)
}
