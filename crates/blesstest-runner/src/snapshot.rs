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

//! Blessed snapshot files and their git status.
//!
//! A snapshot is blessed once it is staged in git. After writing a snapshot
//! the runner asks git whether the working tree copy differs from the index:
//! an untracked file needs staging, an unstaged modification is a change,
//! anything else matches.

use crate::error::{RunnerError, RunnerResult};
use blesstest_core::Params;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::trace;

/// Git status of a written snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitStatus {
    /// The snapshot equals the staged or committed version.
    Match,
    /// The snapshot differs from the staged version.
    Changed,
    /// The snapshot is new and untracked.
    NeedsStaging,
}

impl GitStatus {
    /// Failure message for a non-matching status, `None` on a match.
    pub fn failure_message(&self, path: &Path) -> Option<String> {
        match self {
            GitStatus::Match => None,
            GitStatus::NeedsStaging => Some(format!(
                "{}: New blessed file created. Stage it if you bless it.",
                path.display()
            )),
            GitStatus::Changed => Some(format!(
                "{}: Changes found, stage them if you bless them.",
                path.display()
            )),
        }
    }
}

/// Classify `git status --porcelain` output for a single file.
///
/// The second column is the working tree state.
pub fn classify_porcelain(path: &Path, output: &str) -> RunnerResult<GitStatus> {
    if output.is_empty() {
        return Ok(GitStatus::Match);
    }
    match output.chars().nth(1) {
        Some('?') => Ok(GitStatus::NeedsStaging),
        Some(' ') => Ok(GitStatus::Match),
        Some('M') => Ok(GitStatus::Changed),
        _ => Err(RunnerError::UnrecognizedStatus {
            path: path.to_path_buf(),
            output: output.to_string(),
        }),
    }
}

/// Ask git for the status of a snapshot file.
///
/// git runs in the file's directory, so the file may live in any repository.
pub fn check_blessed_file_status(path: &Path) -> RunnerResult<GitStatus> {
    let git_error = |message: String| RunnerError::Git {
        path: path.to_path_buf(),
        message,
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| git_error("path has no file name".to_string()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let output = Command::new("git")
        .args(["status", "--porcelain", "--"])
        .arg(file_name)
        .current_dir(dir)
        .output()
        .map_err(|e| git_error(e.to_string()))?;

    if !output.status.success() {
        return Err(git_error(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    trace!(path = %path.display(), status = %stdout.trim_end(), "git status");
    classify_porcelain(path, &stdout)
}

/// Contents of a blessed snapshot file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    /// Harness the case ran.
    pub harness: String,
    /// Case params passed to the harness.
    pub params: Params,
    /// Harness output, or the recorded failure.
    pub result: Value,
}

/// Render a snapshot: two-space indented JSON with a trailing newline.
pub fn render_snapshot(record: &SnapshotRecord) -> RunnerResult<String> {
    let mut text = serde_json::to_string_pretty(record)?;
    text.push('\n');
    Ok(text)
}

/// Write a snapshot file, creating its directory when missing.
pub fn write_snapshot(path: &Path, record: &SnapshotRecord) -> RunnerResult<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|e| RunnerError::io(dir, e))?;
        }
    }
    let text = render_snapshot(record)?;
    fs::write(path, text).map_err(|e| RunnerError::io(path, e))
}

/// Read a snapshot file back.
pub fn read_snapshot(path: &Path) -> RunnerResult<SnapshotRecord> {
    let text = fs::read_to_string(path).map_err(|e| RunnerError::io(path, e))?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn snap() -> PathBuf {
        PathBuf::from("blessed/t_case.json")
    }

    #[test]
    fn test_classify_empty_is_match() {
        assert_eq!(classify_porcelain(&snap(), "").unwrap(), GitStatus::Match);
    }

    #[test]
    fn test_classify_untracked() {
        assert_eq!(
            classify_porcelain(&snap(), "?? blessed/t_case.json\n").unwrap(),
            GitStatus::NeedsStaging
        );
    }

    #[test]
    fn test_classify_staged_only() {
        assert_eq!(
            classify_porcelain(&snap(), "A  blessed/t_case.json\n").unwrap(),
            GitStatus::Match
        );
        assert_eq!(
            classify_porcelain(&snap(), "M  blessed/t_case.json\n").unwrap(),
            GitStatus::Match
        );
    }

    #[test]
    fn test_classify_modified() {
        assert_eq!(
            classify_porcelain(&snap(), " M blessed/t_case.json\n").unwrap(),
            GitStatus::Changed
        );
        assert_eq!(
            classify_porcelain(&snap(), "AM blessed/t_case.json\n").unwrap(),
            GitStatus::Changed
        );
    }

    #[test]
    fn test_classify_unexpected() {
        let err = classify_porcelain(&snap(), " D blessed/t_case.json\n").unwrap_err();
        assert!(matches!(err, RunnerError::UnrecognizedStatus { .. }));
        assert!(classify_porcelain(&snap(), "?").is_err());
    }

    #[test]
    fn test_failure_messages() {
        let path = snap();
        assert_eq!(GitStatus::Match.failure_message(&path), None);
        assert_eq!(
            GitStatus::NeedsStaging.failure_message(&path).unwrap(),
            "blessed/t_case.json: New blessed file created. Stage it if you bless it."
        );
        assert_eq!(
            GitStatus::Changed.failure_message(&path).unwrap(),
            "blessed/t_case.json: Changes found, stage them if you bless them."
        );
    }

    #[test]
    fn test_render_snapshot_layout() {
        let record = SnapshotRecord {
            harness: "add".to_string(),
            params: Params::from([("a".to_string(), json!(1)), ("b".to_string(), json!(2))]),
            result: json!({"result": 3}),
        };
        let text = render_snapshot(&record).unwrap();
        assert_eq!(
            text,
            "{\n  \"harness\": \"add\",\n  \"params\": {\n    \"a\": 1,\n    \"b\": 2\n  },\n  \"result\": {\n    \"result\": 3\n  }\n}\n"
        );
    }

    #[test]
    fn test_write_and_read_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blessed").join("t_case.json");
        let record = SnapshotRecord {
            harness: "identity".to_string(),
            params: Params::new(),
            result: json!({"exception": "boom"}),
        };
        write_snapshot(&path, &record).unwrap();
        assert_eq!(read_snapshot(&path).unwrap(), record);
    }
}
