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

//! Running collected cases against their harnesses.
//!
//! Each case runs its harness, writes `{harness, params, result}` to its
//! snapshot file and asks git whether the snapshot is blessed. Harness
//! failures are recorded in the snapshot unless debug mode is on.
//!
//! # Examples
//!
//! ```rust,no_run
//! use blesstest_runner::{run_paths, HarnessRegistry, RunnerConfig};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = HarnessRegistry::new();
//! let summary = run_paths(&registry, &[PathBuf::from("tests")], &RunnerConfig::from_env())?;
//! for failure in summary.failures() {
//!     eprintln!("{}", failure.message());
//! }
//! # Ok(())
//! # }
//! ```

use crate::collect::{blessed_dir, collect_file, discover, remove_stale_snapshots, CollectedCase};
use crate::error::{RunnerError, RunnerResult};
use crate::harness::{CallError, HarnessFailure, HarnessRegistry};
use crate::snapshot::{check_blessed_file_status, write_snapshot, GitStatus, SnapshotRecord};
use rayon::prelude::*;
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable that turns on debug mode.
pub const DEBUG_ENV: &str = "BLESSTEST_DEBUG";

/// Runner configuration.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Return harness failures as errors instead of recording them.
    pub debug: bool,
    /// Classify snapshots with git. When off, snapshots are only written.
    pub check_git: bool,
    /// Run cases on the rayon thread pool.
    pub parallel: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            debug: false,
            check_git: true,
            parallel: false,
        }
    }
}

impl RunnerConfig {
    /// Default configuration with `debug` taken from `BLESSTEST_DEBUG`.
    ///
    /// Any non-empty value turns debug mode on.
    pub fn from_env() -> Self {
        Self {
            debug: std::env::var_os(DEBUG_ENV).is_some_and(|v| !v.is_empty()),
            ..Self::default()
        }
    }
}

/// Outcome of one case run.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseReport {
    /// Test name of the case.
    pub test_name: String,
    /// Snapshot file that was written.
    pub blessed_path: PathBuf,
    /// Snapshot git status, `None` when git was not consulted.
    pub status: Option<GitStatus>,
    /// Harness failure recorded in the snapshot.
    pub failure: Option<HarnessFailure>,
    /// The recorded `result`.
    pub result: Value,
}

impl CaseReport {
    /// Whether the snapshot is blessed (or unchecked).
    pub fn passed(&self) -> bool {
        matches!(self.status, None | Some(GitStatus::Match))
    }
}

/// Run one case: call its harness, write and classify the snapshot.
pub fn run_case(
    registry: &HarnessRegistry,
    case: &CollectedCase,
    config: &RunnerConfig,
) -> RunnerResult<CaseReport> {
    let harness_name = &case.case.harness;
    let harness = registry
        .lookup(harness_name)
        .ok_or_else(|| RunnerError::UnknownHarness {
            harness: harness_name.clone(),
            case: case.test_name.clone(),
        })?;

    let params = Value::Object(
        case.case
            .params
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    );

    let (result, failure) = match harness.call(&params) {
        Ok(output) => (output, None),
        Err(CallError::InvalidInput(message)) => {
            return Err(RunnerError::InvalidInput {
                harness: harness_name.clone(),
                case: case.test_name.clone(),
                message,
            })
        }
        Err(CallError::Failed(failure)) if config.debug => {
            return Err(RunnerError::HarnessFailed {
                harness: harness_name.clone(),
                case: case.test_name.clone(),
                failure,
            })
        }
        Err(CallError::Failed(failure)) => (failure.to_record(), Some(failure)),
    };

    let record = SnapshotRecord {
        harness: harness_name.clone(),
        params: case.case.params.clone(),
        result,
    };
    write_snapshot(&case.blessed_path, &record)?;

    let status = if config.check_git {
        Some(check_blessed_file_status(&case.blessed_path)?)
    } else {
        None
    };
    debug!(test = %case.test_name, ?status, "ran case");

    Ok(CaseReport {
        test_name: case.test_name.clone(),
        blessed_path: case.blessed_path.clone(),
        status,
        failure,
        result: record.result,
    })
}

/// Result of one test: a case run, or a file that failed to collect.
#[derive(Debug)]
pub struct TestResult {
    /// Test name, or the case file path for collection errors.
    pub name: String,
    /// The report or the error.
    pub result: Result<CaseReport, RunnerError>,
}

impl TestResult {
    /// Whether the test passed.
    pub fn passed(&self) -> bool {
        self.result.as_ref().is_ok_and(CaseReport::passed)
    }

    /// Failure message, or `<name>: ok` for a passing test.
    pub fn message(&self) -> String {
        match &self.result {
            Ok(report) => report
                .status
                .and_then(|s| s.failure_message(&report.blessed_path))
                .unwrap_or_else(|| format!("{}: ok", self.name)),
            Err(e) => format!("{}: {}", self.name, e),
        }
    }
}

/// Aggregated results of a run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Results in collection order.
    pub results: Vec<TestResult>,
}

impl RunSummary {
    /// Number of tests.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Number of passing tests.
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    /// Number of failing tests.
    pub fn failed_count(&self) -> usize {
        self.total() - self.passed_count()
    }

    /// Whether every test passed.
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(TestResult::passed)
    }

    /// Failing tests.
    pub fn failures(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter().filter(|r| !r.passed())
    }

    fn extend(&mut self, other: RunSummary) {
        self.results.extend(other.results);
    }
}

fn run_cases(
    registry: &HarnessRegistry,
    cases: &[CollectedCase],
    config: &RunnerConfig,
) -> Vec<TestResult> {
    let run = |case: &CollectedCase| TestResult {
        name: case.test_name.clone(),
        result: run_case(registry, case, config),
    };
    if config.parallel {
        cases.par_iter().map(run).collect()
    } else {
        cases.iter().map(run).collect()
    }
}

/// Collect and run one case file.
///
/// Stale snapshots are not removed; see [`run_paths`].
pub fn run_file(registry: &HarnessRegistry, path: &Path, config: &RunnerConfig) -> RunSummary {
    let results = match collect_file(path) {
        Ok(cases) => run_cases(registry, &cases, config),
        Err(e) => vec![TestResult {
            name: path.display().to_string(),
            result: Err(e),
        }],
    };
    RunSummary { results }
}

/// Discover case files under `paths`, remove stale snapshots and run
/// every case.
///
/// Discovery and cleanup errors abort the run. Errors of single files
/// and cases are reported in the summary.
pub fn run_paths(
    registry: &HarnessRegistry,
    paths: &[PathBuf],
    config: &RunnerConfig,
) -> RunnerResult<RunSummary> {
    let mut files = Vec::new();
    for path in paths {
        files.extend(discover(path)?);
    }
    files.sort();
    files.dedup();

    let dirs: BTreeSet<PathBuf> = files.iter().map(|f| blessed_dir(f)).collect();
    for dir in &dirs {
        remove_stale_snapshots(dir)?;
    }

    let mut summary = RunSummary::default();
    for file in &files {
        summary.extend(run_file(registry, file, config));
    }

    info!(
        files = files.len(),
        passed = summary.passed_count(),
        failed = summary.failed_count(),
        "run finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blesstest_core::ConcreteCase;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Pair {
        a: i64,
        b: i64,
    }

    fn registry() -> HarnessRegistry {
        let mut registry = HarnessRegistry::new();
        registry.register_typed("add", |p: Pair| {
            p.a.checked_add(p.b)
                .map(|result| json!({ "result": result }))
                .ok_or("overflow")
        });
        registry
    }

    fn offline() -> RunnerConfig {
        RunnerConfig {
            check_git: false,
            ..RunnerConfig::default()
        }
    }

    fn case(dir: &Path, a: i64, b: i64) -> CollectedCase {
        CollectedCase {
            test_name: "math_Sum".to_string(),
            case_name: "Sum".to_string(),
            case: ConcreteCase {
                params: [("a".to_string(), json!(a)), ("b".to_string(), json!(b))]
                    .into_iter()
                    .collect(),
                harness: "add".to_string(),
            },
            file: dir.join("math.blesstest.json"),
            blessed_path: dir.join("blessed").join("math_Sum.json"),
        }
    }

    #[test]
    fn test_run_case_writes_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let case = case(dir.path(), 2, 3);
        let report = run_case(&registry(), &case, &offline()).unwrap();
        assert!(report.passed());
        assert_eq!(report.result, json!({"result": 5}));

        let text = std::fs::read_to_string(&case.blessed_path).unwrap();
        let written: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            written,
            json!({"harness": "add", "params": {"a": 2, "b": 3}, "result": {"result": 5}})
        );
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn test_failure_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let case = case(dir.path(), i64::MAX, 1);
        let report = run_case(&registry(), &case, &offline()).unwrap();
        assert_eq!(report.result, json!({"exception": "overflow"}));
        assert_eq!(
            report.failure,
            Some(HarnessFailure::Exception("overflow".to_string()))
        );
    }

    #[test]
    fn test_debug_raises_failure() {
        let dir = tempfile::tempdir().unwrap();
        let case = case(dir.path(), i64::MAX, 1);
        let config = RunnerConfig {
            debug: true,
            ..offline()
        };
        let err = run_case(&registry(), &case, &config).unwrap_err();
        assert!(matches!(err, RunnerError::HarnessFailed { .. }));
        assert!(!case.blessed_path.exists());
    }

    #[test]
    fn test_unknown_harness_and_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut unknown = case(dir.path(), 1, 1);
        unknown.case.harness = "nope".to_string();
        assert!(matches!(
            run_case(&registry(), &unknown, &offline()).unwrap_err(),
            RunnerError::UnknownHarness { .. }
        ));

        let mut invalid = case(dir.path(), 1, 1);
        invalid.case.params.insert("a".to_string(), json!("one"));
        assert!(matches!(
            run_case(&registry(), &invalid, &offline()).unwrap_err(),
            RunnerError::InvalidInput { .. }
        ));
    }

    #[test]
    fn test_summary_counts() {
        let dir = tempfile::tempdir().unwrap();
        let good = case(dir.path(), 1, 1);
        let mut bad = case(dir.path(), 1, 1);
        bad.case.harness = "nope".to_string();
        let summary = RunSummary {
            results: run_cases(&registry(), &[good, bad], &offline()),
        };
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.passed_count(), 1);
        assert_eq!(summary.failed_count(), 1);
        assert!(!summary.all_passed());
        let failure = summary.failures().next().unwrap();
        assert!(failure.message().contains("unknown harness 'nope'"));
    }

    #[test]
    fn test_config_default() {
        let config = RunnerConfig::default();
        assert!(!config.debug);
        assert!(config.check_git);
        assert!(!config.parallel);
    }
}
