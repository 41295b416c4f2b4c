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

//! End-to-end runner tests on temporary directories.

use blesstest_runner::snapshot::read_snapshot;
use blesstest_runner::{run_paths, GitStatus, HarnessRegistry, RunnerConfig};
use blesstest_test::fixtures;
use serde::Deserialize;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::process::Command;

#[derive(Deserialize)]
struct Pair {
    a: i64,
    b: i64,
}

fn registry() -> HarnessRegistry {
    let mut registry = HarnessRegistry::new();
    registry
        .register_typed("add", |p: Pair| -> Result<Value, String> {
            Ok(json!({ "result": p.a + p.b }))
        })
        .register_typed("identity", |v: Value| -> Result<Value, String> { Ok(v) });
    registry
}

fn offline() -> RunnerConfig {
    RunnerConfig {
        check_git: false,
        ..RunnerConfig::default()
    }
}

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
        .status;
    assert!(status.success(), "git {:?} failed", args);
}

// ==================== Offline runs ====================

#[test]
fn test_run_comprehensive_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("suite.blesstest.jsonc");
    fs::write(&file, fixtures::comprehensive_json()).unwrap();

    let summary = run_paths(&registry(), &[dir.path().to_path_buf()], &offline()).unwrap();
    assert_eq!(summary.total(), 7);
    assert!(summary.all_passed());

    let names: Vec<&str> = summary.results.iter().map(|r| r.name.as_str()).collect();
    let expected: Vec<String> = fixtures::comprehensive_case_names()
        .into_iter()
        .map(|n| format!("suite_{}", n))
        .collect();
    assert_eq!(names, expected);

    let record = read_snapshot(&dir.path().join("blessed/suite_Sums__b_2.json")).unwrap();
    assert_eq!(record.harness, "add");
    assert_eq!(record.result, json!({"result": 3}));
}

#[test]
fn test_stale_snapshots_removed() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("math.blesstest.json"),
        fixtures::adder_json(),
    )
    .unwrap();
    let blessed = dir.path().join("blessed");
    fs::create_dir_all(&blessed).unwrap();
    fs::write(blessed.join("math_deleted.json"), "{}").unwrap();

    let summary = run_paths(&registry(), &[dir.path().to_path_buf()], &offline()).unwrap();
    assert_eq!(summary.total(), 2);
    assert!(!blessed.join("math_deleted.json").exists());
    assert!(blessed.join("math_small.json").exists());
    assert!(blessed.join("math_negative.json").exists());
}

#[test]
fn test_broken_file_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.blesstest.json"), r#"{"A": {"base": "Z"}}"#).unwrap();
    fs::write(dir.path().join("b.blesstest.json"), fixtures::adder_json()).unwrap();

    let summary = run_paths(&registry(), &[dir.path().to_path_buf()], &offline()).unwrap();
    assert_eq!(summary.total(), 3);
    assert_eq!(summary.failed_count(), 1);
    let failure = summary.failures().next().unwrap();
    assert!(failure.message().contains("base case 'Z' not found"));
}

#[test]
fn test_parallel_matches_serial() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("suite.blesstest.yaml"),
        fixtures::comprehensive_yaml(),
    )
    .unwrap();

    let serial = run_paths(&registry(), &[dir.path().to_path_buf()], &offline()).unwrap();
    let config = RunnerConfig {
        parallel: true,
        ..offline()
    };
    let parallel = run_paths(&registry(), &[dir.path().to_path_buf()], &config).unwrap();

    let names = |s: &blesstest_runner::RunSummary| -> Vec<String> {
        s.results.iter().map(|r| r.name.clone()).collect()
    };
    assert_eq!(names(&serial), names(&parallel));
    assert!(parallel.all_passed());
}

// ==================== Git status ====================

#[test]
fn test_git_blessing_cycle() {
    if !git_available() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    git(root, &["init", "-q"]);

    let file = root.join("math.blesstest.json");
    fs::write(&file, r#"{"Sum": {"harness": "add", "params": {"a": 1, "b": 2}}}"#).unwrap();
    let config = RunnerConfig::default();

    // New snapshot: needs staging.
    let summary = run_paths(&registry(), &[root.to_path_buf()], &config).unwrap();
    let report = summary.results[0].result.as_ref().unwrap();
    assert_eq!(report.status, Some(GitStatus::NeedsStaging));
    assert!(summary.results[0]
        .message()
        .ends_with("math_Sum.json: New blessed file created. Stage it if you bless it."));

    // Staged: matches.
    git(root, &["add", "blessed"]);
    let summary = run_paths(&registry(), &[root.to_path_buf()], &config).unwrap();
    assert!(summary.all_passed());

    // Different output: changed.
    fs::write(&file, r#"{"Sum": {"harness": "add", "params": {"a": 5, "b": 2}}}"#).unwrap();
    let summary = run_paths(&registry(), &[root.to_path_buf()], &config).unwrap();
    let report = summary.results[0].result.as_ref().unwrap();
    assert_eq!(report.status, Some(GitStatus::Changed));
    assert!(summary.results[0]
        .message()
        .ends_with("math_Sum.json: Changes found, stage them if you bless them."));
}
