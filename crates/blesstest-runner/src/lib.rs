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

//! Blesstest case runner.
//!
//! Turns case files into snapshot tests:
//!
//! - **collect**: find `*.blesstest.{json,jsonc,yaml,yml}` files and resolve
//!   them into named cases (`<file stem>_<case name>`)
//! - **harness**: registry of named harness functions the cases run against
//! - **snapshot**: write `blessed/<test name>.json` and ask git whether the
//!   snapshot is staged
//! - **run**: tie the three together and summarize the outcome
//!
//! A test passes when its snapshot matches what is staged in git. New and
//! changed snapshots fail until they are staged.
//!
//! # Environment
//!
//! - `BLESSTEST_DEBUG`: when set, harness failures abort the case instead of
//!   being recorded in the snapshot.

pub mod collect;
mod error;
pub mod harness;
pub mod run;
pub mod snapshot;

pub use collect::{collect_file, discover, load_templates, remove_stale_snapshots, CollectedCase};
pub use error::{RunnerError, RunnerResult};
pub use harness::{CallError, Harness, HarnessFailure, HarnessRegistry};
pub use run::{run_case, run_file, run_paths, CaseReport, RunSummary, RunnerConfig, TestResult};
pub use snapshot::{
    check_blessed_file_status, classify_porcelain, write_snapshot, GitStatus, SnapshotRecord,
};
