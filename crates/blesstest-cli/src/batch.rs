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

//! Validation of many case files in one invocation.
//!
//! A [`BatchOperation`] is applied to every file. Small batches run in order
//! on the calling thread; from `parallel_threshold` files on they run on the
//! rayon pool. Every file gets a [`FileOutcome`], so one broken file never
//! hides the others.
//!
//! ```rust,no_run
//! use blesstest_cli::batch::{BatchConfig, BatchProcessor, ValidationOperation};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let files = vec![
//!     PathBuf::from("math.blesstest.json"),
//!     PathBuf::from("strings.blesstest.yaml"),
//! ];
//! let report = BatchProcessor::new(BatchConfig::default()).process(&files, ValidationOperation, true)?;
//! println!("{} of {} files resolved", report.success_count(), report.total_files());
//! # Ok(())
//! # }
//! ```

use crate::commands::load_cases;
use crate::error::CliError;
use colored::Colorize;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use tracing::debug;

/// How a batch is run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Batches with at least this many files run on the rayon pool.
    pub parallel_threshold: usize,
    /// Print one line per file as it finishes.
    pub verbose: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 10,
            verbose: false,
        }
    }
}

/// What happened to one file.
#[derive(Debug, Clone)]
pub struct FileOutcome<T> {
    pub path: PathBuf,
    pub result: Result<T, CliError>,
}

impl<T> FileOutcome<T> {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a whole batch, in input order.
#[derive(Debug, Clone)]
pub struct BatchReport<T> {
    pub outcomes: Vec<FileOutcome<T>>,
    pub elapsed: Duration,
}

impl<T> BatchReport<T> {
    pub fn total_files(&self) -> usize {
        self.outcomes.len()
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.total_files() - self.success_count()
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| !o.is_ok())
    }

    pub fn successes(&self) -> impl Iterator<Item = &FileOutcome<T>> {
        self.outcomes.iter().filter(|o| o.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome<T>> {
        self.outcomes.iter().filter(|o| !o.is_ok())
    }
}

/// Work applied to each file of a batch.
///
/// ```rust
/// use blesstest_cli::batch::BatchOperation;
/// use blesstest_cli::error::CliError;
/// use std::path::Path;
///
/// struct LineCount;
///
/// impl BatchOperation for LineCount {
///     type Output = usize;
///
///     fn process_file(&self, path: &Path) -> Result<usize, CliError> {
///         let text = std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))?;
///         Ok(text.lines().count())
///     }
///
///     fn name(&self) -> &str {
///         "line-count"
///     }
/// }
/// ```
pub trait BatchOperation: Send + Sync {
    type Output: Send;

    fn process_file(&self, path: &Path) -> Result<Self::Output, CliError>;

    /// Shown in the closing summary line.
    fn name(&self) -> &str;
}

/// Counts finished files across threads.
#[derive(Debug)]
struct Progress {
    total: usize,
    done: AtomicUsize,
    failed: AtomicUsize,
    verbose: bool,
}

impl Progress {
    fn new(total: usize, verbose: bool) -> Self {
        Self {
            total,
            done: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
            verbose,
        }
    }

    fn finished(&self, path: &Path, error: Option<&CliError>) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        if error.is_some() {
            self.failed.fetch_add(1, Ordering::Relaxed);
        }
        if self.verbose {
            eprintln!("{}", self.file_line(done, path, error));
        }
    }

    fn file_line(&self, done: usize, path: &Path, error: Option<&CliError>) -> String {
        let width = self.total.to_string().len();
        let counter = format!("[{:>width$}/{}]", done, self.total, width = width);
        match error {
            None => format!("{} {} {}", counter.dimmed(), "ok".green(), path.display()),
            Some(e) => format!("{} {} {}: {}", counter.dimmed(), "FAIL".red().bold(), path.display(), e),
        }
    }

    /// `validate: 3 files, 2 resolved, 1 failed in 0.04s`
    fn summary(&self, operation: &str, elapsed: Duration) -> String {
        let done = self.done.load(Ordering::Relaxed);
        let failed = self.failed.load(Ordering::Relaxed);
        let failed_text = format!("{} failed", failed);
        format!(
            "{}: {} files, {} resolved, {} in {:.2}s",
            operation.bold(),
            done,
            done - failed,
            if failed > 0 { failed_text.red().to_string() } else { failed_text },
            elapsed.as_secs_f64()
        )
    }
}

/// Applies an operation to a list of files.
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    config: BatchConfig,
}

impl BatchProcessor {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Process every file and collect one outcome per file.
    ///
    /// With `show_progress` a summary line is written to stderr at the end,
    /// preceded by one line per file when the config is verbose.
    pub fn process<O>(
        &self,
        files: &[PathBuf],
        operation: O,
        show_progress: bool,
    ) -> Result<BatchReport<O::Output>, CliError>
    where
        O: BatchOperation,
    {
        let start = Instant::now();
        let progress = Progress::new(files.len(), self.config.verbose);
        let parallel = files.len() >= self.config.parallel_threshold;
        debug!(files = files.len(), parallel, operation = operation.name(), "batch start");

        let run = |path: &PathBuf| {
            let result = operation.process_file(path);
            if show_progress {
                progress.finished(path, result.as_ref().err());
            }
            FileOutcome {
                path: path.clone(),
                result,
            }
        };

        let outcomes: Vec<_> = if parallel {
            files.par_iter().map(run).collect()
        } else {
            files.iter().map(run).collect()
        };

        let elapsed = start.elapsed();
        if show_progress && !files.is_empty() {
            eprintln!("{}", progress.summary(operation.name(), elapsed));
        }
        Ok(BatchReport { outcomes, elapsed })
    }
}

/// Load and resolve a case file; succeeds with its number of cases.
#[derive(Debug, Clone, Copy)]
pub struct ValidationOperation;

impl BatchOperation for ValidationOperation {
    type Output = usize;

    fn process_file(&self, path: &Path) -> Result<usize, CliError> {
        load_cases(&path.to_string_lossy()).map(|cases| cases.len())
    }

    fn name(&self) -> &str {
        "validate"
    }
}
