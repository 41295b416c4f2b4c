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

//! Shared test fixtures and utilities for blesstest crates.
//!
//! This crate provides canonical template sets, the same documents as
//! JSON/JSONC/YAML text, builders, error fixtures and counting helpers so
//! that the loader, runner and CLI crates test against the same inputs.
//!
//! # Quick Start
//!
//! ```rust
//! use blesstest_test::fixtures;
//!
//! // Pre-built template sets
//! let templates = fixtures::bracket_sweep();
//! let templates = fixtures::base_chain();
//!
//! // Build custom template sets
//! use blesstest_test::fixtures::builders::TemplateSetBuilder;
//! use blesstest_core::Template;
//!
//! let templates = TemplateSetBuilder::new()
//!     .case("Base", Template::new().into_abstract().with_harness("add"))
//!     .derived("Sum", "Base", Template::new().with_param("a", 1))
//!     .build();
//!
//! // Error fixtures
//! use blesstest_test::fixtures::errors;
//!
//! for (name, templates, kind) in errors::failing_template_sets() {
//!     let err = blesstest_core::preprocess(&templates).unwrap_err();
//!     assert_eq!(err.kind, kind, "{}", name);
//! }
//! ```

use blesstest_core::TemplateSet;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> TemplateSet)>;

/// Canonical template sets and case file documents.
pub mod fixtures;

/// Fixture counting utilities.
pub mod counts;

// Re-export all fixtures for convenience
pub use fixtures::*;

pub use counts::{count_by_harness, count_leaves};
