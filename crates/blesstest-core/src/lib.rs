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

//! Template resolution engine for blesstest case files.
//!
//! A case file declares named templates. A template carries parameters, a
//! harness identifier, an optional `base` template to inherit from, an
//! abstract flag and an optional tree of variations. This crate turns a set
//! of such templates into a flat, deterministically named set of concrete
//! cases in four stages:
//!
//! 1. [`brackets`]: parameter keys such as `"[n]"` or `"[[a, b]]"` are
//!    rewritten into variation lists (cartesian product per node).
//! 2. [`base`]: `base` references are followed and merged, with cycle and
//!    conflict detection.
//! 3. [`variations`]: variation trees are flattened into named leaves
//!    (see [`naming`] for the name scheme).
//! 4. [`filter`]: abstract leaves are dropped.
//!
//! All stages are pure and deterministic. Any error aborts the whole run.
//!
//! ```
//! use blesstest_core::{preprocess, CaseTemplate, Template, TemplateSet};
//! use serde_json::json;
//!
//! let mut templates = TemplateSet::new();
//! templates.insert(
//!     "Base".to_string(),
//!     Template::new().into_abstract().with_harness("adder").with_param("a", 1).into(),
//! );
//! templates.insert(
//!     "Sum".to_string(),
//!     CaseTemplate::with_base("Base", Template::new().with_param("[b]", json!([2, 3]))),
//! );
//!
//! let cases = preprocess(&templates).unwrap();
//! assert_eq!(cases.keys().collect::<Vec<_>>(), vec!["Sum__b_2", "Sum__b_3"]);
//! assert_eq!(cases["Sum__b_3"].harness, "adder");
//! ```

pub mod base;
pub mod brackets;
mod error;
pub mod filter;
mod limits;
pub mod naming;
mod pipeline;
mod template;
pub mod variations;

pub use brackets::json_kind;
pub use error::{BlessError, BlessErrorKind, BlessResult};
pub use limits::Limits;
pub use pipeline::{preprocess, preprocess_with_limits, resolve_templates};
pub use template::{
    CaseSet, CaseTemplate, ConcreteCase, ExpandedCase, Params, ResolvedTemplate, Template,
    TemplateSet,
};
