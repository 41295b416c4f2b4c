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

//! Error test fixtures.
//!
//! Invalid case file text for loader tests, and well-formed template sets
//! that the engine must reject.

use super::builders::TemplateSetBuilder;
use blesstest_core::{BlessErrorKind, Template, TemplateSet};
use serde_json::json;

/// Case file text the JSON loader must reject, as (name, text).
pub fn invalid_json_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("whitespace_only", "   \n\t "),
        ("root_list", "[]"),
        ("root_string", "\"cases\""),
        ("template_not_object", r#"{"T": 1}"#),
        ("params_not_object", r#"{"T": {"params": [1]}}"#),
        ("harness_not_string", r#"{"T": {"harness": 7}}"#),
        ("abstract_not_bool", r#"{"T": {"abstract": "yes"}}"#),
        ("variations_not_list", r#"{"T": {"variations": {}}}"#),
        ("variation_not_object", r#"{"T": {"variations": [3]}}"#),
        ("base_not_string", r#"{"T": {"base": ["P"]}}"#),
        ("base_in_variation", r#"{"T": {"variations": [{"base": "P"}]}}"#),
        ("unknown_field", r#"{"T": {"harnes": "h"}}"#),
        ("unterminated_comment", "{ /* never closed "),
        ("truncated", r#"{"T": {"harness": "h""#),
    ]
}

/// Template sets the engine must reject, as (name, templates, expected kind).
pub fn failing_template_sets() -> Vec<(&'static str, TemplateSet, BlessErrorKind)> {
    vec![
        (
            "missing_base",
            TemplateSetBuilder::new()
                .derived("A", "Z", Template::new().with_harness("h"))
                .build(),
            BlessErrorKind::Reference,
        ),
        (
            "two_cycle",
            TemplateSetBuilder::new()
                .derived("A", "B", Template::new())
                .derived("B", "A", Template::new())
                .build(),
            BlessErrorKind::Cycle,
        ),
        (
            "sweep_not_list",
            TemplateSetBuilder::new()
                .case("T", Template::new().with_harness("h").with_param("[n]", 3))
                .build(),
            BlessErrorKind::Shape,
        ),
        (
            "zip_length_mismatch",
            TemplateSetBuilder::new()
                .case(
                    "T",
                    Template::new()
                        .with_harness("h")
                        .with_param("[[a,b]]", json!([[1, 2], [3]])),
                )
                .build(),
            BlessErrorKind::Shape,
        ),
        (
            "sweep_beside_variations",
            TemplateSetBuilder::new()
                .case(
                    "T",
                    Template::new()
                        .with_harness("h")
                        .with_param("[n]", json!([1]))
                        .with_variations(vec![Template::new().with_param("m", 1)]),
                )
                .build(),
            BlessErrorKind::Shape,
        ),
        (
            "branch_harness_conflict",
            TemplateSetBuilder::new()
                .case(
                    "P",
                    Template::new()
                        .into_abstract()
                        .with_variations(vec![Template::new().with_harness("h1")]),
                )
                .derived(
                    "C",
                    "P",
                    Template::new().with_variations(vec![Template::new().with_harness("h2")]),
                )
                .build(),
            BlessErrorKind::Conflict,
        ),
        (
            "missing_harness",
            TemplateSetBuilder::new()
                .case("T", Template::new().with_param("a", 1))
                .build(),
            BlessErrorKind::MissingHarness,
        ),
        (
            "duplicate_branches",
            TemplateSetBuilder::new()
                .case(
                    "T",
                    Template::new().with_harness("h").with_variations(vec![
                        Template::new().with_param("n", 1),
                        Template::new().with_param("n", 1),
                    ]),
                )
                .build(),
            BlessErrorKind::NameCollision,
        ),
    ]
}
