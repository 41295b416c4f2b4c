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

//! Template sets built in code.

use super::builders::TemplateSetBuilder;
use blesstest_core::{Template, TemplateSet};
use serde_json::json;

/// Three plain cases, no inheritance or variations.
pub fn flat() -> TemplateSet {
    TemplateSetBuilder::new()
        .case(
            "add_small",
            Template::new().with_harness("add").with_param("a", 1).with_param("b", 2),
        )
        .case(
            "add_large",
            Template::new()
                .with_harness("add")
                .with_param("a", 1_000_000)
                .with_param("b", 2_000_000),
        )
        .case(
            "echo",
            Template::new().with_harness("identity").with_param("text", "hello"),
        )
        .build()
}

/// `[n]` sweep over three values.
pub fn bracket_sweep() -> TemplateSet {
    TemplateSetBuilder::new()
        .case(
            "T",
            Template::new().with_harness("h").with_param("[n]", json!([1, 2, 3])),
        )
        .build()
}

/// `[[a,b]]` sweep over two pairs.
pub fn multi_bracket() -> TemplateSet {
    TemplateSetBuilder::new()
        .case(
            "T",
            Template::new()
                .with_harness("h")
                .with_param("[[a,b]]", json!([[1, 2], [3, 4]])),
        )
        .build()
}

/// Explicit variations: one named, one generated, one abstract.
pub fn variation_modes() -> TemplateSet {
    TemplateSetBuilder::new()
        .case("Modes", modes())
        .build()
}

/// Three levels of `base`, each contributing two variations.
pub fn base_chain() -> TemplateSet {
    let pair = |key: &str| {
        vec![
            Template::new().with_param(key, 1),
            Template::new().with_param(key, 2),
        ]
    };
    TemplateSetBuilder::new()
        .case(
            "A",
            Template::new()
                .into_abstract()
                .with_harness("h")
                .with_variations(pair("x")),
        )
        .derived("B", "A", Template::new().into_abstract().with_variations(pair("y")))
        .derived("Leaf", "B", Template::new().with_variations(pair("z")))
        .build()
}

/// An abstract skeleton without harness, varied into a concrete case.
pub fn abstract_skeleton() -> TemplateSet {
    TemplateSetBuilder::new()
        .case(
            "Skeleton",
            Template::new()
                .into_abstract()
                .with_param("common", true)
                .with_variations(vec![Template::new().with_name("one").with_harness("h")]),
        )
        .derived("Real", "Skeleton", Template::new().with_param("extra", 1))
        .build()
}

/// A branch whose generated name needs truncation.
pub fn long_names() -> TemplateSet {
    TemplateSetBuilder::new()
        .case(
            "T",
            Template::new().with_harness("h").with_variations(vec![Template::new()
                .with_param("description", "a rather long parameter value")
                .with_param("mode", "exhaustive")]),
        )
        .build()
}

/// Everything together; identical to [`comprehensive_json`](super::comprehensive_json).
pub fn comprehensive() -> TemplateSet {
    TemplateSetBuilder::new()
        .case(
            "Arithmetic",
            Template::new()
                .into_abstract()
                .with_harness("add")
                .with_param("a", 1),
        )
        .derived(
            "Sums",
            "Arithmetic",
            Template::new().with_param("[b]", json!([1, 2, 3])),
        )
        .derived(
            "Pairs",
            "Arithmetic",
            Template::new().with_param("[[a,b]]", json!([[10, 20], [30, 40]])),
        )
        .case("Modes", modes())
        .build()
}

/// No templates at all.
pub fn empty() -> TemplateSet {
    TemplateSet::new()
}

fn modes() -> Template {
    Template::new()
        .with_harness("identity")
        .with_param("payload", "x")
        .with_variations(vec![
            Template::new().with_name("fast").with_param("mode", "fast"),
            Template::new().with_param("mode", "slow").with_param("retries", 3),
            Template::new().with_name("draft").into_abstract(),
        ])
}
