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

//! Property-based tests for expansion counts and stage composition.

use blesstest_core::variations::expand_variations;
use blesstest_core::{
    preprocess, resolve_templates, CaseTemplate, Limits, Params, Template, TemplateSet,
};
use proptest::collection::{btree_map, btree_set};
use proptest::prelude::*;
use serde_json::json;

fn params_strategy() -> impl Strategy<Value = Params> {
    btree_map("[a-z]{1,6}", any::<i32>().prop_map(|n| json!(n)), 0..5)
}

fn flat_set_strategy() -> impl Strategy<Value = TemplateSet> {
    btree_map(
        "[A-Za-z][A-Za-z0-9]{0,10}",
        ("[a-z]{1,8}", params_strategy()).prop_map(|(harness, params)| {
            CaseTemplate::new(Template {
                params,
                harness: Some(harness),
                ..Template::default()
            })
        }),
        1..20,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: Templates without base, variations or brackets map 1:1.
    #[test]
    fn prop_flat_input_is_identity(templates in flat_set_strategy()) {
        let cases = preprocess(&templates).unwrap();
        prop_assert_eq!(cases.len(), templates.len());
        for (name, case) in &templates {
            let out = &cases[name];
            prop_assert_eq!(&out.params, &case.template.params);
            prop_assert_eq!(Some(&out.harness), case.template.harness.as_ref());
        }
    }

    /// Property: A single sweep yields one case per distinct value.
    #[test]
    fn prop_single_sweep_count(values in btree_set(any::<i64>(), 1..30)) {
        let values: Vec<i64> = values.into_iter().collect();
        let mut templates = TemplateSet::new();
        templates.insert(
            "T".to_string(),
            Template::new().with_harness("h").with_param("[n]", json!(values)).into(),
        );

        let cases = preprocess(&templates).unwrap();
        prop_assert_eq!(cases.len(), values.len());
        for v in &values {
            let case = &cases[&format!("T__n_{}", v)];
            prop_assert_eq!(&case.params["n"], &json!(v));
        }
    }

    /// Property: Two independent sweeps yield their cartesian product.
    #[test]
    fn prop_two_sweeps_multiply(a in 1_usize..12, b in 1_usize..12) {
        let xs: Vec<usize> = (0..a).collect();
        let ys: Vec<usize> = (0..b).collect();
        let mut templates = TemplateSet::new();
        templates.insert(
            "T".to_string(),
            Template::new()
                .with_harness("h")
                .with_param("[x]", json!(xs))
                .with_param("[y]", json!(ys))
                .into(),
        );
        prop_assert_eq!(preprocess(&templates).unwrap().len(), a * b);
    }

    /// Property: Base and child variation trees combine multiplicatively.
    #[test]
    fn prop_base_chain_multiplies(counts in proptest::collection::vec(1_usize..5, 1..4)) {
        let mut templates = TemplateSet::new();
        for (level, count) in counts.iter().enumerate() {
            let branches = (0..*count)
                .map(|i| Template::new().with_param(format!("p{}", level), i))
                .collect();
            let mut template = Template::new().into_abstract().with_variations(branches);
            if level == 0 {
                template = template.with_harness("h");
            }
            let case = if level == 0 {
                CaseTemplate::new(template)
            } else {
                CaseTemplate::with_base(format!("L{}", level - 1), template)
            };
            templates.insert(format!("L{}", level), case);
        }
        templates.insert(
            "Leaf".to_string(),
            CaseTemplate::with_base(format!("L{}", counts.len() - 1), Template::new()),
        );

        let cases = preprocess(&templates).unwrap();
        prop_assert_eq!(cases.len(), counts.iter().product::<usize>());
        prop_assert!(cases.keys().all(|name| name.starts_with("Leaf")));
    }

    /// Property: Resolution is deterministic.
    #[test]
    fn prop_deterministic(templates in flat_set_strategy(), sweep in btree_set(0_u8..50, 1..6)) {
        let mut templates = templates;
        let sweep: Vec<u8> = sweep.into_iter().collect();
        templates.insert(
            "Swept".to_string(),
            Template::new().with_harness("h").with_param("[v]", json!(sweep)).into(),
        );
        let first = preprocess(&templates);
        let second = preprocess(&templates);
        prop_assert_eq!(first, second);
    }

    /// Property: Feeding already resolved templates back in changes nothing.
    #[test]
    fn prop_resolution_is_idempotent(
        base_values in btree_set(0_u8..20, 1..4),
        child_values in btree_set(100_u8..120, 1..4),
    ) {
        let base_values: Vec<u8> = base_values.into_iter().collect();
        let child_values: Vec<u8> = child_values.into_iter().collect();
        let mut templates = TemplateSet::new();
        templates.insert(
            "P".to_string(),
            Template::new()
                .into_abstract()
                .with_harness("h")
                .with_param("[a]", json!(base_values))
                .into(),
        );
        templates.insert(
            "C".to_string(),
            CaseTemplate::with_base("P", Template::new().with_param("[b]", json!(child_values))),
        );

        let limits = Limits::default();
        let resolved = resolve_templates(&templates, &limits).unwrap();
        let expanded = expand_variations(&resolved, &limits).unwrap();

        let again: TemplateSet = resolved
            .into_iter()
            .map(|(name, template)| (name, CaseTemplate::new(template)))
            .collect();
        let reresolved = resolve_templates(&again, &limits).unwrap();
        prop_assert_eq!(expand_variations(&reresolved, &limits).unwrap(), expanded);
    }
}
