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

//! End-to-end resolution scenarios across all four stages.

use blesstest_core::naming::short_hash;
use blesstest_core::variations::expand_variations;
use blesstest_core::{
    preprocess, resolve_templates, BlessErrorKind, CaseTemplate, Limits, Template, TemplateSet,
};
use serde_json::json;

fn set(entries: Vec<(&str, CaseTemplate)>) -> TemplateSet {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn names(templates: &TemplateSet) -> Vec<String> {
    preprocess(templates).unwrap().into_keys().collect()
}

// ==================== Base inheritance tests ====================

#[test]
fn test_parameter_override_through_base() {
    let templates = set(vec![
        (
            "P",
            Template::new()
                .with_harness("h")
                .with_param("x", 1)
                .with_param("y", 2)
                .into(),
        ),
        (
            "C",
            CaseTemplate::with_base("P", Template::new().with_param("y", 3)),
        ),
    ]);
    let cases = preprocess(&templates).unwrap();
    assert_eq!(cases["C"].params["x"], json!(1));
    assert_eq!(cases["C"].params["y"], json!(3));
    assert_eq!(cases["P"].params["y"], json!(2));
}

#[test]
fn test_cycle_detected() {
    let templates = set(vec![
        ("A", CaseTemplate::with_base("B", Template::new())),
        ("B", CaseTemplate::with_base("A", Template::new())),
    ]);
    let err = preprocess(&templates).unwrap_err();
    assert_eq!(err.kind, BlessErrorKind::Cycle);
    assert!(err.message.contains("A -> B -> A"), "{}", err.message);
}

#[test]
fn test_self_reference_is_a_cycle() {
    let templates = set(vec![("A", CaseTemplate::with_base("A", Template::new()))]);
    let err = preprocess(&templates).unwrap_err();
    assert_eq!(err.kind, BlessErrorKind::Cycle);
}

#[test]
fn test_missing_base() {
    let templates = set(vec![("A", CaseTemplate::with_base("Z", Template::new()))]);
    let err = preprocess(&templates).unwrap_err();
    assert_eq!(err.kind, BlessErrorKind::Reference);
    assert_eq!(err.case, "A");
    assert!(err.message.contains("'Z'"));
}

#[test]
fn test_three_level_chain_combines_every_level() {
    let templates = set(vec![
        (
            "A",
            Template::new()
                .into_abstract()
                .with_harness("h")
                .with_variations(vec![
                    Template::new().with_param("x", 1),
                    Template::new().with_param("x", 2),
                ])
                .into(),
        ),
        (
            "B",
            CaseTemplate::with_base(
                "A",
                Template::new().into_abstract().with_variations(vec![
                    Template::new().with_param("y", 1),
                    Template::new().with_param("y", 2),
                ]),
            ),
        ),
        (
            "C",
            CaseTemplate::with_base(
                "B",
                Template::new().with_variations(vec![
                    Template::new().with_param("z", 1),
                    Template::new().with_param("z", 2),
                ]),
            ),
        ),
    ]);

    let cases = preprocess(&templates).unwrap();
    assert_eq!(cases.len(), 8);
    for x in 1..=2 {
        for y in 1..=2 {
            for z in 1..=2 {
                let name = format!("C__x_{}__y_{}__z_{}", x, y, z);
                let case = &cases[&name];
                assert_eq!(case.harness, "h");
                assert_eq!(case.params["x"], json!(x));
                assert_eq!(case.params["y"], json!(y));
                assert_eq!(case.params["z"], json!(z));
            }
        }
    }
}

#[test]
fn test_concrete_middle_of_chain_is_published() {
    let templates = set(vec![
        (
            "A",
            Template::new()
                .with_harness("h")
                .with_variations(vec![Template::new().with_param("x", 1)])
                .into(),
        ),
        (
            "B",
            CaseTemplate::with_base(
                "A",
                Template::new().with_variations(vec![Template::new().with_param("y", 1)]),
            ),
        ),
    ]);
    assert_eq!(names(&templates), vec!["A__x_1", "B__x_1__y_1"]);
}

#[test]
fn test_abstract_is_not_inherited_through_base() {
    let templates = set(vec![
        (
            "T",
            Template::new()
                .into_abstract()
                .with_variations(vec![Template::new().with_name("a").with_harness("h")])
                .into(),
        ),
        ("S", CaseTemplate::with_base("T", Template::new())),
    ]);
    // T__a inherits T's abstractness through nesting; S does not.
    assert_eq!(names(&templates), vec!["S__a"]);
}

// ==================== Conflict tests ====================

#[test]
fn test_conflicting_branch_harness() {
    let templates = set(vec![
        (
            "P",
            Template::new()
                .into_abstract()
                .with_variations(vec![Template::new().with_harness("h1")])
                .into(),
        ),
        (
            "C",
            CaseTemplate::with_base(
                "P",
                Template::new().with_variations(vec![Template::new().with_harness("h2")]),
            ),
        ),
    ]);
    let err = preprocess(&templates).unwrap_err();
    assert_eq!(err.kind, BlessErrorKind::Conflict);
    assert_eq!(err.case, "C");
}

#[test]
fn test_conflicting_branch_parameter() {
    let templates = set(vec![
        (
            "P",
            Template::new()
                .with_harness("h")
                .with_variations(vec![Template::new().with_param("n", 1)])
                .into(),
        ),
        (
            "C",
            CaseTemplate::with_base(
                "P",
                Template::new().with_variations(vec![Template::new().with_param("n", 2)]),
            ),
        ),
    ]);
    assert_eq!(
        preprocess(&templates).unwrap_err().kind,
        BlessErrorKind::Conflict
    );
}

#[test]
fn test_top_level_parameter_against_base_branch() {
    let templates = set(vec![
        (
            "P",
            Template::new()
                .with_harness("h")
                .with_variations(vec![Template::new().with_param("n", 1)])
                .into(),
        ),
        (
            "C",
            CaseTemplate::with_base("P", Template::new().with_param("n", 5)),
        ),
    ]);
    assert_eq!(
        preprocess(&templates).unwrap_err().kind,
        BlessErrorKind::Conflict
    );
}

#[test]
fn test_equal_values_do_not_conflict() {
    let templates = set(vec![
        (
            "P",
            Template::new()
                .with_harness("h")
                .with_variations(vec![Template::new().with_harness("h").with_param("n", 1)])
                .into(),
        ),
        (
            "C",
            CaseTemplate::with_base(
                "P",
                Template::new().with_variations(vec![Template::new().with_param("n", 1)]),
            ),
        ),
    ]);
    let cases = preprocess(&templates).unwrap();
    assert!(cases.contains_key("C__h__n_1__n_1"));
}

// ==================== Bracket syntax tests ====================

#[test]
fn test_single_bracket_expansion() {
    let templates = set(vec![(
        "T",
        Template::new()
            .with_harness("h")
            .with_param("[n]", json!([1, 2, 3]))
            .into(),
    )]);
    let cases = preprocess(&templates).unwrap();
    assert_eq!(
        cases.keys().cloned().collect::<Vec<_>>(),
        vec!["T__n_1", "T__n_2", "T__n_3"]
    );
    assert_eq!(cases["T__n_2"].params, [("n".to_string(), json!(2))].into());
}

#[test]
fn test_multi_bracket_expansion() {
    let templates = set(vec![(
        "T",
        Template::new()
            .with_harness("h")
            .with_param("[[a,b]]", json!([[1, 2], [3, 4]]))
            .into(),
    )]);
    let cases = preprocess(&templates).unwrap();
    assert_eq!(cases.len(), 2);
    assert_eq!(cases["T__a_1__b_2"].params["b"], json!(2));
    assert_eq!(cases["T__a_3__b_4"].params["a"], json!(3));
}

#[test]
fn test_multi_bracket_length_mismatch() {
    let templates = set(vec![(
        "T",
        Template::new()
            .with_harness("h")
            .with_param("[[a,b]]", json!([[1, 2], [3]]))
            .into(),
    )]);
    let err = preprocess(&templates).unwrap_err();
    assert_eq!(err.kind, BlessErrorKind::Shape);
    assert_eq!(err.case, "T");
}

#[test]
fn test_brackets_beside_variations_rejected() {
    let templates = set(vec![(
        "T",
        Template::new()
            .with_harness("h")
            .with_param("[n]", json!([1]))
            .with_variations(vec![Template::new().with_param("m", 1)])
            .into(),
    )]);
    assert_eq!(
        preprocess(&templates).unwrap_err().kind,
        BlessErrorKind::Shape
    );
}

#[test]
fn test_brackets_inside_variation() {
    let templates = set(vec![(
        "T",
        Template::new()
            .with_harness("h")
            .with_variations(vec![Template::new()
                .with_name("fast")
                .with_param("[n]", json!([1, 2]))])
            .into(),
    )]);
    assert_eq!(names(&templates), vec!["T__fast__n_1", "T__fast__n_2"]);
}

#[test]
fn test_bracket_product_with_plain_params() {
    let templates = set(vec![(
        "T",
        Template::new()
            .with_harness("h")
            .with_param("fixed", "yes")
            .with_param("[a]", json!(["x", "y"]))
            .with_param("[b]", json!([true, false]))
            .into(),
    )]);
    let cases = preprocess(&templates).unwrap();
    assert_eq!(cases.len(), 4);
    assert_eq!(cases["T__a_x__b_true"].params["fixed"], json!("yes"));
    assert!(cases.contains_key("T__a_y__b_false"));
}

// ==================== Abstract filtering tests ====================

#[test]
fn test_abstract_without_harness_never_published() {
    let templates = set(vec![
        (
            "Skeleton",
            Template::new()
                .into_abstract()
                .with_param("common", 1)
                .with_variations(vec![Template::new().with_name("one").with_harness("h")])
                .into(),
        ),
        (
            "Real",
            CaseTemplate::with_base("Skeleton", Template::new().with_param("extra", 2)),
        ),
    ]);
    let cases = preprocess(&templates).unwrap();
    assert_eq!(cases.keys().collect::<Vec<_>>(), vec!["Real__one"]);
    assert_eq!(cases["Real__one"].params["common"], json!(1));
    assert_eq!(cases["Real__one"].params["extra"], json!(2));
}

#[test]
fn test_concrete_descendant_cannot_unset_abstract() {
    let templates = set(vec![(
        "T",
        Template::new()
            .into_abstract()
            .with_harness("h")
            .with_variations(vec![Template::new().with_param("n", 1)])
            .into(),
    )]);
    assert!(preprocess(&templates).unwrap().is_empty());
}

#[test]
fn test_missing_harness_names_the_leaf() {
    let templates = set(vec![(
        "T",
        Template::new()
            .with_variations(vec![
                Template::new().with_name("ok").with_harness("h"),
                Template::new().with_name("broken"),
            ])
            .into(),
    )]);
    let err = preprocess(&templates).unwrap_err();
    assert_eq!(err.kind, BlessErrorKind::MissingHarness);
    assert_eq!(err.case, "T__broken");
}

// ==================== Naming tests ====================

#[test]
fn test_long_name_truncated_with_stable_hash() {
    let templates = set(vec![(
        "T",
        Template::new()
            .with_harness("h")
            .with_variations(vec![Template::new()
                .with_param("description", "a rather long parameter value")
                .with_param("mode", "exhaustive")])
            .into(),
    )]);
    let joined = "description_a rather long parameter value__mode_exhaustive";
    let expected = format!("T__{}__{}", &joined[..32], short_hash(joined));

    assert_eq!(names(&templates), vec![expected.clone()]);
    assert_eq!(names(&templates), vec![expected]);
}

#[test]
fn test_generated_name_colliding_with_top_level() {
    let templates = set(vec![
        (
            "T",
            Template::new()
                .with_harness("h")
                .with_variations(vec![Template::new().with_name("x")])
                .into(),
        ),
        ("T__x", Template::new().with_harness("h").into()),
    ]);
    let err = preprocess(&templates).unwrap_err();
    assert_eq!(err.kind, BlessErrorKind::NameCollision);
    assert_eq!(err.case, "T__x");
}

// ==================== Stage composition tests ====================

#[test]
fn test_resolved_templates_expand_the_same_way() {
    let templates = set(vec![
        (
            "P",
            Template::new()
                .into_abstract()
                .with_harness("h")
                .with_param("[mode]", json!(["a", "b"]))
                .into(),
        ),
        (
            "C",
            CaseTemplate::with_base(
                "P",
                Template::new().with_variations(vec![
                    Template::new().with_param("n", 1),
                    Template::new().with_name("big").with_param("n", 100),
                ]),
            ),
        ),
    ]);

    let limits = Limits::default();
    let resolved = resolve_templates(&templates, &limits).unwrap();
    let direct = expand_variations(&resolved, &limits).unwrap();

    let rewrapped: TemplateSet = resolved
        .into_iter()
        .map(|(name, template)| (name, CaseTemplate::new(template)))
        .collect();
    let again = resolve_templates(&rewrapped, &limits).unwrap();
    assert_eq!(expand_variations(&again, &limits).unwrap(), direct);
    assert_eq!(preprocess(&rewrapped).unwrap(), preprocess(&templates).unwrap());
}
