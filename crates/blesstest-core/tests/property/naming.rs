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

//! Property-based tests for generated variation names.

use blesstest_core::naming::{
    branch_tokens, short_hash, variation_name, HASH_CHARS, MAX_TOKEN_CHARS, SEPARATOR,
};
use blesstest_core::Template;
use proptest::prelude::*;

fn branch_strategy() -> impl Strategy<Value = Template> {
    (
        proptest::option::of("[a-z]{1,10}"),
        proptest::collection::btree_map("[a-z_]{1,12}", "[ -~]{0,24}", 0..6),
    )
        .prop_map(|(harness, params)| {
            let mut branch = Template::new();
            branch.harness = harness;
            for (k, v) in params {
                branch = branch.with_param(k, v);
            }
            branch
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: The suffix after the parent name never exceeds the bound.
    #[test]
    fn prop_name_length_bounded(parent in "[A-Za-z]{1,10}", branch in branch_strategy()) {
        let name = variation_name(&parent, &branch);
        let suffix_chars = name.chars().count() - parent.chars().count();
        prop_assert!(suffix_chars <= 2 * SEPARATOR.len() + MAX_TOKEN_CHARS + HASH_CHARS);
    }

    /// Property: Names are stable across repeated calls.
    #[test]
    fn prop_name_stable(parent in "[A-Za-z]{1,10}", branch in branch_strategy()) {
        prop_assert_eq!(variation_name(&parent, &branch), variation_name(&parent, &branch.clone()));
    }

    /// Property: Short token strings appear verbatim after the parent.
    #[test]
    fn prop_short_tokens_verbatim(parent in "[A-Za-z]{1,10}", branch in branch_strategy()) {
        let joined = branch_tokens(&branch).join(SEPARATOR);
        let name = variation_name(&parent, &branch);
        if joined.is_empty() {
            prop_assert_eq!(name, parent);
        } else if joined.chars().count() <= MAX_TOKEN_CHARS {
            prop_assert_eq!(name, format!("{}{}{}", parent, SEPARATOR, joined));
        } else {
            prop_assert!(name.ends_with(&short_hash(&joined)));
        }
    }

    /// Property: An explicit name always overrides the generated tokens.
    #[test]
    fn prop_explicit_name_wins(
        parent in "[A-Za-z]{1,10}",
        label in "[a-z0-9]{1,20}",
        branch in branch_strategy(),
    ) {
        let named = branch.with_name(label.clone());
        prop_assert_eq!(variation_name(&parent, &named), format!("{}__{}", parent, label));
    }

    /// Property: Hash suffixes are always three URL-safe characters.
    #[test]
    fn prop_short_hash_shape(input in ".*") {
        let hash = short_hash(&input);
        prop_assert_eq!(hash.len(), HASH_CHARS);
        prop_assert!(hash.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }
}
