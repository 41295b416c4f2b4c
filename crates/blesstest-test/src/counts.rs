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

//! Fixture counting utilities.

use blesstest_core::{CaseSet, TemplateSet};
use std::collections::BTreeMap;

/// Count explicit variation leaves, ignoring `base` and bracket syntax.
pub fn count_leaves(templates: &TemplateSet) -> usize {
    templates
        .values()
        .map(|case| case.template.leaf_count())
        .sum()
}

/// Count resolved cases per harness.
pub fn count_by_harness(cases: &CaseSet) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for case in cases.values() {
        *counts.entry(case.harness.clone()).or_insert(0) += 1;
    }
    counts
}
