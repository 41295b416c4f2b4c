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

//! Removal of abstract leaves.

use crate::error::{BlessError, BlessResult};
use crate::template::{CaseSet, ConcreteCase, ExpandedCase};
use std::collections::BTreeMap;

/// Drop abstract leaves and publish the rest as concrete cases.
pub fn filter_abstract(expanded: BTreeMap<String, ExpandedCase>) -> BlessResult<CaseSet> {
    let mut cases = CaseSet::new();
    for (name, case) in expanded {
        if case.is_abstract {
            continue;
        }
        let Some(harness) = case.harness.filter(|h| !h.is_empty()) else {
            return Err(BlessError::missing_harness(
                name,
                "concrete case has no harness",
            ));
        };
        cases.insert(
            name,
            ConcreteCase {
                params: case.params,
                harness,
            },
        );
    }
    Ok(cases)
}
