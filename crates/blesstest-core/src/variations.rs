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

//! Variation tree expansion into named leaves.

use crate::error::{BlessError, BlessResult};
use crate::limits::Limits;
use crate::naming::variation_name;
use crate::template::{ExpandedCase, Params, ResolvedTemplate, Template};
use std::collections::BTreeMap;
use tracing::trace;

/// What a node inherits from its ancestors.
#[derive(Debug, Clone, Default)]
struct Scope {
    params: Params,
    harness: Option<String>,
    is_abstract: bool,
}

impl Scope {
    /// Merge `node` into the inherited scope: params override, harness
    /// overrides when set, abstractness only ever turns on. Pure; the
    /// parent scope is left untouched.
    fn enter(&self, node: &Template) -> Self {
        let mut params = self.params.clone();
        params.extend(node.params.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self {
            params,
            harness: node.harness.clone().or_else(|| self.harness.clone()),
            is_abstract: self.is_abstract || node.is_abstract,
        }
    }
}

/// Expands resolved templates into leaves, accumulating one run's output.
pub struct VariationExpander<'l> {
    limits: &'l Limits,
    cases: BTreeMap<String, ExpandedCase>,
}

impl<'l> VariationExpander<'l> {
    /// Create an expander with an empty output.
    pub fn new(limits: &'l Limits) -> Self {
        Self {
            limits,
            cases: BTreeMap::new(),
        }
    }

    /// Expand one top-level resolved template under `name`.
    pub fn expand(&mut self, name: &str, template: &ResolvedTemplate) -> BlessResult<()> {
        let scope = Scope::default().enter(template);
        self.expand_node(name, template, &scope, 0)
    }

    /// Consume the expander, returning every leaf produced so far.
    pub fn finish(self) -> BTreeMap<String, ExpandedCase> {
        self.cases
    }

    fn expand_node(
        &mut self,
        name: &str,
        node: &Template,
        scope: &Scope,
        depth: usize,
    ) -> BlessResult<()> {
        if depth > self.limits.max_depth {
            return Err(BlessError::limit(
                name,
                format!(
                    "variation nesting exceeds maximum depth {}",
                    self.limits.max_depth
                ),
            ));
        }

        match node.variations.as_deref() {
            None | Some([]) => self.register_leaf(name, scope),
            Some(children) => {
                for child in children {
                    let child_name = variation_name(name, child);
                    let child_scope = scope.enter(child);
                    self.expand_node(&child_name, child, &child_scope, depth + 1)?;
                }
                Ok(())
            }
        }
    }

    fn register_leaf(&mut self, name: &str, scope: &Scope) -> BlessResult<()> {
        if !scope.is_abstract && scope.harness.as_deref().map_or(true, str::is_empty) {
            return Err(BlessError::missing_harness(
                name,
                "concrete case has no harness, set one on the case or an ancestor",
            ));
        }
        if self.cases.contains_key(name) {
            return Err(BlessError::name_collision(
                name,
                "generated case name already exists; give one of the variations an explicit 'name'",
            ));
        }
        if self.cases.len() >= self.limits.max_cases {
            return Err(BlessError::limit(
                name,
                format!("more than {} cases generated", self.limits.max_cases),
            ));
        }

        trace!(case = name, abstract_case = scope.is_abstract, "registered leaf");
        self.cases.insert(
            name.to_string(),
            ExpandedCase {
                params: scope.params.clone(),
                harness: scope.harness.clone(),
                is_abstract: scope.is_abstract,
            },
        );
        Ok(())
    }
}

/// Expand a whole set of resolved templates.
pub fn expand_variations(
    templates: &BTreeMap<String, ResolvedTemplate>,
    limits: &Limits,
) -> BlessResult<BTreeMap<String, ExpandedCase>> {
    let mut expander = VariationExpander::new(limits);
    for (name, template) in templates {
        expander.expand(name, template)?;
    }
    Ok(expander.finish())
}
