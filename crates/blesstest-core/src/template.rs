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

//! Template and case data model.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Parameter mapping of a template or case.
pub type Params = BTreeMap<String, Value>;

/// Top-level input: case name to template.
pub type TemplateSet = BTreeMap<String, CaseTemplate>;

/// Final output: case name to concrete case.
pub type CaseSet = BTreeMap<String, ConcreteCase>;

/// A template node: a top-level template body or a variation branch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Template {
    /// Explicit branch name, used instead of the generated parameter tokens.
    pub name: Option<String>,
    /// Abstract templates are never published as runnable cases.
    pub is_abstract: bool,
    /// Parameters set by this node.
    pub params: Params,
    /// Harness set by this node.
    pub harness: Option<String>,
    /// Nested alternative branches. `None` marks a leaf.
    pub variations: Option<Vec<Template>>,
}

/// A template whose `base` reference has been resolved.
pub type ResolvedTemplate = Template;

impl Template {
    /// Create an empty, concrete template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explicit branch name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the harness.
    pub fn with_harness(mut self, harness: impl Into<String>) -> Self {
        self.harness = Some(harness.into());
        self
    }

    /// Set a single parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Replace the variation list.
    pub fn with_variations(mut self, variations: Vec<Template>) -> Self {
        self.variations = Some(variations);
        self
    }

    /// Mark the template abstract.
    pub fn into_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Returns `true` if the node has no (non-empty) variations.
    pub fn is_leaf(&self) -> bool {
        self.variations.as_ref().map_or(true, |v| v.is_empty())
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match &self.variations {
            Some(children) if !children.is_empty() => {
                children.iter().map(Template::leaf_count).sum()
            }
            _ => 1,
        }
    }

    /// Variation nesting depth below this node (0 for a leaf).
    pub fn depth(&self) -> usize {
        match &self.variations {
            Some(children) if !children.is_empty() => {
                1 + children.iter().map(Template::depth).max().unwrap_or(0)
            }
            _ => 0,
        }
    }
}

/// A top-level template as written in a case file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CaseTemplate {
    /// Name of the top-level template this one inherits from.
    pub base: Option<String>,
    /// The template body.
    pub template: Template,
}

impl CaseTemplate {
    /// Wrap a template body without a base.
    pub fn new(template: Template) -> Self {
        Self {
            base: None,
            template,
        }
    }

    /// Wrap a template body inheriting from `base`.
    pub fn with_base(base: impl Into<String>, template: Template) -> Self {
        Self {
            base: Some(base.into()),
            template,
        }
    }
}

impl From<Template> for CaseTemplate {
    fn from(template: Template) -> Self {
        Self::new(template)
    }
}

/// A leaf produced by variation expansion, before abstract filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedCase {
    /// Fully merged parameters.
    pub params: Params,
    /// Own or inherited harness. Only abstract leaves may lack one.
    pub harness: Option<String>,
    /// Own or inherited abstract flag.
    pub is_abstract: bool,
}

/// A fully resolved, runnable test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcreteCase {
    /// Fully merged parameters.
    pub params: Params,
    /// Identifier of the harness the case runs against.
    pub harness: String,
}
