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

//! Builder pattern for creating customizable template set fixtures.

use blesstest_core::{CaseTemplate, Template, TemplateSet};

/// Builder for creating customizable TemplateSet fixtures.
///
/// # Examples
///
/// ```
/// use blesstest_test::fixtures::builders::TemplateSetBuilder;
/// use blesstest_core::Template;
///
/// let templates = TemplateSetBuilder::new()
///     .case("P", Template::new().with_harness("h"))
///     .derived("C", "P", Template::new().with_param("x", 1))
///     .build();
///
/// assert_eq!(templates["C"].base.as_deref(), Some("P"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateSetBuilder {
    templates: TemplateSet,
}

impl TemplateSetBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a template without a base.
    pub fn case(mut self, name: impl Into<String>, template: Template) -> Self {
        self.templates
            .insert(name.into(), CaseTemplate::new(template));
        self
    }

    /// Adds a template inheriting from `base`.
    pub fn derived(
        mut self,
        name: impl Into<String>,
        base: impl Into<String>,
        template: Template,
    ) -> Self {
        self.templates
            .insert(name.into(), CaseTemplate::with_base(base, template));
        self
    }

    /// Builds the template set.
    pub fn build(self) -> TemplateSet {
        self.templates
    }
}
