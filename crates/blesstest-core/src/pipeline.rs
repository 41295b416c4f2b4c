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

//! The four-stage resolution pipeline.

use crate::base::resolve_bases;
use crate::brackets::expand_template_set;
use crate::error::BlessResult;
use crate::filter::filter_abstract;
use crate::limits::Limits;
use crate::template::{CaseSet, ResolvedTemplate, TemplateSet};
use crate::variations::expand_variations;
use std::collections::BTreeMap;
use tracing::debug;

/// Resolve a template set into concrete cases using default limits.
///
/// # Examples
///
/// ```
/// use blesstest_core::{preprocess, CaseTemplate, Template, TemplateSet};
/// use serde_json::json;
///
/// let mut templates = TemplateSet::new();
/// templates.insert(
///     "T".to_string(),
///     CaseTemplate::new(Template::new().with_harness("h").with_param("[n]", json!([1, 2]))),
/// );
///
/// let cases = preprocess(&templates).unwrap();
/// assert_eq!(cases.keys().collect::<Vec<_>>(), vec!["T__n_1", "T__n_2"]);
/// assert_eq!(cases["T__n_2"].params["n"], json!(2));
/// ```
pub fn preprocess(templates: &TemplateSet) -> BlessResult<CaseSet> {
    preprocess_with_limits(templates, &Limits::default())
}

/// Resolve a template set into concrete cases.
///
/// Runs bracket expansion, base resolution, variation expansion and
/// abstract filtering in that order. The first error aborts the run.
pub fn preprocess_with_limits(templates: &TemplateSet, limits: &Limits) -> BlessResult<CaseSet> {
    let resolved = resolve_templates(templates, limits)?;
    let expanded = expand_variations(&resolved, limits)?;
    let leaves = expanded.len();
    let cases = filter_abstract(expanded)?;
    debug!(
        templates = templates.len(),
        leaves,
        cases = cases.len(),
        "resolved case file"
    );
    Ok(cases)
}

/// Run only the first two stages: bracket expansion and base resolution.
///
/// The result contains no bracket keys and no `base` references, so it can
/// be fed to the variation expander on its own.
pub fn resolve_templates(
    templates: &TemplateSet,
    limits: &Limits,
) -> BlessResult<BTreeMap<String, ResolvedTemplate>> {
    let expanded = expand_template_set(templates, limits)?;
    resolve_bases(&expanded, limits)
}
