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

//! `base` inheritance resolution.
//!
//! Top-level templates may name another top-level template as their `base`.
//! The references form a DAG. Each chain is walked up to its root (or to an
//! already resolved template) and merged back down, with memoization; a
//! template seen twice on one walk is a cycle.
//!
//! Merging a template onto its base:
//!
//! - `params`: base values overridden key by key by the template's own
//! - `harness`: the template's own, else the base's
//! - `is_abstract`: the template's own only
//! - `variations`: the two trees are cross-merged so that every base branch
//!   is combined with every branch of the template

use crate::error::{BlessError, BlessResult};
use crate::limits::Limits;
use crate::template::{Params, ResolvedTemplate, Template, TemplateSet};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// Resolve every `base` reference of a template set.
///
/// # Errors
///
/// - `Reference` if a `base` names a template that does not exist
/// - `Cycle` if a chain of `base` references loops
/// - `Conflict` if base and template variation trees disagree
/// - `Limit` if the merged trees exceed `max_cases` leaves or `max_depth`
///   nesting
pub fn resolve_bases(
    templates: &TemplateSet,
    limits: &Limits,
) -> BlessResult<BTreeMap<String, ResolvedTemplate>> {
    let mut resolver = BaseResolver::new(templates, limits);
    templates
        .keys()
        .map(|name| Ok((name.clone(), resolver.resolve(name)?)))
        .collect()
}

/// Memoized resolver, local to one run.
///
/// Chains are walked iteratively, so their length is bounded only by the
/// template set itself.
struct BaseResolver<'a> {
    templates: &'a TemplateSet,
    limits: &'a Limits,
    resolved: HashMap<String, ResolvedTemplate>,
    /// Leaves of every template resolved so far.
    leaves: usize,
}

impl<'a> BaseResolver<'a> {
    fn new(templates: &'a TemplateSet, limits: &'a Limits) -> Self {
        Self {
            templates,
            limits,
            resolved: HashMap::new(),
            leaves: 0,
        }
    }

    fn resolve(&mut self, name: &str) -> BlessResult<ResolvedTemplate> {
        if let Some(done) = self.resolved.get(name) {
            return Ok(done.clone());
        }

        // Walk up the chain until a root or an already resolved template.
        let templates = self.templates;
        let mut chain: Vec<&str> = Vec::new();
        let mut on_chain: HashSet<&str> = HashSet::new();
        let mut current = name;
        let mut referrer: Option<&str> = None;
        let mut merged = loop {
            if let Some(done) = self.resolved.get(current) {
                break Some(done.clone());
            }
            let Some(case) = templates.get(current) else {
                return Err(BlessError::reference(
                    referrer.unwrap_or(current),
                    format!("base case '{}' not found", current),
                ));
            };
            if !on_chain.insert(current) {
                let start = chain.iter().position(|n| *n == current).unwrap_or(0);
                let mut cycle: Vec<&str> = chain[start..].to_vec();
                cycle.push(current);
                return Err(BlessError::cycle(
                    current,
                    format!("circular base chain {}", cycle.join(" -> ")),
                ));
            }
            chain.push(current);
            match &case.base {
                None => break None,
                Some(base_name) => {
                    referrer = Some(current);
                    current = base_name.as_str();
                }
            }
        };

        // Merge back down from the root towards `name`.
        for &link in chain.iter().rev() {
            let case = &templates[link];
            let resolved = match merged {
                None => case.template.clone(),
                Some(base) => {
                    debug!(case = link, "merging base template");
                    merge_base(link, &base, &case.template, self.limits)?
                }
            };
            self.record(link, &resolved)?;
            merged = Some(resolved);
        }

        merged.ok_or_else(|| BlessError::reference(name, format!("base case '{}' not found", name)))
    }

    /// Memoize a resolved template and count its leaves against `max_cases`.
    fn record(&mut self, name: &str, resolved: &Template) -> BlessResult<()> {
        self.leaves = self.leaves.saturating_add(resolved.leaf_count());
        if self.leaves > self.limits.max_cases {
            return Err(BlessError::limit(
                name,
                format!("more than {} cases generated", self.limits.max_cases),
            ));
        }
        self.resolved.insert(name.to_string(), resolved.clone());
        Ok(())
    }
}

/// Merge a template onto its resolved base.
pub fn merge_base(
    case: &str,
    base: &Template,
    current: &Template,
    limits: &Limits,
) -> BlessResult<Template> {
    let mut params = base.params.clone();
    params.extend(current.params.iter().map(|(k, v)| (k.clone(), v.clone())));

    Ok(Template {
        name: current.name.clone(),
        is_abstract: current.is_abstract,
        params,
        harness: current.harness.clone().or_else(|| base.harness.clone()),
        variations: cross_merge(case, base, current, limits)?,
    })
}

/// Harness and parameters that one side of a merge sets.
#[derive(Debug, Clone, Default)]
struct Fields {
    params: Params,
    harness: Option<String>,
}

impl Fields {
    fn own(template: &Template) -> Self {
        Self {
            params: template.params.clone(),
            harness: template.harness.clone(),
        }
    }

    /// Fields after descending into `branch`.
    fn overlay(&self, branch: &Template) -> Self {
        let mut params = self.params.clone();
        params.extend(branch.params.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self {
            params,
            harness: branch.harness.clone().or_else(|| self.harness.clone()),
        }
    }
}

/// Combine the base's variation tree with the template's own.
///
/// Base branches become the outer level; the template's own variations are
/// attached below every base leaf. The size of the product is checked
/// against `limits` before any of it is built.
fn cross_merge(
    case: &str,
    base_template: &Template,
    current: &Template,
    limits: &Limits,
) -> BlessResult<Option<Vec<Template>>> {
    let base = base_template.variations.as_deref().filter(|b| !b.is_empty());
    let own = current.variations.as_deref().filter(|v| !v.is_empty());

    match (base, own) {
        (None, _) => Ok(current.variations.clone()),
        (Some(base), None) => {
            check_subtree(case, &Fields::own(current), base)?;
            Ok(Some(base.to_vec()))
        }
        (Some(base), Some(own)) => {
            check_product(case, base_template, current, limits)?;
            check_subtree(case, &Fields::own(current), base)?;
            let mut merged = Vec::with_capacity(base.len());
            for branch in base {
                if let Some(combined) = attach(case, branch, own, &Fields::default())? {
                    merged.push(combined);
                }
            }
            Ok(Some(merged))
        }
    }
}

/// Every base leaf receives a copy of the template's own tree, so leaves
/// multiply and nesting depths add up.
fn check_product(case: &str, base: &Template, current: &Template, limits: &Limits) -> BlessResult<()> {
    let leaves = base.leaf_count().saturating_mul(current.leaf_count());
    if leaves > limits.max_cases {
        return Err(BlessError::limit(
            case,
            format!(
                "merging the base variations generates {} cases, more than {}",
                leaves, limits.max_cases
            ),
        ));
    }
    let depth = base.depth() + current.depth();
    if depth > limits.max_depth {
        return Err(BlessError::limit(
            case,
            format!("variation nesting exceeds maximum depth {}", limits.max_depth),
        ));
    }
    Ok(())
}

/// Attach `children` below every leaf of the base branch.
///
/// `path` accumulates what the base branches above `branch` set.
fn attach(
    case: &str,
    branch: &Template,
    children: &[Template],
    path: &Fields,
) -> BlessResult<Option<Template>> {
    let path = path.overlay(branch);

    let variations = match branch.variations.as_deref() {
        None | Some([]) => {
            check_subtree(case, &path, children)?;
            children.to_vec()
        }
        Some(nested) => {
            let mut out = Vec::with_capacity(nested.len());
            for inner in nested {
                if let Some(combined) = attach(case, inner, children, &path)? {
                    out.push(combined);
                }
            }
            out
        }
    };

    if variations.is_empty() {
        return Ok(None);
    }

    Ok(Some(Template {
        name: branch.name.clone(),
        is_abstract: branch.is_abstract,
        params: branch.params.clone(),
        harness: branch.harness.clone(),
        variations: Some(variations),
    }))
}

/// Check every node of `nodes` (recursively) against `fields`.
fn check_subtree(case: &str, fields: &Fields, nodes: &[Template]) -> BlessResult<()> {
    for node in nodes {
        check_compatible(case, fields, node)?;
        if let Some(children) = &node.variations {
            check_subtree(case, fields, children)?;
        }
    }
    Ok(())
}

/// Two sides conflict when both set the harness, or the same parameter,
/// to different values.
fn check_compatible(case: &str, fields: &Fields, node: &Template) -> BlessResult<()> {
    if let (Some(ours), Some(theirs)) = (&fields.harness, &node.harness) {
        if ours != theirs {
            return Err(BlessError::conflict(
                case,
                format!(
                    "base variation and template disagree on harness: '{}' vs '{}'",
                    ours, theirs
                ),
            ));
        }
    }

    for (key, value) in &node.params {
        if let Some(existing) = fields.params.get(key) {
            if existing != value {
                return Err(BlessError::conflict(
                    case,
                    format!(
                        "base variation and template disagree on parameter '{}': {} vs {}",
                        key, existing, value
                    ),
                ));
            }
        }
    }
    Ok(())
}
