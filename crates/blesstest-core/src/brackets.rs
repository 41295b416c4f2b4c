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

//! Bracket-syntax parameter sweeps.
//!
//! A parameter key written as `[name]` or `[[a, b]]` declares a sweep rather
//! than a single value:
//!
//! ```text
//! "params": {
//!     "[n]": [1, 2, 3],              // three branches: n=1, n=2, n=3
//!     "[[a, b]]": [[1, 2], [3, 4]]   // two branches: a=1,b=2 and a=3,b=4
//! }
//! ```
//!
//! Every sweep key at one level contributes a group of assignments; the
//! groups are combined as a Cartesian product and the result replaces the
//! node's `variations`. Expansion runs depth-first over the whole tree.

use crate::error::{BlessError, BlessResult};
use crate::limits::Limits;
use crate::template::{CaseTemplate, Params, Template, TemplateSet};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use tracing::trace;

/// A parsed bracket-syntax parameter key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BracketKey {
    /// `[name]`: one branch per list element.
    Single(String),
    /// `[[n1, n2, ...]]`: one branch per inner list, zipped with the names.
    Multi(Vec<String>),
}

impl BracketKey {
    /// Parameter names this key assigns.
    pub fn names(&self) -> &[String] {
        match self {
            BracketKey::Single(name) => std::slice::from_ref(name),
            BracketKey::Multi(names) => names,
        }
    }
}

/// Checks `\w+`: one or more alphanumeric or underscore characters.
fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '_')
}

/// Parse a parameter key as bracket syntax.
///
/// Returns `None` for ordinary keys, including keys that start with `[` but
/// do not follow the grammar `\[\w+\]` or `\[\[\w+(,\s*\w+)*\]\]`.
///
/// # Examples
///
/// ```
/// use blesstest_core::brackets::{parse_bracket_key, BracketKey};
///
/// assert_eq!(parse_bracket_key("[n]"), Some(BracketKey::Single("n".into())));
/// assert_eq!(
///     parse_bracket_key("[[a, b]]"),
///     Some(BracketKey::Multi(vec!["a".into(), "b".into()]))
/// );
/// assert_eq!(parse_bracket_key("n"), None);
/// assert_eq!(parse_bracket_key("[a b]"), None);
/// ```
pub fn parse_bracket_key(key: &str) -> Option<BracketKey> {
    if let Some(inner) = key.strip_prefix("[[").and_then(|k| k.strip_suffix("]]")) {
        let mut names = Vec::new();
        for (i, part) in inner.split(',').enumerate() {
            // Whitespace is only allowed after a comma.
            let part = if i == 0 { part } else { part.trim_start() };
            if !is_word(part) {
                return None;
            }
            names.push(part.to_string());
        }
        return Some(BracketKey::Multi(names));
    }

    let inner = key.strip_prefix('[')?.strip_suffix(']')?;
    is_word(inner).then(|| BracketKey::Single(inner.to_string()))
}

/// Returns `true` if any parameter key of the node uses bracket syntax.
pub fn has_bracket_keys(params: &Params) -> bool {
    params.keys().any(|k| parse_bracket_key(k).is_some())
}

/// Expand bracket syntax in every template of a set.
///
/// `base` references are kept untouched; they are resolved afterwards.
pub fn expand_template_set(templates: &TemplateSet, limits: &Limits) -> BlessResult<TemplateSet> {
    templates
        .iter()
        .map(|(name, case)| {
            let template = expand_brackets(name, &case.template, limits)?;
            let expanded = CaseTemplate {
                base: case.base.clone(),
                template,
            };
            Ok((name.clone(), expanded))
        })
        .collect()
}

/// Expand bracket syntax in one template tree.
///
/// `case` is the top-level template name used in error messages.
pub fn expand_brackets(case: &str, template: &Template, limits: &Limits) -> BlessResult<Template> {
    expand_node(case, template, limits, 0)
}

fn expand_node(case: &str, template: &Template, limits: &Limits, depth: usize) -> BlessResult<Template> {
    if depth > limits.max_depth {
        return Err(BlessError::limit(
            case,
            format!("variation nesting exceeds maximum depth {}", limits.max_depth),
        ));
    }

    let mut params = Params::new();
    let mut groups = Vec::new();
    for (key, value) in &template.params {
        match parse_bracket_key(key) {
            Some(bracket) => groups.push(sweep_group(case, key, bracket, value)?),
            None => {
                params.insert(key.clone(), value.clone());
            }
        }
    }

    let variations = if groups.is_empty() {
        match &template.variations {
            Some(children) => Some(
                children
                    .iter()
                    .map(|child| expand_node(case, child, limits, depth + 1))
                    .collect::<BlessResult<Vec<_>>>()?,
            ),
            None => None,
        }
    } else {
        if !template.is_leaf() {
            let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
            return Err(BlessError::shape(
                case,
                format!(
                    "bracket keys [{}] cannot be combined with explicit 'variations' at the same level",
                    keys.join(", ")
                ),
            ));
        }
        check_disjoint(case, &groups)?;
        // Generated branches only carry plain `\w+` names, so there is
        // nothing deeper to expand.
        let branches = cartesian_product(case, &groups, limits)?
            .into_iter()
            .map(|params| Template {
                params,
                ..Template::default()
            })
            .collect();
        Some(branches)
    };

    Ok(Template {
        name: template.name.clone(),
        is_abstract: template.is_abstract,
        params,
        harness: template.harness.clone(),
        variations,
    })
}

/// The assignments generated by one bracket key.
struct SweepGroup {
    key: String,
    names: Vec<String>,
    assignments: Vec<Params>,
}

fn sweep_group(case: &str, key: &str, bracket: BracketKey, value: &Value) -> BlessResult<SweepGroup> {
    let Value::Array(items) = value else {
        return Err(BlessError::shape(
            case,
            format!("value of '{}' must be a list, found {}", key, json_kind(value)),
        ));
    };
    if items.is_empty() {
        return Err(BlessError::shape(
            case,
            format!("value of '{}' must contain at least one entry", key),
        ));
    }

    let assignments = match &bracket {
        BracketKey::Single(name) => items
            .iter()
            .map(|item| Params::from([(name.clone(), item.clone())]))
            .collect(),
        BracketKey::Multi(names) => {
            let mut seen = BTreeSet::new();
            for name in names {
                if !seen.insert(name.as_str()) {
                    return Err(BlessError::shape(
                        case,
                        format!("'{}' names parameter '{}' more than once", key, name),
                    ));
                }
            }
            items
                .iter()
                .enumerate()
                .map(|(i, item)| zip_row(case, key, names, i, item))
                .collect::<BlessResult<Vec<_>>>()?
        }
    };

    trace!(case, key, branches = items.len(), "expanded bracket key");

    Ok(SweepGroup {
        key: key.to_string(),
        names: bracket.names().to_vec(),
        assignments,
    })
}

fn zip_row(case: &str, key: &str, names: &[String], index: usize, row: &Value) -> BlessResult<Params> {
    let Value::Array(values) = row else {
        return Err(BlessError::shape(
            case,
            format!(
                "entry {} of '{}' must be a list, found {}",
                index,
                key,
                json_kind(row)
            ),
        ));
    };
    if values.len() != names.len() {
        return Err(BlessError::shape(
            case,
            format!(
                "entry {} of '{}' has {} values, expected {}",
                index,
                key,
                values.len(),
                names.len()
            ),
        ));
    }
    Ok(names.iter().cloned().zip(values.iter().cloned()).collect())
}

fn check_disjoint(case: &str, groups: &[SweepGroup]) -> BlessResult<()> {
    let mut owners: BTreeMap<&str, &str> = BTreeMap::new();
    for group in groups {
        for name in &group.names {
            if let Some(previous) = owners.insert(name.as_str(), group.key.as_str()) {
                return Err(BlessError::shape(
                    case,
                    format!(
                        "parameter '{}' is swept by both '{}' and '{}'",
                        name, previous, group.key
                    ),
                ));
            }
        }
    }
    Ok(())
}

fn cartesian_product(case: &str, groups: &[SweepGroup], limits: &Limits) -> BlessResult<Vec<Params>> {
    let size = groups
        .iter()
        .try_fold(1usize, |acc, g| acc.checked_mul(g.assignments.len()));
    match size {
        Some(n) if n <= limits.max_sweep_size => {}
        _ => {
            return Err(BlessError::limit(
                case,
                format!(
                    "bracket sweep generates more than {} branches",
                    limits.max_sweep_size
                ),
            ))
        }
    }

    let mut combos = vec![Params::new()];
    for group in groups {
        combos = combos
            .iter()
            .flat_map(|prefix| {
                group.assignments.iter().map(move |assignment| {
                    let mut merged = prefix.clone();
                    merged.extend(assignment.iter().map(|(k, v)| (k.clone(), v.clone())));
                    merged
                })
            })
            .collect();
    }
    Ok(combos)
}

/// Short name of a JSON value's type, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
