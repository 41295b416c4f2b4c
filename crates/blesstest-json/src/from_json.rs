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

//! JSON to template set conversion

use crate::jsonc::strip_jsonc;
use blesstest_core::{json_kind, CaseTemplate, Params, Template, TemplateSet};
use serde_json::{Map, Value as JsonValue};
use tracing::debug;

/// Default maximum variation nesting depth for case files
///
/// Matches the engine's default so that anything the loader accepts can
/// be resolved with default limits.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Fields a template object may carry at any level.
const TEMPLATE_FIELDS: &[&str] = &["abstract", "params", "harness", "variations", "name"];

/// Errors that can occur while loading a case file
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JsonConversionError {
    /// JSON parsing failed
    #[error("JSON parse error: {0}")]
    ParseError(String),

    /// Root value must be an object
    #[error("Root must be a JSON object, found {0}")]
    InvalidRoot(String),

    /// A field holds a value of the wrong type
    #[error("{path}: expected {expected}, found {found}")]
    InvalidField {
        /// Location of the offending value
        path: String,
        /// Expected JSON kind
        expected: &'static str,
        /// Actual JSON kind
        found: &'static str,
    },

    /// A template object carries a field that is not part of the format
    #[error("{path}: unknown field '{field}'")]
    UnknownField {
        /// Location of the template object
        path: String,
        /// Name of the unknown field
        field: String,
    },

    /// `base` is only meaningful on top-level templates
    #[error("{0}: 'base' is only allowed on top-level templates")]
    BaseInVariation(String),

    /// Maximum nesting depth exceeded
    #[error("Maximum nesting depth ({0}) exceeded at {1}")]
    MaxDepthExceeded(usize, String),

    /// Serializing output failed
    #[error("JSON serialization error: {0}")]
    SerializeError(String),
}

impl From<serde_json::Error> for JsonConversionError {
    fn from(err: serde_json::Error) -> Self {
        JsonConversionError::ParseError(err.to_string())
    }
}

/// Configuration for loading case files
///
/// # Examples
///
/// ```
/// use blesstest_json::FromJsonConfig;
///
/// // Default configuration: comments allowed, unknown fields rejected
/// let config = FromJsonConfig::default();
/// assert!(config.allow_comments);
///
/// // Plain JSON with a shallow nesting bound
/// let strict = FromJsonConfig::builder()
///     .allow_comments(false)
///     .max_depth(16)
///     .build();
/// assert_eq!(strict.max_depth, Some(16));
/// ```
#[derive(Debug, Clone)]
pub struct FromJsonConfig {
    /// Accept `//` and `/* */` comments and trailing commas (default: true)
    ///
    /// This is the JSONC dialect only. Other JSON5 syntax such as
    /// single-quoted strings, unquoted keys, hex numbers or `NaN` is still
    /// a parse error.
    pub allow_comments: bool,

    /// Reject fields that are not part of the template format (default: true)
    pub deny_unknown_fields: bool,

    /// Maximum variation nesting depth (default: 128)
    ///
    /// Set to `None` to disable.
    pub max_depth: Option<usize>,
}

impl Default for FromJsonConfig {
    fn default() -> Self {
        Self {
            allow_comments: true,
            deny_unknown_fields: true,
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl FromJsonConfig {
    /// Create a new builder for configuring case file loading
    pub fn builder() -> FromJsonConfigBuilder {
        FromJsonConfigBuilder::default()
    }
}

/// Builder for `FromJsonConfig`
#[derive(Debug, Clone)]
pub struct FromJsonConfigBuilder {
    allow_comments: bool,
    deny_unknown_fields: bool,
    max_depth: Option<usize>,
}

impl Default for FromJsonConfigBuilder {
    fn default() -> Self {
        let defaults = FromJsonConfig::default();
        Self {
            allow_comments: defaults.allow_comments,
            deny_unknown_fields: defaults.deny_unknown_fields,
            max_depth: defaults.max_depth,
        }
    }
}

impl FromJsonConfigBuilder {
    /// Accept or reject JSONC comments and trailing commas (not full JSON5)
    pub fn allow_comments(mut self, allow: bool) -> Self {
        self.allow_comments = allow;
        self
    }

    /// Reject or ignore unknown template fields
    pub fn deny_unknown_fields(mut self, deny: bool) -> Self {
        self.deny_unknown_fields = deny;
        self
    }

    /// Set the maximum variation nesting depth
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Disable the nesting limit (only for trusted input)
    pub fn unlimited(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Build the configuration
    pub fn build(self) -> FromJsonConfig {
        FromJsonConfig {
            allow_comments: self.allow_comments,
            deny_unknown_fields: self.deny_unknown_fields,
            max_depth: self.max_depth,
        }
    }
}

/// Load a case file from JSON or JSONC text with default configuration
///
/// # Examples
///
/// ```
/// use blesstest_json::from_json;
///
/// let templates = from_json(r#"{
///     // comments are fine
///     "add": {"harness": "add", "params": {"a": 1, "b": 2},},
/// }"#).unwrap();
/// assert_eq!(templates["add"].template.harness.as_deref(), Some("add"));
/// ```
pub fn from_json(json: &str) -> Result<TemplateSet, JsonConversionError> {
    from_json_with_config(json, &FromJsonConfig::default())
}

/// Load a case file from JSON or JSONC text
pub fn from_json_with_config(
    json: &str,
    config: &FromJsonConfig,
) -> Result<TemplateSet, JsonConversionError> {
    let value: JsonValue = if config.allow_comments {
        serde_json::from_str(&strip_jsonc(json)?)?
    } else {
        serde_json::from_str(json)?
    };
    from_json_value(&value, config)
}

/// Load a case file from an already parsed JSON value
pub fn from_json_value(
    value: &JsonValue,
    config: &FromJsonConfig,
) -> Result<TemplateSet, JsonConversionError> {
    let JsonValue::Object(root) = value else {
        return Err(JsonConversionError::InvalidRoot(json_kind(value).to_string()));
    };

    let loader = Loader { config };
    let mut templates = TemplateSet::new();
    for (name, entry) in root {
        let object = expect_object(name, entry)?;
        let base = optional_string(name, object, "base")?;
        let template = loader.template(name, object, 0)?;
        templates.insert(name.clone(), CaseTemplate { base, template });
    }

    debug!(templates = templates.len(), "loaded case file");
    Ok(templates)
}

struct Loader<'c> {
    config: &'c FromJsonConfig,
}

impl Loader<'_> {
    fn template(
        &self,
        path: &str,
        object: &Map<String, JsonValue>,
        depth: usize,
    ) -> Result<Template, JsonConversionError> {
        if let Some(max) = self.config.max_depth {
            if depth > max {
                return Err(JsonConversionError::MaxDepthExceeded(max, path.to_string()));
            }
        }

        if depth > 0 && object.contains_key("base") {
            return Err(JsonConversionError::BaseInVariation(path.to_string()));
        }
        if self.config.deny_unknown_fields {
            if let Some(field) = object
                .keys()
                .find(|k| !TEMPLATE_FIELDS.contains(&k.as_str()) && k.as_str() != "base")
            {
                return Err(JsonConversionError::UnknownField {
                    path: path.to_string(),
                    field: field.clone(),
                });
            }
        }

        let is_abstract = match object.get("abstract") {
            None | Some(JsonValue::Null) => false,
            Some(JsonValue::Bool(b)) => *b,
            Some(other) => return Err(invalid(path, "abstract", "boolean", other)),
        };

        let params = match object.get("params") {
            None | Some(JsonValue::Null) => Params::new(),
            Some(JsonValue::Object(map)) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            Some(other) => return Err(invalid(path, "params", "object", other)),
        };

        let variations = match object.get("variations") {
            None | Some(JsonValue::Null) => None,
            Some(JsonValue::Array(items)) if items.is_empty() => None,
            Some(JsonValue::Array(items)) => {
                let mut children = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    let child_path = format!("{}.variations[{}]", path, i);
                    let child = expect_object(&child_path, item)?;
                    children.push(self.template(&child_path, child, depth + 1)?);
                }
                Some(children)
            }
            Some(other) => return Err(invalid(path, "variations", "list", other)),
        };

        Ok(Template {
            name: optional_string(path, object, "name")?,
            is_abstract,
            params,
            harness: optional_string(path, object, "harness")?,
            variations,
        })
    }
}

fn expect_object<'v>(
    path: &str,
    value: &'v JsonValue,
) -> Result<&'v Map<String, JsonValue>, JsonConversionError> {
    match value {
        JsonValue::Object(map) => Ok(map),
        other => Err(JsonConversionError::InvalidField {
            path: path.to_string(),
            expected: "object",
            found: json_kind(other),
        }),
    }
}

fn optional_string(
    path: &str,
    object: &Map<String, JsonValue>,
    field: &str,
) -> Result<Option<String>, JsonConversionError> {
    match object.get(field) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(invalid(path, field, "string", other)),
    }
}

fn invalid(path: &str, field: &str, expected: &'static str, found: &JsonValue) -> JsonConversionError {
    JsonConversionError::InvalidField {
        path: format!("{}.{}", path, field),
        expected,
        found: json_kind(found),
    }
}
