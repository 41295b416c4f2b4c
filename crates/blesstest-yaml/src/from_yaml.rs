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

//! YAML to template set conversion

use crate::error::YamlError;
use blesstest_core::TemplateSet;
use blesstest_json::{from_json_value, FromJsonConfig};
use serde_json::{Map, Number, Value as JsonValue};
use serde_yaml::Value as YamlValue;
use tracing::debug;

/// Default maximum document size: 16 MB
pub const DEFAULT_MAX_DOCUMENT_SIZE: usize = 16 * 1024 * 1024;

/// Default maximum array length: 1 million elements
pub const DEFAULT_MAX_ARRAY_LENGTH: usize = 1_000_000;

/// Default maximum nesting depth of YAML values: 512 levels
///
/// Every variation level costs two YAML levels (list and mapping), so this
/// leaves room for the template loader's own variation limit.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 512;

/// Configuration for YAML import
///
/// # Examples
///
/// ```rust
/// use blesstest_yaml::FromYamlConfig;
///
/// // For untrusted input, use conservative limits
/// let config = FromYamlConfig::builder()
///     .max_document_size(1024 * 1024)
///     .max_array_length(10_000)
///     .max_nesting_depth(64)
///     .build();
/// assert_eq!(config.max_nesting_depth, 64);
/// ```
#[derive(Debug, Clone)]
pub struct FromYamlConfig {
    /// Maximum allowed document size in bytes (default: 16 MB)
    pub max_document_size: usize,
    /// Maximum allowed array length (default: 1 million elements)
    pub max_array_length: usize,
    /// Maximum allowed nesting depth (default: 512 levels)
    pub max_nesting_depth: usize,
    /// Template loading options applied after conversion
    pub template: FromJsonConfig,
}

impl Default for FromYamlConfig {
    fn default() -> Self {
        Self {
            max_document_size: DEFAULT_MAX_DOCUMENT_SIZE,
            max_array_length: DEFAULT_MAX_ARRAY_LENGTH,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            template: FromJsonConfig::default(),
        }
    }
}

impl FromYamlConfig {
    /// Creates a new builder for `FromYamlConfig`.
    pub fn builder() -> FromYamlConfigBuilder {
        FromYamlConfigBuilder::new()
    }
}

/// Builder for `FromYamlConfig`.
#[derive(Debug, Clone)]
pub struct FromYamlConfigBuilder {
    config: FromYamlConfig,
}

impl Default for FromYamlConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FromYamlConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self {
            config: FromYamlConfig::default(),
        }
    }

    /// Sets the maximum document size in bytes.
    pub fn max_document_size(mut self, size: usize) -> Self {
        self.config.max_document_size = size;
        self
    }

    /// Sets the maximum array length.
    pub fn max_array_length(mut self, length: usize) -> Self {
        self.config.max_array_length = length;
        self
    }

    /// Sets the maximum nesting depth.
    pub fn max_nesting_depth(mut self, depth: usize) -> Self {
        self.config.max_nesting_depth = depth;
        self
    }

    /// Sets the template loading options.
    pub fn template(mut self, template: FromJsonConfig) -> Self {
        self.config.template = template;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> FromYamlConfig {
        self.config
    }
}

/// Load a case file from YAML text.
///
/// The YAML document is converted to JSON values first, so the same
/// template rules and error paths apply as for JSON case files.
///
/// # Examples
///
/// ```rust
/// use blesstest_yaml::{from_yaml, FromYamlConfig};
///
/// let yaml = r#"
/// Sum:
///   harness: add
///   params:
///     a: 1
///     "[b]": [2, 3]
/// "#;
///
/// let templates = from_yaml(yaml, &FromYamlConfig::default()).unwrap();
/// assert_eq!(templates["Sum"].template.harness.as_deref(), Some("add"));
/// ```
pub fn from_yaml(yaml: &str, config: &FromYamlConfig) -> Result<TemplateSet, YamlError> {
    if yaml.len() > config.max_document_size {
        return Err(YamlError::DocumentTooLarge {
            size: yaml.len(),
            max_size: config.max_document_size,
        });
    }

    let parsed: YamlValue = serde_yaml::from_str(yaml)?;
    if !matches!(parsed, YamlValue::Mapping(_)) {
        return Err(YamlError::InvalidRootType {
            found: yaml_kind(&parsed).to_string(),
        });
    }

    let converter = Converter { config };
    let json = converter.convert(&parsed, "", 0)?;
    let templates = from_json_value(&json, &config.template)?;
    debug!(templates = templates.len(), "loaded YAML case file");
    Ok(templates)
}

struct Converter<'c> {
    config: &'c FromYamlConfig,
}

impl Converter<'_> {
    fn convert(&self, value: &YamlValue, path: &str, depth: usize) -> Result<JsonValue, YamlError> {
        if depth > self.config.max_nesting_depth {
            return Err(YamlError::MaxDepthExceeded {
                max_depth: self.config.max_nesting_depth,
                path: display_path(path),
            });
        }

        match value {
            YamlValue::Null => Ok(JsonValue::Null),
            YamlValue::Bool(b) => Ok(JsonValue::Bool(*b)),
            YamlValue::Number(n) => convert_number(n, path),
            YamlValue::String(s) => Ok(JsonValue::String(s.clone())),
            YamlValue::Sequence(items) => {
                if items.len() > self.config.max_array_length {
                    return Err(YamlError::ArrayTooLong {
                        length: items.len(),
                        max_length: self.config.max_array_length,
                        path: display_path(path),
                    });
                }
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| self.convert(item, &format!("{}[{}]", path, i), depth + 1))
                    .collect::<Result<Vec<_>, _>>()
                    .map(JsonValue::Array)
            }
            YamlValue::Mapping(mapping) => {
                let mut map = Map::with_capacity(mapping.len());
                for (key, item) in mapping {
                    let YamlValue::String(key) = key else {
                        return Err(YamlError::NonStringKey {
                            key_type: yaml_kind(key).to_string(),
                            path: display_path(path),
                        });
                    };
                    let child_path = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", path, key)
                    };
                    map.insert(key.clone(), self.convert(item, &child_path, depth + 1)?);
                }
                Ok(JsonValue::Object(map))
            }
            // Tags carry no meaning in case files.
            YamlValue::Tagged(tagged) => self.convert(&tagged.value, path, depth),
        }
    }
}

fn convert_number(n: &serde_yaml::Number, path: &str) -> Result<JsonValue, YamlError> {
    if let Some(i) = n.as_i64() {
        return Ok(JsonValue::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Ok(JsonValue::from(u));
    }
    n.as_f64()
        .and_then(Number::from_f64)
        .map(JsonValue::Number)
        .ok_or_else(|| YamlError::InvalidNumber {
            value: n.to_string(),
            path: display_path(path),
        })
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}

fn yaml_kind(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "boolean",
        YamlValue::Number(_) => "number",
        YamlValue::String(_) => "string",
        YamlValue::Sequence(_) => "sequence",
        YamlValue::Mapping(_) => "mapping",
        YamlValue::Tagged(_) => "tagged value",
    }
}
