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

//! Resolved cases to JSON conversion

use crate::from_json::JsonConversionError;
use blesstest_core::CaseSet;
use serde_json::{json, Map, Value as JsonValue};

/// Configuration for JSON output
#[derive(Debug, Clone)]
pub struct ToJsonConfig {
    /// Indent output with two spaces (default: true)
    pub pretty: bool,
}

impl Default for ToJsonConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Convert resolved cases to a JSON string
pub fn to_json(cases: &CaseSet, config: &ToJsonConfig) -> Result<String, JsonConversionError> {
    let value = to_json_value(cases);
    let text = if config.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    text.map_err(|e| JsonConversionError::SerializeError(e.to_string()))
}

/// Convert resolved cases to a `serde_json::Value`
///
/// Each case becomes `{"params": {...}, "harness": "..."}` under its name.
pub fn to_json_value(cases: &CaseSet) -> JsonValue {
    let mut map = Map::with_capacity(cases.len());
    for (name, case) in cases {
        map.insert(
            name.clone(),
            json!({"params": case.params, "harness": case.harness}),
        );
    }
    JsonValue::Object(map)
}
