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

//! Blesstest JSON Loading
//!
//! Reads case files written in JSON or JSONC into a
//! [`TemplateSet`](blesstest_core::TemplateSet) and writes resolved cases
//! back out as JSON.
//!
//! # Features
//!
//! - **JSONC**: `//` and `/* */` comments and trailing commas
//! - **Validation**: field types checked with a path to the offending value
//! - **Limits**: configurable nesting bound
//!
//! # Examples
//!
//! ```rust
//! use blesstest_json::{json_to_cases, cases_to_json};
//!
//! let json = r#"{
//!     "Add": {
//!         "harness": "add",
//!         "params": {"a": 1, "[b]": [2, 3]}, // sweep over b
//!     }
//! }"#;
//! let cases = json_to_cases(json).unwrap();
//! assert_eq!(cases.len(), 2);
//!
//! let out = cases_to_json(&cases).unwrap();
//! assert!(out.contains("Add__b_3"));
//! ```

mod from_json;
mod jsonc;
mod to_json;

pub use from_json::{
    from_json, from_json_value, from_json_with_config, FromJsonConfig, FromJsonConfigBuilder,
    JsonConversionError, DEFAULT_MAX_DEPTH,
};
pub use jsonc::strip_jsonc;
pub use to_json::{to_json, to_json_value, ToJsonConfig};

use blesstest_core::CaseSet;

/// Convert resolved cases to a pretty JSON string
pub fn cases_to_json(cases: &CaseSet) -> Result<String, String> {
    to_json(cases, &ToJsonConfig::default()).map_err(|e| e.to_string())
}

/// Load and resolve a JSON or JSONC case file
pub fn json_to_cases(json: &str) -> Result<CaseSet, String> {
    let templates = from_json(json).map_err(|e| e.to_string())?;
    blesstest_core::preprocess(&templates).map_err(|e| e.to_string())
}
