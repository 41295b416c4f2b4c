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

//! # Blesstest - declarative snapshot test cases
//!
//! Blesstest turns a compact case file into a flat set of concrete test
//! cases. Templates inherit from a `base`, sweep parameters with bracket
//! keys and fan out into named variations; every non-abstract leaf becomes
//! one case with fully merged parameters and a harness name.
//!
//! ## Quick Start
//!
//! ```rust
//! use blesstest::resolve;
//!
//! let cases = resolve(r#"{
//!     // shared defaults
//!     "Base": {"abstract": true, "harness": "add", "params": {"a": 1}},
//!     "Sum": {"base": "Base", "params": {"[b]": [2, 3]}}
//! }"#).unwrap();
//!
//! assert_eq!(cases.keys().collect::<Vec<_>>(), vec!["Sum__b_2", "Sum__b_3"]);
//! assert_eq!(cases["Sum__b_3"].params["b"], 3);
//! assert_eq!(cases["Sum__b_3"].harness, "add");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Template model and the resolution pipeline
//! - [`json`]: JSON and JSONC case files
//! - `yaml`: YAML case files (feature = "yaml")

mod error;

pub use error::{Error, ResultExt};

pub use blesstest_core::{
    preprocess, preprocess_with_limits, resolve_templates, BlessError, BlessErrorKind,
    BlessResult, CaseSet, CaseTemplate, ConcreteCase, ExpandedCase, Limits, Params,
    ResolvedTemplate, Template, TemplateSet,
};

pub mod core {
    //! Template model and resolution stages
    pub use blesstest_core::{base, brackets, filter, naming, variations};
}

pub mod json {
    //! JSON and JSONC case files
    pub use blesstest_json::{
        cases_to_json, from_json, from_json_value, from_json_with_config, json_to_cases,
        strip_jsonc, to_json, to_json_value, FromJsonConfig, JsonConversionError, ToJsonConfig,
    };
}

/// YAML case files (requires `yaml` feature)
#[cfg(feature = "yaml")]
pub mod yaml {
    pub use blesstest_yaml::{from_yaml, FromYamlConfig, YamlError};
}

/// Resolve a JSON or JSONC case file into concrete cases.
///
/// # Examples
///
/// ```rust
/// use blesstest::{resolve, BlessErrorKind};
///
/// let err = resolve(r#"{"orphan": {"params": {}}}"#).unwrap_err();
/// assert_eq!(err.kind(), Some(BlessErrorKind::MissingHarness));
/// ```
pub fn resolve(input: &str) -> Result<CaseSet, Error> {
    resolve_with_limits(input, &Limits::default())
}

/// Resolve a JSON or JSONC case file with custom limits.
pub fn resolve_with_limits(input: &str, limits: &Limits) -> Result<CaseSet, Error> {
    let templates = blesstest_json::from_json(input)?;
    Ok(preprocess_with_limits(&templates, limits)?)
}

/// Resolve a YAML case file into concrete cases.
#[cfg(feature = "yaml")]
pub fn resolve_yaml(input: &str) -> Result<CaseSet, Error> {
    let templates = blesstest_yaml::from_yaml(input, &blesstest_yaml::FromYamlConfig::default())?;
    Ok(preprocess(&templates)?)
}

/// Check a JSON or JSONC case file and return its number of concrete cases.
pub fn validate(input: &str) -> Result<usize, Error> {
    resolve(input).map(|cases| cases.len())
}

/// Render resolved cases as pretty JSON.
pub fn to_json(cases: &CaseSet) -> Result<String, Error> {
    Ok(blesstest_json::to_json(
        cases,
        &blesstest_json::ToJsonConfig { pretty: true },
    )?)
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_flat() {
        let cases = resolve(r#"{"one": {"harness": "h", "params": {"x": 1}}}"#).unwrap();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases["one"].harness, "h");
    }

    #[test]
    fn test_resolve_load_error() {
        let err = resolve("[1, 2]").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn test_resolve_with_limits() {
        let limits = Limits {
            max_cases: 2,
            ..Limits::default()
        };
        let err = resolve_with_limits(
            r#"{"S": {"harness": "h", "params": {"[x]": [1, 2, 3]}}}"#,
            &limits,
        )
        .unwrap_err();
        assert_eq!(err.kind(), Some(BlessErrorKind::Limit));
    }

    #[test]
    fn test_validate_counts_cases() {
        let n = validate(r#"{"S": {"harness": "h", "params": {"[x]": [1, 2, 3]}}}"#).unwrap();
        assert_eq!(n, 3);
    }

    #[test]
    fn test_to_json_is_pretty() {
        let cases = resolve(r#"{"one": {"harness": "h"}}"#).unwrap();
        let json = to_json(&cases).unwrap();
        assert!(json.contains("\n  \"one\": {"));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_resolve_yaml() {
        let cases = resolve_yaml("one:\n  harness: h\n  params:\n    x: 1\n").unwrap();
        assert_eq!(cases["one"].params["x"], 1);
    }
}
