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

//! Built-in harnesses of the `run` command.
//!
//! - `collect`: resolves the case file document in `input` and returns the
//!   cases as `result`, so case files can snapshot the resolver itself
//! - `identity`: returns its params unchanged
//! - `add`: returns `{"result": a + b}` for integer `a` and `b`

use blesstest_core::preprocess;
use blesstest_json::{from_json_value, to_json_value, FromJsonConfig};
use blesstest_runner::HarnessRegistry;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input of the `collect` harness.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectInput {
    /// A case file document.
    pub input: Value,
}

/// Output of the `collect` harness.
#[derive(Debug, Serialize)]
pub struct CollectOutput {
    /// The resolved cases.
    pub result: Value,
}

/// Input of the `add` harness.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddInput {
    pub a: i64,
    pub b: i64,
}

/// Output of the `add` harness.
#[derive(Debug, Serialize)]
pub struct AddOutput {
    pub result: i64,
}

/// Resolve a case file document given as JSON.
pub fn collect(input: CollectInput) -> Result<CollectOutput, String> {
    let templates =
        from_json_value(&input.input, &FromJsonConfig::default()).map_err(|e| e.to_string())?;
    let cases = preprocess(&templates).map_err(|e| e.to_string())?;
    Ok(CollectOutput {
        result: to_json_value(&cases),
    })
}

/// Add two integers.
pub fn add(input: AddInput) -> Result<AddOutput, String> {
    input
        .a
        .checked_add(input.b)
        .map(|result| AddOutput { result })
        .ok_or_else(|| format!("integer overflow adding {} and {}", input.a, input.b))
}

/// Registry with the built-in harnesses.
pub fn builtin_registry() -> HarnessRegistry {
    let mut registry = HarnessRegistry::new();
    registry
        .register_typed("collect", collect)
        .register_typed("identity", |params: Value| -> Result<Value, String> {
            Ok(params)
        })
        .register_typed("add", add);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use blesstest_runner::CallError;
    use serde_json::json;

    #[test]
    fn test_builtin_names() {
        assert_eq!(builtin_registry().names(), vec!["add", "collect", "identity"]);
    }

    #[test]
    fn test_collect_resolves_document() {
        let registry = builtin_registry();
        let out = registry
            .lookup("collect")
            .unwrap()
            .call(&json!({"input": {"T": {"harness": "h", "params": {"[n]": [1, 2]}}}}))
            .unwrap();
        assert_eq!(
            out,
            json!({"result": {
                "T__n_1": {"params": {"n": 1}, "harness": "h"},
                "T__n_2": {"params": {"n": 2}, "harness": "h"}
            }})
        );
    }

    #[test]
    fn test_collect_error_is_exception() {
        let registry = builtin_registry();
        let err = registry
            .lookup("collect")
            .unwrap()
            .call(&json!({"input": {"A": {"base": "A"}}}))
            .unwrap_err();
        let CallError::Failed(failure) = err else {
            panic!("expected a harness failure");
        };
        let record = failure.to_record();
        assert!(record["exception"]
            .as_str()
            .unwrap()
            .starts_with("CycleError in case 'A'"));
    }

    #[test]
    fn test_identity_and_add() {
        let registry = builtin_registry();
        let params = json!({"x": [1, {"y": null}]});
        assert_eq!(
            registry.lookup("identity").unwrap().call(&params).unwrap(),
            params
        );
        assert_eq!(
            registry
                .lookup("add")
                .unwrap()
                .call(&json!({"a": 40, "b": 2}))
                .unwrap(),
            json!({"result": 42})
        );
    }

    #[test]
    fn test_add_overflow_and_bad_input() {
        let registry = builtin_registry();
        let add = registry.lookup("add").unwrap();
        assert!(matches!(
            add.call(&json!({"a": i64::MAX, "b": 1})).unwrap_err(),
            CallError::Failed(_)
        ));
        assert!(matches!(
            add.call(&json!({"a": 1})).unwrap_err(),
            CallError::InvalidInput(_)
        ));
    }
}
