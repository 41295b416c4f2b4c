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

//! Harness registry.
//!
//! A harness is a named function from case params to a JSON result. Typed
//! harnesses are registered with [`HarnessRegistry::register_typed`], which
//! deserializes the params into the input type and serializes the output
//! type back to JSON.
//!
//! # Examples
//!
//! ```rust
//! use blesstest_runner::HarnessRegistry;
//! use serde::{Deserialize, Serialize};
//! use serde_json::json;
//!
//! #[derive(Deserialize)]
//! struct AddInput { a: i64, b: i64 }
//!
//! #[derive(Serialize)]
//! struct AddOutput { result: i64 }
//!
//! let mut registry = HarnessRegistry::new();
//! registry.register_typed("add", |input: AddInput| -> Result<AddOutput, String> {
//!     Ok(AddOutput { result: input.a + input.b })
//! });
//!
//! let harness = registry.lookup("add").unwrap();
//! assert_eq!(harness.call(&json!({"a": 1, "b": 2})).unwrap(), json!({"result": 3}));
//! ```

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Failure of a harness call that is recorded in the snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarnessFailure {
    /// The harness function returned an error.
    #[error("{0}")]
    Exception(String),

    /// The harness output could not be converted to JSON.
    #[error("invalid output: {0}")]
    InvalidOutput(String),
}

impl HarnessFailure {
    /// The snapshot `result` recorded for this failure.
    pub fn to_record(&self) -> Value {
        match self {
            HarnessFailure::Exception(msg) => json!({ "exception": msg }),
            HarnessFailure::InvalidOutput(msg) => json!({ "invalid_output": msg }),
        }
    }
}

/// Error of a single harness call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    /// Params do not deserialize into the harness input type.
    InvalidInput(String),
    /// The harness ran and failed.
    Failed(HarnessFailure),
}

/// Harness function signature.
pub type HarnessFn = Arc<dyn Fn(&Value) -> Result<Value, CallError> + Send + Sync>;

/// A registered harness.
#[derive(Clone)]
pub struct Harness {
    /// Name referenced by the `harness` field of case files.
    pub name: String,
    /// Rust type name of the input.
    pub input_schema: &'static str,
    /// Rust type name of the output.
    pub output_schema: &'static str,
    func: HarnessFn,
}

impl Harness {
    /// Create a harness from an untyped function.
    pub fn new<F>(
        name: impl Into<String>,
        input_schema: &'static str,
        output_schema: &'static str,
        func: F,
    ) -> Self
    where
        F: Fn(&Value) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            input_schema,
            output_schema,
            func: Arc::new(func),
        }
    }

    /// Call the harness with case params.
    pub fn call(&self, params: &Value) -> Result<Value, CallError> {
        (self.func)(params)
    }
}

impl fmt::Debug for Harness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Harness")
            .field("name", &self.name)
            .field("input_schema", &self.input_schema)
            .field("output_schema", &self.output_schema)
            .finish_non_exhaustive()
    }
}

/// Harnesses by name.
#[derive(Debug, Clone, Default)]
pub struct HarnessRegistry {
    harnesses: BTreeMap<String, Harness>,
}

impl HarnessRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a harness, replacing any harness with the same name.
    pub fn register(&mut self, harness: Harness) -> &mut Self {
        if self.harnesses.contains_key(&harness.name) {
            warn!(harness = %harness.name, "replacing registered harness");
        }
        self.harnesses.insert(harness.name.clone(), harness);
        self
    }

    /// Register a typed harness function.
    ///
    /// Params that fail to deserialize into `I` give [`CallError::InvalidInput`].
    /// An `Err` from the function is recorded as an exception, and output
    /// that fails to serialize is recorded as invalid output.
    pub fn register_typed<I, O, E, F>(&mut self, name: &str, func: F) -> &mut Self
    where
        I: DeserializeOwned,
        O: Serialize,
        E: fmt::Display,
        F: Fn(I) -> Result<O, E> + Send + Sync + 'static,
    {
        let call = move |params: &Value| -> Result<Value, CallError> {
            let input: I = serde_json::from_value(params.clone())
                .map_err(|e| CallError::InvalidInput(e.to_string()))?;
            let output = func(input)
                .map_err(|e| CallError::Failed(HarnessFailure::Exception(e.to_string())))?;
            serde_json::to_value(output)
                .map_err(|e| CallError::Failed(HarnessFailure::InvalidOutput(e.to_string())))
        };
        self.register(Harness::new(
            name,
            std::any::type_name::<I>(),
            std::any::type_name::<O>(),
            call,
        ))
    }

    /// Look up a harness by name.
    pub fn lookup(&self, name: &str) -> Option<&Harness> {
        self.harnesses.get(name)
    }

    /// Registered harness names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.harnesses.keys().map(String::as_str).collect()
    }

    /// Number of registered harnesses.
    pub fn len(&self) -> usize {
        self.harnesses.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.harnesses.is_empty()
    }
}
