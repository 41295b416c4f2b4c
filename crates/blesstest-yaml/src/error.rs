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

//! Error types for YAML loading.

use blesstest_json::JsonConversionError;
use thiserror::Error;

/// Errors that can occur while loading a YAML case file.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum YamlError {
    /// YAML parsing failed
    #[error("YAML parse error: {0}")]
    ParseError(String),

    /// Root element must be a mapping
    #[error("Root must be a YAML mapping, found {found}")]
    InvalidRootType { found: String },

    /// Non-string key encountered in mapping
    #[error("Non-string keys not supported, found {key_type} at path {path}")]
    NonStringKey { key_type: String, path: String },

    /// Number without a JSON representation (NaN, infinity)
    #[error("Invalid number at path {path}: {value}")]
    InvalidNumber { value: String, path: String },

    /// Maximum nesting depth exceeded
    #[error("Maximum nesting depth of {max_depth} exceeded at path {path}")]
    MaxDepthExceeded { max_depth: usize, path: String },

    /// Document too large
    #[error("Document size {size} bytes exceeds maximum of {max_size} bytes")]
    DocumentTooLarge { size: usize, max_size: usize },

    /// Array too long
    #[error("Array length {length} exceeds maximum of {max_length} at path {path}")]
    ArrayTooLong {
        length: usize,
        max_length: usize,
        path: String,
    },

    /// The converted document is not a valid case file
    #[error(transparent)]
    Template(#[from] JsonConversionError),
}

impl From<serde_yaml::Error> for YamlError {
    fn from(err: serde_yaml::Error) -> Self {
        YamlError::ParseError(err.to_string())
    }
}
