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

//! Blesstest YAML Loading
//!
//! Reads case files written in YAML. The document is converted into JSON
//! values and handed to the JSON loader, so both formats share one set of
//! template rules.
//!
//! # Limitations
//!
//! - Mapping keys must be strings
//! - NaN and infinite floats are rejected (no JSON representation)
//! - YAML tags are ignored
//!
//! # Examples
//!
//! ```rust
//! use blesstest_yaml::{from_yaml, FromYamlConfig};
//!
//! let yaml = r#"
//! Base:
//!   abstract: true
//!   harness: add
//!   params: {a: 1}
//! Sum:
//!   base: Base
//!   params:
//!     "[b]": [2, 3]
//! "#;
//!
//! let templates = from_yaml(yaml, &FromYamlConfig::default()).unwrap();
//! let cases = blesstest_core::preprocess(&templates).unwrap();
//! assert_eq!(cases.len(), 2);
//! ```

mod error;
mod from_yaml;

pub use error::YamlError;
pub use from_yaml::{
    from_yaml, FromYamlConfig, FromYamlConfigBuilder, DEFAULT_MAX_ARRAY_LENGTH,
    DEFAULT_MAX_DOCUMENT_SIZE, DEFAULT_MAX_NESTING_DEPTH,
};
