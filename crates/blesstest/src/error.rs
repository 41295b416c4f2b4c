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

//! Unified error type and context helpers.
//!
//! # Examples
//!
//! ```rust
//! use blesstest::{resolve, ResultExt};
//!
//! fn load_suite(name: &str, text: &str) -> Result<blesstest::CaseSet, blesstest::Error> {
//!     resolve(text).with_context(|| format!("in suite {}", name))
//! }
//!
//! let err = load_suite("math", r#"{"A": {"base": "A"}}"#).unwrap_err();
//! assert_eq!(err.to_string(), "in suite math: CycleError in case 'A': circular base chain A -> A");
//! assert_eq!(err.kind(), Some(blesstest::BlessErrorKind::Cycle));
//! ```

use blesstest_core::{BlessError, BlessErrorKind};
use blesstest_json::JsonConversionError;
use std::fmt;
use thiserror::Error;

/// Any error raised while loading or resolving a case file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The JSON or JSONC text could not be loaded.
    #[error(transparent)]
    Json(#[from] JsonConversionError),

    /// The YAML text could not be loaded.
    #[cfg(feature = "yaml")]
    #[error(transparent)]
    Yaml(#[from] blesstest_yaml::YamlError),

    /// The templates could not be resolved.
    #[error(transparent)]
    Resolve(#[from] BlessError),

    /// An error annotated with the place it occurred.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// The innermost error, below every context layer.
    pub fn root(&self) -> &Error {
        match self {
            Error::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Context messages, outermost first.
    pub fn contexts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        let mut current = self;
        while let Error::Context { context, source } = current {
            out.push(context.as_str());
            current = source.as_ref();
        }
        out
    }

    /// The violated rule, for resolution errors.
    pub fn kind(&self) -> Option<BlessErrorKind> {
        match self.root() {
            Error::Resolve(e) => Some(e.kind),
            _ => None,
        }
    }

    /// The offending case, for resolution errors.
    pub fn case(&self) -> Option<&str> {
        match self.root() {
            Error::Resolve(e) => Some(e.case.as_str()),
            _ => None,
        }
    }
}

/// Extension trait for annotating errors as they propagate.
///
/// Implemented for every `Result` whose error converts into [`Error`], so
/// loader and resolver results can be annotated directly.
pub trait ResultExt<T> {
    /// Wrap the error with `context`.
    fn context<C>(self, context: C) -> Result<T, Error>
    where
        C: fmt::Display;

    /// Wrap the error with a lazily built context.
    fn with_context<C, F>(self, f: F) -> Result<T, Error>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Error>,
{
    fn context<C>(self, context: C) -> Result<T, Error>
    where
        C: fmt::Display,
    {
        self.map_err(|e| wrap(e.into(), context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, Error>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| wrap(e.into(), f().to_string()))
    }
}

fn wrap(source: Error, context: String) -> Error {
    Error::Context {
        context,
        source: Box::new(source),
    }
}
