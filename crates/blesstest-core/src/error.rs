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

//! Error types for template resolution.

use std::fmt;
use thiserror::Error;

/// The rule a template violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlessErrorKind {
    /// `base` names a template that does not exist.
    Reference,
    /// A chain of `base` references loops back on itself.
    Cycle,
    /// Malformed bracket syntax, or bracket keys next to explicit variations.
    Shape,
    /// Base and current variation trees disagree on a harness or parameter.
    Conflict,
    /// A concrete leaf ended up without a harness.
    MissingHarness,
    /// Two branches produced the same case name.
    NameCollision,
    /// A resource limit was exceeded.
    Limit,
}

impl fmt::Display for BlessErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference => write!(f, "ReferenceError"),
            Self::Cycle => write!(f, "CycleError"),
            Self::Shape => write!(f, "ShapeError"),
            Self::Conflict => write!(f, "ConflictError"),
            Self::MissingHarness => write!(f, "MissingHarnessError"),
            Self::NameCollision => write!(f, "NameCollisionError"),
            Self::Limit => write!(f, "LimitError"),
        }
    }
}

/// A fatal error raised while resolving a template set.
///
/// Every error names the template (top-level key or generated case name)
/// where the violation was found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} in case '{case}': {message}")]
pub struct BlessError {
    /// The violated rule.
    pub kind: BlessErrorKind,
    /// The offending template or generated case name.
    pub case: String,
    /// Human-readable error message.
    pub message: String,
}

impl BlessError {
    /// Create a new error.
    pub fn new(kind: BlessErrorKind, case: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            case: case.into(),
            message: message.into(),
        }
    }

    pub fn reference(case: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(BlessErrorKind::Reference, case, message)
    }

    pub fn cycle(case: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(BlessErrorKind::Cycle, case, message)
    }

    pub fn shape(case: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(BlessErrorKind::Shape, case, message)
    }

    pub fn conflict(case: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(BlessErrorKind::Conflict, case, message)
    }

    pub fn missing_harness(case: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(BlessErrorKind::MissingHarness, case, message)
    }

    pub fn name_collision(case: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(BlessErrorKind::NameCollision, case, message)
    }

    pub fn limit(case: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(BlessErrorKind::Limit, case, message)
    }
}

/// Result type for template resolution.
pub type BlessResult<T> = Result<T, BlessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(BlessErrorKind::Reference.to_string(), "ReferenceError");
        assert_eq!(BlessErrorKind::Cycle.to_string(), "CycleError");
        assert_eq!(BlessErrorKind::Shape.to_string(), "ShapeError");
        assert_eq!(BlessErrorKind::Conflict.to_string(), "ConflictError");
        assert_eq!(
            BlessErrorKind::MissingHarness.to_string(),
            "MissingHarnessError"
        );
        assert_eq!(
            BlessErrorKind::NameCollision.to_string(),
            "NameCollisionError"
        );
        assert_eq!(BlessErrorKind::Limit.to_string(), "LimitError");
    }

    #[test]
    fn test_error_display_names_case() {
        let err = BlessError::reference("child", "base case 'missing' not found");
        let msg = err.to_string();
        assert!(msg.starts_with("ReferenceError"));
        assert!(msg.contains("'child'"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(BlessError::cycle("a", "").kind, BlessErrorKind::Cycle);
        assert_eq!(BlessError::shape("a", "").kind, BlessErrorKind::Shape);
        assert_eq!(BlessError::conflict("a", "").kind, BlessErrorKind::Conflict);
        assert_eq!(
            BlessError::missing_harness("a", "").kind,
            BlessErrorKind::MissingHarness
        );
        assert_eq!(
            BlessError::name_collision("a", "").kind,
            BlessErrorKind::NameCollision
        );
        assert_eq!(BlessError::limit("a", "").kind, BlessErrorKind::Limit);
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_error<E: std::error::Error>(_: E) {}
        accepts_error(BlessError::shape("t", "bad"));
    }

    #[test]
    fn test_error_clone_eq() {
        let original = BlessError::conflict("t", "harness differs");
        assert_eq!(original.clone(), original);
    }
}
