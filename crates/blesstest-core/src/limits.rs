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

//! Resource limits for template resolution.

/// Configurable bounds on the work a single resolution run may do.
///
/// Bracket sweeps multiply: three keys with a hundred values each already
/// produce a million cases. These limits stop a small document from
/// exhausting memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum variation nesting depth (default: 128).
    pub max_depth: usize,
    /// Maximum number of leaves produced by one run (default: 1M).
    pub max_cases: usize,
    /// Maximum number of siblings one bracket product may generate (default: 100k).
    pub max_sweep_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: 128,
            max_cases: 1_000_000,
            max_sweep_size: 100_000,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
            max_cases: usize::MAX,
            max_sweep_size: usize::MAX,
        }
    }
}
