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

//! Canonical template fixtures.
//!
//! - **templates**: template sets built in code
//! - **documents**: the same inputs as case file text
//! - **errors**: invalid documents and failing template sets
//! - **builders**: builder pattern for customizable fixtures

pub mod builders;
mod documents;
pub mod errors;
mod templates;

pub use documents::*;
pub use templates::*;

use crate::FixtureList;

/// Returns all fixture functions for iteration.
pub fn all() -> FixtureList {
    vec![
        ("flat", flat),
        ("bracket_sweep", bracket_sweep),
        ("multi_bracket", multi_bracket),
        ("variation_modes", variation_modes),
        ("base_chain", base_chain),
        ("abstract_skeleton", abstract_skeleton),
        ("long_names", long_names),
        ("comprehensive", comprehensive),
        ("empty", empty),
    ]
}
