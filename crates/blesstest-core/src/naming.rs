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

//! Deterministic names for variation branches.
//!
//! A branch with an explicit `name` becomes `{parent}__{name}`. Otherwise the
//! name is built from the branch's own harness and parameters:
//!
//! ```text
//! parent__h1__mode_fast__size_3              (tokens fit in 32 chars)
//! parent__<first 32 chars of tokens>__Xy_    (longer: truncated + hash)
//! ```
//!
//! The hash suffix is the first 3 characters of the URL-safe, unpadded
//! base64 encoding of the SHA-256 digest of the full token string.

use crate::template::Template;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Separator between a parent name and its suffix, and between tokens.
pub const SEPARATOR: &str = "__";

/// Token strings longer than this many characters are truncated and hashed.
pub const MAX_TOKEN_CHARS: usize = 32;

/// Number of hash characters appended to truncated names.
pub const HASH_CHARS: usize = 3;

/// Name of the case produced by `branch` under `parent`.
///
/// # Examples
///
/// ```
/// use blesstest_core::naming::variation_name;
/// use blesstest_core::Template;
///
/// let branch = Template::new().with_param("n", 1);
/// assert_eq!(variation_name("T", &branch), "T__n_1");
///
/// let named = Template::new().with_name("fast").with_param("n", 1);
/// assert_eq!(variation_name("T", &named), "T__fast");
///
/// // A branch without own parameters or harness keeps its parent's name.
/// assert_eq!(variation_name("T", &Template::new()), "T");
/// ```
pub fn variation_name(parent: &str, branch: &Template) -> String {
    if let Some(name) = &branch.name {
        return format!("{}{}{}", parent, SEPARATOR, name);
    }

    let tokens = branch_tokens(branch);
    if tokens.is_empty() {
        return parent.to_string();
    }

    let joined = tokens.join(SEPARATOR);
    if joined.chars().count() <= MAX_TOKEN_CHARS {
        format!("{}{}{}", parent, SEPARATOR, joined)
    } else {
        let truncated: String = joined.chars().take(MAX_TOKEN_CHARS).collect();
        format!(
            "{}{}{}{}{}",
            parent,
            SEPARATOR,
            truncated,
            SEPARATOR,
            short_hash(&joined)
        )
    }
}

/// Ordered name tokens of a branch: own harness first, then `key_value`
/// pairs sorted by key.
pub fn branch_tokens(branch: &Template) -> Vec<String> {
    let mut tokens = Vec::with_capacity(branch.params.len() + 1);
    if let Some(harness) = &branch.harness {
        tokens.push(harness.clone());
    }
    // `Params` is a BTreeMap, so iteration is already sorted by key.
    tokens.extend(
        branch
            .params
            .iter()
            .map(|(key, value)| format!("{}_{}", key, value_text(value))),
    );
    tokens
}

/// Text of a parameter value inside a name token.
///
/// Strings appear verbatim; everything else in compact JSON form.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// First [`HASH_CHARS`] characters of the URL-safe base64 SHA-256 digest.
pub fn short_hash(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut encoded = URL_SAFE_NO_PAD.encode(digest);
    encoded.truncate(HASH_CHARS);
    encoded
}
