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

//! Case file documents as text.

/// Two plain adder cases in strict JSON.
pub fn adder_json() -> &'static str {
    r#"{
  "small": {"harness": "add", "params": {"a": 1, "b": 2}},
  "negative": {"harness": "add", "params": {"a": -5, "b": 3}}
}
"#
}

/// JSONC text equivalent to [`comprehensive`](super::comprehensive).
pub fn comprehensive_json() -> &'static str {
    r#"{
  // Shared defaults for the arithmetic cases
  "Arithmetic": {
    "abstract": true,
    "harness": "add",
    "params": {"a": 1}
  },
  "Sums": {
    "base": "Arithmetic",
    "params": {"[b]": [1, 2, 3]},
  },
  /* zipped sweep, overrides the inherited a */
  "Pairs": {
    "base": "Arithmetic",
    "params": {"[[a,b]]": [[10, 20], [30, 40]]}
  },
  "Modes": {
    "harness": "identity",
    "params": {"payload": "x"},
    "variations": [
      {"name": "fast", "params": {"mode": "fast"}},
      {"params": {"mode": "slow", "retries": 3}},
      {"name": "draft", "abstract": true},
    ]
  }
}
"#
}

/// YAML text equivalent to [`comprehensive`](super::comprehensive).
pub fn comprehensive_yaml() -> &'static str {
    r#"# Shared defaults for the arithmetic cases
Arithmetic:
  abstract: true
  harness: add
  params:
    a: 1
Sums:
  base: Arithmetic
  params:
    "[b]": [1, 2, 3]
Pairs:
  base: Arithmetic
  params:
    "[[a,b]]":
      - [10, 20]
      - [30, 40]
Modes:
  harness: identity
  params:
    payload: x
  variations:
    - name: fast
      params:
        mode: fast
    - params:
        mode: slow
        retries: 3
    - name: draft
      abstract: true
"#
}

/// Names of the concrete cases [`comprehensive`](super::comprehensive) resolves to.
pub fn comprehensive_case_names() -> Vec<&'static str> {
    vec![
        "Modes__fast",
        "Modes__mode_slow__retries_3",
        "Pairs__a_10__b_20",
        "Pairs__a_30__b_40",
        "Sums__b_1",
        "Sums__b_2",
        "Sums__b_3",
    ]
}

/// All JSON documents as (name, text, resolved case count).
pub fn all_json_documents() -> Vec<(&'static str, &'static str, usize)> {
    vec![
        ("adder", adder_json(), 2),
        ("comprehensive", comprehensive_json(), 7),
    ]
}
