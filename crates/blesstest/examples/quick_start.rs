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

//! Quick Start Example
//!
//! Resolves a small case file and prints the concrete cases.
//!
//! Run with: cargo run --example quick_start

use blesstest::{resolve, to_json, ResultExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let case_file = r#"{
  // Every arithmetic case runs through the same harness
  "Arithmetic": {
    "abstract": true,
    "harness": "add",
    "params": {"a": 1}
  },
  "Sums": {
    "base": "Arithmetic",
    "params": {"[b]": [1, 2, 3]}
  },
  "Edge": {
    "base": "Arithmetic",
    "variations": [
      {"name": "zero", "params": {"b": 0}},
      {"name": "negative", "params": {"a": -1, "b": -1}}
    ]
  }
}"#;

    println!("Input case file:");
    println!("{}", case_file);
    println!();

    let cases = resolve(case_file).context("resolving quick start cases")?;
    println!("Resolved {} cases:", cases.len());
    for (name, case) in &cases {
        println!("  {:<12} {}", name, case.harness);
    }
    println!();

    println!("As JSON:");
    println!("{}", to_json(&cases)?);
    Ok(())
}
