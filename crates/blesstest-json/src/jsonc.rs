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

//! JSONC preprocessing: comments and trailing commas.
//!
//! Only these two extensions are removed; the rest must already be strict
//! JSON. JSON5 additions (single quotes, unquoted keys, hex numbers) are
//! left in place and rejected by the JSON parser.

use crate::from_json::JsonConversionError;

/// Reduce JSONC text to plain JSON.
///
/// This handles:
/// - BOM skipping
/// - `//` line comments and `/* */` block comments outside strings
/// - Trailing commas before `}` and `]`
///
/// Newlines inside block comments are kept so that parse errors still
/// report the original line numbers.
///
/// # Examples
///
/// ```
/// use blesstest_json::strip_jsonc;
///
/// let json = strip_jsonc("{\"a\": [1, 2,], /* note */ \"b\": \"//not a comment\",}").unwrap();
/// assert_eq!(json, "{\"a\": [1, 2],  \"b\": \"//not a comment\"}");
/// ```
pub fn strip_jsonc(input: &str) -> Result<String, JsonConversionError> {
    let text = input.strip_prefix('\u{FEFF}').unwrap_or(input);
    let without_comments = strip_comments(text.as_bytes())?;
    let cleaned = strip_trailing_commas(&without_comments);
    // Only whole comments and ASCII commas were removed.
    String::from_utf8(cleaned).map_err(|e| JsonConversionError::ParseError(e.to_string()))
}

fn strip_comments(bytes: &[u8]) -> Result<Vec<u8>, JsonConversionError> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    let mut line = 1;
    let mut in_string = false;

    while i < bytes.len() {
        let b = bytes[i];
        if b == b'\n' {
            line += 1;
        }

        if in_string {
            out.push(b);
            if b == b'\\' && i + 1 < bytes.len() {
                out.push(bytes[i + 1]);
                i += 2;
                continue;
            }
            if b == b'"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        match (b, bytes.get(i + 1)) {
            (b'"', _) => {
                in_string = true;
                out.push(b);
                i += 1;
            }
            (b'/', Some(b'/')) => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            (b'/', Some(b'*')) => {
                let start_line = line;
                i += 2;
                loop {
                    match bytes.get(i) {
                        None => {
                            return Err(JsonConversionError::ParseError(format!(
                                "unterminated block comment starting at line {}",
                                start_line
                            )))
                        }
                        Some(b'*') if bytes.get(i + 1) == Some(&b'/') => {
                            i += 2;
                            break;
                        }
                        Some(b'\n') => {
                            line += 1;
                            out.push(b'\n');
                            i += 1;
                        }
                        Some(_) => i += 1,
                    }
                }
            }
            _ => {
                out.push(b);
                i += 1;
            }
        }
    }
    Ok(out)
}

fn strip_trailing_commas(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut in_string = false;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if in_string {
            out.push(b);
            if b == b'\\' && i + 1 < bytes.len() {
                out.push(bytes[i + 1]);
                i += 2;
                continue;
            }
            if b == b'"' {
                in_string = false;
            }
        } else if b == b'"' {
            in_string = true;
            out.push(b);
        } else if b == b',' {
            let next = bytes[i + 1..]
                .iter()
                .find(|c| !c.is_ascii_whitespace());
            if !matches!(next, Some(b'}') | Some(b']')) {
                out.push(b);
            }
        } else {
            out.push(b);
        }
        i += 1;
    }
    out
}
