// Listparser - Bracketed list notation parser
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

//! Format command - canonical re-serialization

use super::{read_file, write_output};
use crate::error::CliError;
use listparser_core::{parse_with_options, to_source, ParseOptions, SymbolTable};

/// Format a list source file to canonical form.
///
/// Canonical form puts each top-level list on its own line, separates
/// children with single spaces, drops comments and normalizes numbers and
/// string escapes.
///
/// With `check`, nothing is written; the command fails with
/// [`CliError::NotCanonical`] unless the file already matches its canonical
/// form (ignoring CRLF and trailing whitespace).
pub fn format(
    file: &str,
    output: Option<&str>,
    check: bool,
    options: &ParseOptions,
) -> Result<(), CliError> {
    let content = read_file(file)?;
    let symbols = SymbolTable::new();
    let lists = parse_with_options(file, &symbols, content.as_slice(), options)?;
    let canonical = to_source(&lists, &symbols)?;

    if check {
        let original = String::from_utf8_lossy(&content).replace("\r\n", "\n");
        if canonical.trim_end() != original.trim_end() {
            return Err(CliError::NotCanonical { path: file.into() });
        }
        println!("File is in canonical form");
        Ok(())
    } else {
        write_output(&canonical, output)
    }
}
