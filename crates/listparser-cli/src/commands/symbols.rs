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

//! Symbols command - dump the interned symbol table

use super::parse_file;
use crate::error::CliError;
use colored::Colorize;
use listparser_core::{ParseOptions, SymbolTable};

/// Parse `files` in order against one table and print every symbol.
///
/// Ids follow first appearance across the files, in argument order.
pub fn symbols(files: &[String], options: &ParseOptions) -> Result<(), CliError> {
    let table = SymbolTable::new();
    for file in files {
        parse_file(file, &table, options)?;
    }

    println!("{}", "Symbols".bold().underline());
    for (id, name) in table.symbols() {
        println!("  {}  {}", format!("{:>6}", id.get()).yellow(), name.green());
    }
    println!();
    println!("{} {}", "Total:".cyan(), table.len());
    Ok(())
}
