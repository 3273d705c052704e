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

//! Inspect command - parsed structure visualization

use super::parse_file;
use crate::error::CliError;
use colored::Colorize;
use listparser_core::{write_element, ListElement, ParseOptions, SymbolTable, SyntaxElement};

/// Inspect the parsed structure of a list source file.
///
/// Prints a summary followed by one line per element, indented by depth,
/// with the element kind, its value and its `line:column`. With `json`, the
/// roots are printed as pretty JSON instead.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or parsed.
pub fn inspect(file: &str, json: bool, options: &ParseOptions) -> Result<(), CliError> {
    let symbols = SymbolTable::new();
    let lists = parse_file(file, &symbols, options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&lists)?);
        return Ok(());
    }

    println!("{}", "List Source".bold().underline());
    println!();
    println!("{}    {}", "File:".cyan(), file);
    println!("{}   {}", "Lists:".cyan(), lists.len());
    println!("{} {}", "Symbols:".cyan(), symbols.len());

    for list in &lists {
        println!();
        print_tree(list, &symbols)?;
    }
    Ok(())
}

fn print_tree(root: &ListElement, symbols: &SymbolTable) -> Result<(), CliError> {
    print_list(root, 0);
    let mut stack = vec![root.iter()];
    loop {
        let depth = stack.len();
        let Some(children) = stack.last_mut() else {
            break;
        };
        match children.next() {
            None => {
                stack.pop();
            }
            Some(SyntaxElement::List(inner)) => {
                print_list(inner, depth);
                stack.push(inner.iter());
            }
            Some(scalar) => {
                let text = write_element(scalar, symbols)?;
                let pos = scalar.position();
                println!(
                    "{}{} {} {}",
                    "  ".repeat(depth),
                    scalar.kind().to_string().cyan(),
                    text,
                    format!("{}:{}", pos.line(), pos.column()).dimmed()
                );
            }
        }
    }
    Ok(())
}

fn print_list(list: &ListElement, depth: usize) {
    let brackets = format!("{}{}", list.bracket().open_char(), list.bracket().close_char());
    println!(
        "{}{} {} {}",
        "  ".repeat(depth),
        brackets.yellow(),
        format!("list ({} elements)", list.len()).cyan(),
        format!("{}:{}", list.position().line(), list.position().column()).dimmed()
    );
}
