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

//! Validate command - parse files and report success per file

use super::parse_file;
use crate::error::CliError;
use colored::Colorize;
use listparser_core::{ParseOptions, SymbolTable};
use rayon::prelude::*;
use tracing::info;

/// Validate list source files.
///
/// All files are parsed against one [`SymbolTable`], so symbols keep the
/// same id across files. With `parallel`, files are parsed on the rayon
/// pool; results are still reported in argument order.
///
/// # Errors
///
/// Returns [`CliError::ValidationFailed`] if any file fails to read or
/// parse. Each failure is printed to stderr with its position.
///
/// # Output
///
/// One line per file: `✓ path (N lists)` or `✗ path`.
pub fn validate(files: &[String], parallel: bool, options: &ParseOptions) -> Result<(), CliError> {
    let symbols = SymbolTable::new();
    let check = |file: &String| parse_file(file, &symbols, options).map(|lists| lists.len());

    let results: Vec<Result<usize, CliError>> = if parallel {
        files.par_iter().map(check).collect()
    } else {
        files.iter().map(check).collect()
    };

    let mut failed = 0;
    for (file, result) in files.iter().zip(&results) {
        match result {
            Ok(count) => println!("{} {} ({} lists)", "✓".green().bold(), file, count),
            Err(e) => {
                failed += 1;
                println!("{} {}", "✗".red().bold(), file);
                eprintln!("  {}", e);
            }
        }
    }

    info!(
        files = files.len(),
        failed,
        symbols = symbols.len(),
        "validation finished"
    );

    if failed > 0 {
        return Err(CliError::ValidationFailed {
            failed,
            total: files.len(),
        });
    }
    Ok(())
}
