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

//! CLI command implementations

mod format;
mod inspect;
mod symbols;
mod validate;

pub use format::format;
pub use inspect::inspect;
pub use symbols::symbols;
pub use validate::validate;

use crate::error::CliError;
use listparser_core::{parse_with_options, ListElement, ParseOptions, SymbolTable};
use std::fs;
use std::io::{self, Write};
use tracing::debug;

/// Default maximum file size (1 GB).
/// Can be overridden via the LISTPARSER_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable holding the maximum input size in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "LISTPARSER_MAX_FILE_SIZE";

/// Maximum input size from the environment, or [`DEFAULT_MAX_FILE_SIZE`] if
/// unset or not a number.
fn get_max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// The size is checked from metadata before anything is read. Contents are
/// returned as raw bytes; encoding errors are reported by the lexer with a
/// position.
///
/// # Errors
///
/// Returns `Err` if the metadata cannot be read, the file is larger than the
/// configured maximum, or reading fails.
pub fn read_file(path: &str) -> Result<Vec<u8>, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read(path).map_err(|e| CliError::io_error(path, e))
}

/// Read and parse one file into `symbols`. The path names the source in
/// positions.
pub fn parse_file(
    path: &str,
    symbols: &SymbolTable,
    options: &ParseOptions,
) -> Result<Vec<ListElement>, CliError> {
    let content = read_file(path)?;
    debug!(path, bytes = content.len(), "read input");
    Ok(parse_with_options(path, symbols, content.as_slice(), options)?)
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}
