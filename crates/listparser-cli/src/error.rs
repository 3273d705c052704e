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

//! Structured error types for the Listparser CLI.

use listparser_core::{ParseError, WriteError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for CLI operations.
///
/// Implements `Clone` so per-file results can be collected from parallel
/// validation and reported afterwards.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured maximum.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// The source did not parse. The message carries `file:line:column`.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// The tree could not be written back to text.
    #[error("Write error: {0}")]
    Write(#[from] WriteError),

    /// JSON serialization failed.
    #[error("JSON format error: {message}")]
    JsonFormat { message: String },

    /// Returned by `format --check`.
    #[error("File '{path}' is not in canonical form")]
    NotCanonical { path: PathBuf },

    /// At least one file passed to `validate` failed to parse.
    #[error("{failed} of {total} file(s) failed validation")]
    ValidationFailed { failed: usize, total: usize },
}

impl CliError {
    /// Create an I/O error with file path context.
    ///
    /// ```rust,no_run
    /// use listparser_cli::error::CliError;
    /// use std::fs;
    ///
    /// let result = fs::read("machine.lst").map_err(|e| CliError::io_error("machine.lst", e));
    /// ```
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: e.to_string(),
        }
    }
}
