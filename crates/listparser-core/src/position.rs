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

//! Source positions for tokens, elements and errors.
//!
//! Every token the lexer produces, every element the parser builds and every
//! error either of them reports carries a [`Position`].
//!
//! # Examples
//!
//! ```
//! use listparser_core::Position;
//!
//! let pos = Position::new("states.lst", 10, 25);
//! assert_eq!(pos.line(), 10);
//! assert_eq!(pos.column(), 25);
//! assert_eq!(pos.to_string(), "states.lst:10:25");
//! ```

use std::fmt;
use std::sync::Arc;

/// A position in a named source (source name, line and column).
///
/// Line and column numbers are 1-indexed. The source name is reference
/// counted, so every token and element of one parse shares a single
/// allocation for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    /// Name of the input (usually a file name).
    source: Arc<str>,
    /// Line number (1-indexed).
    line: usize,
    /// Column number in Unicode scalar values (1-indexed).
    column: usize,
}

impl Position {
    /// Creates a new position.
    ///
    /// # Arguments
    ///
    /// * `source` - The name of the input.
    /// * `line` - The line number (1-indexed).
    /// * `column` - The column number (1-indexed).
    pub fn new(source: impl Into<Arc<str>>, line: usize, column: usize) -> Self {
        Self {
            source: source.into(),
            line,
            column,
        }
    }

    /// Creates a position that shares an already allocated source name.
    #[inline]
    pub(crate) fn with_shared(source: &Arc<str>, line: usize, column: usize) -> Self {
        Self {
            source: Arc::clone(source),
            line,
            column,
        }
    }

    /// Returns the source name.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the line number.
    #[inline]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the column number.
    #[inline]
    pub const fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source, self.line, self.column)
    }
}
