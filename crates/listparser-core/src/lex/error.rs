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

//! Lexical error types.
//!
//! Every lexical error is fatal to the parse that triggered it. The message
//! does not repeat the position; the parser prefixes it when wrapping the
//! error, and [`LexError::position`] exposes it to direct lexer users.

use crate::position::Position;
use thiserror::Error;

/// Error raised while scanning characters into tokens.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LexError {
    /// Input bytes are not valid UTF-8, or an escape produced an invalid code point.
    #[error("illegal character encoding")]
    IllegalCharacterEncoding { pos: Position },

    /// A string literal or escape sequence was still open at end of line.
    #[error("unexpected end of line")]
    UnexpectedEndOfLine { pos: Position },

    /// Backslash followed by a character that starts no known escape.
    #[error("illegal escape sequence '{ch}'")]
    IllegalEscapeSequence { ch: char, pos: Position },

    /// Internal scanner invariant violated.
    #[error("illegal lexer state")]
    IllegalLexerState { pos: Position },

    /// The underlying reader failed.
    #[error("read error: {message}")]
    Io { message: String, pos: Position },
}

impl LexError {
    /// Get the position where this error occurred.
    #[inline]
    pub fn position(&self) -> &Position {
        match self {
            LexError::IllegalCharacterEncoding { pos }
            | LexError::UnexpectedEndOfLine { pos }
            | LexError::IllegalEscapeSequence { pos, .. }
            | LexError::IllegalLexerState { pos }
            | LexError::Io { pos, .. } => pos,
        }
    }

    /// Returns `true` if this error comes from string-literal decoding.
    #[inline]
    pub fn is_string_error(&self) -> bool {
        matches!(
            self,
            LexError::UnexpectedEndOfLine { .. } | LexError::IllegalEscapeSequence { .. }
        )
    }
}

/// Result type for lexer operations.
pub type LexResult<T> = Result<T, LexError>;
