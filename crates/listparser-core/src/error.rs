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

//! Error types for parsing.

use crate::lex::LexError;
use crate::position::Position;
use thiserror::Error;

/// The kind of error that occurred during parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// A token the parser has no rule for.
    #[error("unexpected input character '{0}'")]
    UnexpectedInputChar(char),
    /// Closing bracket with no list open.
    #[error("unexpected closing parenthesis")]
    UnexpectedClosingParenthesis,
    /// Closing bracket that does not pair with the innermost open bracket.
    #[error("inconsistent closing bracket: '{open}' closed by '{close}'")]
    InconsistentClosingBracket { open: char, close: char },
    /// Scalar outside of any list.
    #[error("top-level element must be a list")]
    TopLevelElementMustBeAList,
    /// Input ended with lists still open.
    #[error("missing closing parenthesis")]
    MissingClosingParenthesis,
    /// The lexer failed.
    #[error("lexing error: {0}")]
    Lexing(#[source] LexError),
    /// Nesting exceeded [`Limits::max_depth`](crate::Limits::max_depth).
    #[error("nesting depth {depth} exceeds maximum {max}")]
    NestingTooDeep { depth: usize, max: usize },
    /// The symbol table has no room for a new symbol.
    #[error("symbol table is full ({max} symbols)")]
    SymbolTableFull { max: usize },
}

/// An error that occurred during parsing, with the position it refers to.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{position} {kind}")]
pub struct ParseError {
    /// What went wrong.
    #[source]
    pub kind: ParseErrorKind,
    /// Where it went wrong.
    pub position: Position,
}

impl ParseError {
    /// Create a new error.
    pub fn new(kind: ParseErrorKind, position: Position) -> Self {
        Self { kind, position }
    }

    /// The wrapped lexer error, if parsing stopped in the lexer.
    pub fn lex_error(&self) -> Option<&LexError> {
        match &self.kind {
            ParseErrorKind::Lexing(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        let position = e.position().clone();
        Self::new(ParseErrorKind::Lexing(e), position)
    }
}

/// Result type for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display_includes_position() {
        let err = ParseError::new(
            ParseErrorKind::TopLevelElementMustBeAList,
            Position::new("t.lst", 1, 1),
        );
        assert_eq!(err.to_string(), "t.lst:1:1 top-level element must be a list");
    }

    #[test]
    fn test_inconsistent_bracket_display() {
        let err = ParseError::new(
            ParseErrorKind::InconsistentClosingBracket {
                open: '(',
                close: ']',
            },
            Position::new("t", 1, 3),
        );
        assert_eq!(
            err.to_string(),
            "t:1:3 inconsistent closing bracket: '(' closed by ']'"
        );
    }

    #[test]
    fn test_from_lex_error_keeps_position() {
        let lex = LexError::UnexpectedEndOfLine {
            pos: Position::new("t", 4, 12),
        };
        let err = ParseError::from(lex.clone());
        assert_eq!(err.position, Position::new("t", 4, 12));
        assert_eq!(err.lex_error(), Some(&lex));
        assert_eq!(err.to_string(), "t:4:12 lexing error: unexpected end of line");
    }

    #[test]
    fn test_source_chain() {
        let lex = LexError::IllegalEscapeSequence {
            ch: 'q',
            pos: Position::new("t", 1, 5),
        };
        let err = ParseError::from(lex);
        let kind = err.source().expect("kind is the source");
        let inner = kind.source().expect("lex error is the source of the kind");
        assert_eq!(inner.to_string(), "illegal escape sequence 'q'");
    }

    #[test]
    fn test_lex_error_absent_for_structural_errors() {
        let err = ParseError::new(
            ParseErrorKind::MissingClosingParenthesis,
            Position::new("t", 1, 3),
        );
        assert!(err.lex_error().is_none());
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_error<E: std::error::Error + Send + Sync + 'static>(_: E) {}
        accepts_error(ParseError::new(
            ParseErrorKind::UnexpectedClosingParenthesis,
            Position::new("t", 1, 1),
        ));
    }
}
