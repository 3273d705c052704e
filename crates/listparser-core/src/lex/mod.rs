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

//! Lexical analysis for bracketed list notation.
//!
//! The [`Lexer`] pulls physical lines from a [`reader::LineReader`] and turns
//! them into [`Token`]s one call at a time. Recognition order for the next
//! character:
//!
//! 1. `( ) [ ] { }`, tab and space: single-character tokens.
//! 2. `"`: a string literal, decoded by [`escape::StringDecoder`].
//!    Literals never span lines.
//! 3. `;`: a comment running to end of line.
//! 4. Anything else: a symbol, ending before whitespace, `;`, a bracket, or
//!    at end of line.
//!
//! # Module Structure
//!
//! - [`error`] - Lexical error types
//! - [`escape`] - String literal escape state machine
//! - [`reader`] - Line-splitting input front end
//!
//! # Examples
//!
//! ```
//! use listparser_core::lex::{Lexer, TokenKind};
//! use listparser_core::BracketKind;
//!
//! let mut lexer = Lexer::new("inline", "(go \"x\")".as_bytes());
//! let open = lexer.next_token().unwrap().unwrap();
//! assert_eq!(open.kind, TokenKind::Open(BracketKind::Paren));
//! let sym = lexer.next_token().unwrap().unwrap();
//! assert_eq!(sym.kind, TokenKind::Symbol("go".to_string()));
//! assert_eq!(sym.pos.column(), 2);
//! ```

pub mod error;
pub mod escape;
pub mod reader;

pub use error::{LexError, LexResult};

use crate::element::BracketKind;
use crate::position::Position;
use escape::{DecodeFault, Step, StringDecoder};
use reader::{Line, LineReader};
use std::io::Read;
use std::sync::Arc;

const COMMENT_START: char = ';';
const QUOTE: char = '"';

/// What a token is.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// `(`, `[` or `{`.
    Open(BracketKind),
    /// `)`, `]` or `}`.
    Close(BracketKind),
    /// A single tab or space.
    Whitespace(char),
    /// Raw symbol text, classified later by the parser.
    Symbol(String),
    /// Decoded string literal contents.
    StringLiteral(String),
    /// Comment text after `;`, up to end of line.
    Comment(String),
}

/// A classified token and where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Position,
}

/// What sits under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Peek {
    Char(char),
    EndOfLine,
    Invalid,
}

fn is_symbol_delimiter(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | COMMENT_START)
        || BracketKind::from_open(ch).is_some()
        || BracketKind::from_close(ch).is_some()
}

/// Returns true if `text` lexes back as one symbol token.
pub(crate) fn lexes_as_symbol(text: &str) -> bool {
    !text.is_empty()
        && !text.starts_with(QUOTE)
        && !text.contains(|ch: char| ch == '\n' || is_symbol_delimiter(ch))
}

/// Line-oriented tokenizer.
pub struct Lexer<R: Read> {
    source: Arc<str>,
    reader: LineReader<R>,
    line: Option<Line>,
    cursor: usize,
    exhausted: bool,
}

impl<R: Read> Lexer<R> {
    /// Creates a lexer over `reader`; `source` names the input in positions.
    pub fn new(source: impl Into<Arc<str>>, reader: R) -> Self {
        Self {
            source: source.into(),
            reader: LineReader::new(reader),
            line: None,
            cursor: 0,
            exhausted: false,
        }
    }

    /// Name of the input.
    #[inline]
    pub fn source(&self) -> &Arc<str> {
        &self.source
    }

    /// Position of the cursor.
    ///
    /// After end of input this is one column past the last character of the
    /// last line. Before anything has been read it is line 0.
    pub fn cursor_position(&self) -> Position {
        let line = self.line.as_ref().map_or(0, Line::number);
        Position::with_shared(&self.source, line, self.cursor + 1)
    }

    fn peek(&self) -> Peek {
        let Some(line) = &self.line else {
            return Peek::EndOfLine;
        };
        match line.chars().get(self.cursor) {
            Some(&ch) => Peek::Char(ch),
            None if line.invalid_at().is_some() => Peek::Invalid,
            None => Peek::EndOfLine,
        }
    }

    /// Moves to the next physical line. Returns `false` at end of input,
    /// leaving the cursor at the end of the last line.
    fn advance_line(&mut self) -> LexResult<bool> {
        match self.reader.next_line() {
            Ok(Some(line)) => {
                self.line = Some(line);
                self.cursor = 0;
                Ok(true)
            }
            Ok(None) => Ok(false),
            Err(e) => Err(LexError::Io {
                message: e.to_string(),
                pos: self.cursor_position(),
            }),
        }
    }

    /// Returns the next token, `Ok(None)` at end of input.
    ///
    /// Blank and fully consumed lines are skipped.
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        let first = loop {
            match self.peek() {
                Peek::Char(ch) => break ch,
                Peek::Invalid => {
                    return Err(LexError::IllegalCharacterEncoding {
                        pos: self.cursor_position(),
                    })
                }
                Peek::EndOfLine => {
                    if !self.advance_line()? {
                        return Ok(None);
                    }
                }
            }
        };

        let pos = self.cursor_position();
        let kind = if let Some(bracket) = BracketKind::from_open(first) {
            self.cursor += 1;
            TokenKind::Open(bracket)
        } else if let Some(bracket) = BracketKind::from_close(first) {
            self.cursor += 1;
            TokenKind::Close(bracket)
        } else if first == ' ' || first == '\t' {
            self.cursor += 1;
            TokenKind::Whitespace(first)
        } else if first == QUOTE {
            self.cursor += 1;
            TokenKind::StringLiteral(self.read_string()?)
        } else if first == COMMENT_START {
            self.cursor += 1;
            TokenKind::Comment(self.read_comment()?)
        } else {
            TokenKind::Symbol(self.read_symbol()?)
        };

        Ok(Some(Token { kind, pos }))
    }

    /// Decodes a string literal; the cursor is just past the opening quote.
    fn read_string(&mut self) -> LexResult<String> {
        let mut decoder = StringDecoder::new();
        loop {
            let pos = self.cursor_position();
            match self.peek() {
                Peek::Char(ch) => {
                    self.cursor += 1;
                    match decoder.feed(ch) {
                        Ok(Step::Finished) => return Ok(decoder.into_text()),
                        Ok(Step::Continue) => {}
                        Err(DecodeFault::IllegalEscape(ch)) => {
                            return Err(LexError::IllegalEscapeSequence { ch, pos })
                        }
                        Err(DecodeFault::InvalidCodePoint(_)) => {
                            return Err(LexError::IllegalCharacterEncoding { pos })
                        }
                    }
                }
                Peek::EndOfLine => return Err(LexError::UnexpectedEndOfLine { pos }),
                Peek::Invalid => return Err(LexError::IllegalCharacterEncoding { pos }),
            }
        }
    }

    /// Consumes the rest of the line; the cursor is just past the `;`.
    fn read_comment(&mut self) -> LexResult<String> {
        let Some(line) = &self.line else {
            return Err(LexError::IllegalLexerState {
                pos: self.cursor_position(),
            });
        };
        let chars = line.chars();
        let start = self.cursor.min(chars.len());
        let text: String = chars[start..].iter().collect();
        self.cursor = chars.len();
        if line.invalid_at().is_some() {
            return Err(LexError::IllegalCharacterEncoding {
                pos: self.cursor_position(),
            });
        }
        Ok(text)
    }

    /// Reads symbol text up to the next delimiter or end of line.
    fn read_symbol(&mut self) -> LexResult<String> {
        let mut text = String::new();
        loop {
            match self.peek() {
                Peek::Char(ch) if !is_symbol_delimiter(ch) => {
                    text.push(ch);
                    self.cursor += 1;
                }
                Peek::Char(_) | Peek::EndOfLine => return Ok(text),
                Peek::Invalid => {
                    return Err(LexError::IllegalCharacterEncoding {
                        pos: self.cursor_position(),
                    })
                }
            }
        }
    }
}

impl<R: Read> Iterator for Lexer<R> {
    type Item = LexResult<Token>;

    /// Yields tokens until end of input or the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.next_token().transpose();
        if !matches!(item, Some(Ok(_))) {
            self.exhausted = true;
        }
        item
    }
}
