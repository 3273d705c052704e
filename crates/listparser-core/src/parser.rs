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

//! Tree builder for bracketed list sources.
//!
//! Tokens from the [`Lexer`] drive an explicit stack of open lists. Opening
//! brackets push, closing brackets pop and attach the finished list to its
//! parent, or to the result when no parent is open. Scalars are appended to
//! the innermost open list after inference (integer, then float, then
//! symbol).
//!
//! # Limits
//!
//! [`parse`] and [`parse_str`] accept any nesting depth. Callers handling
//! untrusted input pass a [`Limits::max_depth`] through
//! [`parse_with_options`]; exceeding it fails with
//! [`ParseErrorKind::NestingTooDeep`] at the offending opening bracket.

use crate::element::{BracketKind, ListElement, SyntaxElement};
use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::inference::infer_scalar;
use crate::lex::{Lexer, TokenKind};
use crate::limits::Limits;
use crate::position::Position;
use crate::symbol::SymbolTable;
use std::io::Read;
use std::sync::Arc;
use tracing::{debug, trace};

/// Options for [`parse_with_options`].
///
/// # Examples
///
/// ```
/// use listparser_core::ParseOptions;
///
/// let opts = ParseOptions::builder().max_depth(64).build();
/// assert_eq!(opts.limits.max_depth, 64);
///
/// let mut opts = ParseOptions::default();
/// opts.limits.max_depth = 8;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Resource limits.
    pub limits: Limits,
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for [`ParseOptions`].
#[derive(Debug, Clone)]
pub struct ParseOptionsBuilder {
    limits: Limits,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
        }
    }

    /// Set the maximum list nesting depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.limits.max_depth = depth;
        self
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Build the ParseOptions.
    pub fn build(self) -> ParseOptions {
        ParseOptions {
            limits: self.limits,
        }
    }
}

impl Default for ParseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses every top-level list in `reader`.
///
/// `source` names the input in positions and errors. Symbols are interned in
/// `symbols`, which may be shared between parses. Input with no elements
/// yields an empty vector. Nesting depth is unlimited.
///
/// # Errors
///
/// Returns the first lexical or structural error encountered; no partial
/// result is produced.
///
/// # Examples
///
/// ```
/// use listparser_core::{parse, SymbolTable};
///
/// let symbols = SymbolTable::new();
/// let input = "(move 1 2)\n(stop)\n";
/// let lists = parse("moves.lst", &symbols, input.as_bytes()).unwrap();
/// assert_eq!(lists.len(), 2);
/// assert_eq!(lists[0].int_at(1), Some(1));
/// ```
pub fn parse<R: Read>(
    source: impl Into<Arc<str>>,
    symbols: &SymbolTable,
    reader: R,
) -> ParseResult<Vec<ListElement>> {
    let options = ParseOptions::builder().limits(Limits::unlimited()).build();
    parse_with_options(source, symbols, reader, &options)
}

/// Parses an in-memory string. See [`parse`].
pub fn parse_str(
    source: impl Into<Arc<str>>,
    symbols: &SymbolTable,
    input: &str,
) -> ParseResult<Vec<ListElement>> {
    parse(source, symbols, input.as_bytes())
}

/// Parses with explicit [`ParseOptions`]. See [`parse`].
pub fn parse_with_options<R: Read>(
    source: impl Into<Arc<str>>,
    symbols: &SymbolTable,
    reader: R,
    options: &ParseOptions,
) -> ParseResult<Vec<ListElement>> {
    let mut lexer = Lexer::new(source, reader);
    debug!(source = %lexer.source(), max_depth = options.limits.max_depth, "parsing list source");

    let mut tree = TreeBuilder::new(&options.limits);
    while let Some(token) = lexer.next_token()? {
        trace!(kind = ?token.kind, position = %token.pos, "token");
        match token.kind {
            TokenKind::Open(bracket) => tree.open(bracket, token.pos)?,
            TokenKind::Close(bracket) => tree.close(bracket, token.pos)?,
            TokenKind::Symbol(text) => {
                let list = tree.innermost(&token.pos)?;
                list.push(infer_scalar(&text, symbols, token.pos)?);
            }
            TokenKind::StringLiteral(value) => {
                let list = tree.innermost(&token.pos)?;
                list.push(SyntaxElement::String {
                    value,
                    position: token.pos,
                });
            }
            TokenKind::Comment(_) | TokenKind::Whitespace(' ' | '\t') => {}
            TokenKind::Whitespace(ch) => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedInputChar(ch),
                    token.pos,
                ));
            }
        }
    }

    let lists = tree.finish(lexer.cursor_position())?;
    debug!(
        source = %lexer.source(),
        lists = lists.len(),
        symbols = symbols.len(),
        "parsed list source"
    );
    Ok(lists)
}

/// Stack of open lists plus the finished top-level lists.
struct TreeBuilder<'a> {
    limits: &'a Limits,
    open: Vec<ListElement>,
    roots: Vec<ListElement>,
}

impl<'a> TreeBuilder<'a> {
    fn new(limits: &'a Limits) -> Self {
        Self {
            limits,
            open: Vec::new(),
            roots: Vec::new(),
        }
    }

    fn open(&mut self, bracket: BracketKind, pos: Position) -> ParseResult<()> {
        let depth = self.open.len() + 1;
        if depth > self.limits.max_depth {
            return Err(ParseError::new(
                ParseErrorKind::NestingTooDeep {
                    depth,
                    max: self.limits.max_depth,
                },
                pos,
            ));
        }
        self.open.push(ListElement::new(bracket, pos));
        Ok(())
    }

    fn close(&mut self, bracket: BracketKind, pos: Position) -> ParseResult<()> {
        let Some(top) = self.open.last() else {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedClosingParenthesis,
                pos,
            ));
        };
        if top.bracket() != bracket {
            return Err(ParseError::new(
                ParseErrorKind::InconsistentClosingBracket {
                    open: top.bracket().open_char(),
                    close: bracket.close_char(),
                },
                pos,
            ));
        }

        if let Some(list) = self.open.pop() {
            match self.open.last_mut() {
                Some(parent) => parent.push(list.into()),
                None => self.roots.push(list),
            }
        }
        Ok(())
    }

    /// The list scalars at `pos` belong to.
    fn innermost(&mut self, pos: &Position) -> ParseResult<&mut ListElement> {
        self.open.last_mut().ok_or_else(|| {
            ParseError::new(ParseErrorKind::TopLevelElementMustBeAList, pos.clone())
        })
    }

    fn finish(self, end: Position) -> ParseResult<Vec<ListElement>> {
        if !self.open.is_empty() {
            return Err(ParseError::new(
                ParseErrorKind::MissingClosingParenthesis,
                end,
            ));
        }
        Ok(self.roots)
    }
}
