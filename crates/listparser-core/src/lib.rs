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

//! Lexer, parser and syntax tree for bracketed list notation.
//!
//! Sources are sequences of lists delimited by `( )`, `[ ]` or `{ }`. Lists
//! hold integers, floats, quoted strings, symbols and other lists; `;` starts
//! a comment running to end of line.
//!
//! ```text
//! ; a tiny state machine
//! (state idle
//!   [on start -> running]
//!   {timeout 1.5 "seconds"})
//! ```
//!
//! Symbols are interned in a caller-owned [`SymbolTable`], so handlers can
//! match on a [`SymbolId`] instead of comparing strings. Every element and
//! every error carries a [`Position`].
//!
//! # Examples
//!
//! ```
//! use listparser_core::{parse_str, ElementKind, Pattern, SymbolTable};
//!
//! let symbols = SymbolTable::new();
//! let state = symbols.get_symbol_id("state");
//!
//! let lists = parse_str("machine.lst", &symbols, "(state idle 3)").unwrap();
//! let list = &lists[0];
//! assert!(list.matches(&[state.into(), ElementKind::Symbol.into(), ElementKind::Int.into()]));
//! assert!(list.starts_with(&[Pattern::Symbol(state)]));
//! ```
//!
//! # Module Structure
//!
//! - [`lex`] - Line reader, escape decoder and tokenizer
//! - [`writer`] - Canonical re-serialization

mod element;
mod error;
mod inference;
pub mod lex;
mod limits;
mod parser;
mod position;
mod symbol;
pub mod writer;

pub use element::{BracketKind, ElementKind, ListElement, Pattern, SyntaxElement};
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use inference::{parse_float_literal, parse_int_literal};
pub use lex::LexError;
pub use limits::{Limits, DEFAULT_MAX_DEPTH};
pub use parser::{parse, parse_str, parse_with_options, ParseOptions, ParseOptionsBuilder};
pub use position::Position;
pub use symbol::{SymbolId, SymbolTable, INVALID_SYMBOL_ID, MAX_SYMBOLS, MIN_SYMBOL_ID};
pub use writer::{to_source, write_element, WriteError};
