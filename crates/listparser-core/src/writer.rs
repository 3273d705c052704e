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

//! Canonical output for parsed trees.
//!
//! Rules:
//!
//! - Each top-level list on its own line, children separated by one space.
//! - Integers in decimal; floats always carry a `.`, an exponent, or are
//!   `NaN`/`inf`/`-inf`, so they re-parse as floats.
//! - Strings are quoted. `"` and `\` are escaped, named control characters
//!   use their letter escape, other control characters use `\xNN`.
//! - Symbols are written as their interned text. Text interned directly
//!   through [`SymbolTable::get_symbol_id`] that would re-parse as a number,
//!   a string or several tokens is a [`WriteError::UnwritableSymbol`].
//!
//! Parsing the output with the same [`SymbolTable`] reproduces the tree up to
//! positions.

use crate::element::{ListElement, SyntaxElement};
use crate::inference::{parse_float_literal, parse_int_literal};
use crate::lex::lexes_as_symbol;
use crate::symbol::{SymbolId, SymbolTable};
use std::fmt::Write as _;
use thiserror::Error;

/// Errors from writing a tree back to text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    /// The symbol id is not present in the table.
    #[error("unknown symbol {0}")]
    UnknownSymbol(SymbolId),

    /// The interned text would not read back as the same symbol.
    #[error("symbol {id} text {name:?} does not read back as a symbol")]
    UnwritableSymbol { id: SymbolId, name: String },
}

/// Writes all top-level lists, one per line.
///
/// # Examples
///
/// ```
/// use listparser_core::{parse_str, to_source, SymbolTable};
///
/// let symbols = SymbolTable::new();
/// let lists = parse_str("t", &symbols, "( say   \"hi\\n\"  [1 2.50] )").unwrap();
/// assert_eq!(to_source(&lists, &symbols).unwrap(), "(say \"hi\\n\" [1 2.5])\n");
/// ```
pub fn to_source(lists: &[ListElement], symbols: &SymbolTable) -> Result<String, WriteError> {
    let mut writer = CanonicalWriter::new(symbols);
    for list in lists {
        writer.write_list(list)?;
        writer.out.push('\n');
    }
    Ok(writer.out)
}

/// Writes a single element without a trailing newline.
pub fn write_element(element: &SyntaxElement, symbols: &SymbolTable) -> Result<String, WriteError> {
    let mut writer = CanonicalWriter::new(symbols);
    match element {
        SyntaxElement::List(list) => writer.write_list(list)?,
        scalar => writer.write_scalar(scalar)?,
    }
    Ok(writer.out)
}

struct Frame<'a> {
    items: std::slice::Iter<'a, SyntaxElement>,
    close: char,
    first: bool,
}

struct CanonicalWriter<'t> {
    symbols: &'t SymbolTable,
    out: String,
}

impl<'t> CanonicalWriter<'t> {
    fn new(symbols: &'t SymbolTable) -> Self {
        Self {
            symbols,
            out: String::new(),
        }
    }

    /// Iterative so nesting depth is bounded by the heap, not the call stack.
    fn write_list(&mut self, list: &ListElement) -> Result<(), WriteError> {
        self.out.push(list.bracket().open_char());
        let mut stack = vec![Frame {
            items: list.iter(),
            close: list.bracket().close_char(),
            first: true,
        }];

        while let Some(frame) = stack.last_mut() {
            let next = frame.items.next();
            let first = std::mem::replace(&mut frame.first, false);
            let Some(element) = next else {
                let close = frame.close;
                stack.pop();
                self.out.push(close);
                continue;
            };

            if !first {
                self.out.push(' ');
            }
            match element {
                SyntaxElement::List(inner) => {
                    self.out.push(inner.bracket().open_char());
                    stack.push(Frame {
                        items: inner.iter(),
                        close: inner.bracket().close_char(),
                        first: true,
                    });
                }
                scalar => self.write_scalar(scalar)?,
            }
        }
        Ok(())
    }

    fn write_scalar(&mut self, element: &SyntaxElement) -> Result<(), WriteError> {
        match element {
            SyntaxElement::Int { value, .. } => {
                let _ = write!(self.out, "{}", value);
            }
            SyntaxElement::Float { value, .. } => self.out.push_str(&format_float(*value)),
            SyntaxElement::String { value, .. } => self.out.push_str(&quote_string(value)),
            SyntaxElement::Symbol { id, .. } => {
                let name = self.symbols.name(*id).ok_or(WriteError::UnknownSymbol(*id))?;
                if !lexes_as_symbol(&name)
                    || parse_int_literal(&name).is_some()
                    || parse_float_literal(&name).is_some()
                {
                    return Err(WriteError::UnwritableSymbol {
                        id: *id,
                        name: name.to_string(),
                    });
                }
                self.out.push_str(&name);
            }
            SyntaxElement::List(list) => self.write_list(list)?,
        }
        Ok(())
    }
}

/// Formats a float so that it re-parses as the same float.
pub fn format_float(value: f64) -> String {
    // Debug keeps a fractional part or exponent and spells NaN/inf
    format!("{:?}", value)
}

/// Quotes and escapes a string literal.
///
/// ```
/// use listparser_core::writer::quote_string;
///
/// assert_eq!(quote_string("a\"b"), r#""a\"b""#);
/// assert_eq!(quote_string("\u{1}"), r#""\x01""#);
/// ```
pub fn quote_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            '\x07' => result.push_str("\\a"),
            '\x08' => result.push_str("\\b"),
            '\x0b' => result.push_str("\\v"),
            '\x0c' => result.push_str("\\f"),
            c if c.is_control() => {
                let _ = write!(result, "\\x{:02x}", u32::from(c));
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}
