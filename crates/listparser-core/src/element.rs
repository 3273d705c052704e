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

//! Syntax elements produced by the parser.

use crate::position::Position;
use crate::symbol::SymbolId;
use std::fmt;

/// One of the three paired delimiter styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BracketKind {
    /// `( )`
    Paren,
    /// `[ ]`
    Square,
    /// `{ }`
    Curly,
}

impl BracketKind {
    /// The opening character.
    pub const fn open_char(self) -> char {
        match self {
            Self::Paren => '(',
            Self::Square => '[',
            Self::Curly => '{',
        }
    }

    /// The closing character.
    pub const fn close_char(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Square => ']',
            Self::Curly => '}',
        }
    }

    /// Bracket kind opened by `ch`, if it is an opening bracket.
    pub const fn from_open(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(Self::Paren),
            '[' => Some(Self::Square),
            '{' => Some(Self::Curly),
            _ => None,
        }
    }

    /// Bracket kind closed by `ch`, if it is a closing bracket.
    pub const fn from_close(ch: char) -> Option<Self> {
        match ch {
            ')' => Some(Self::Paren),
            ']' => Some(Self::Square),
            '}' => Some(Self::Curly),
            _ => None,
        }
    }
}

/// The closed set of element variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ElementKind {
    Int,
    Float,
    String,
    Symbol,
    List,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::String => write!(f, "string"),
            Self::Symbol => write!(f, "symbol"),
            Self::List => write!(f, "list"),
        }
    }
}

/// A node of the parsed tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum SyntaxElement {
    /// Integer literal.
    Int { value: i64, position: Position },
    /// Floating-point literal.
    Float { value: f64, position: Position },
    /// Decoded string literal.
    String { value: String, position: Position },
    /// Interned symbol.
    Symbol { id: SymbolId, position: Position },
    /// Nested list.
    List(ListElement),
}

impl SyntaxElement {
    /// Where the element starts in the source.
    pub fn position(&self) -> &Position {
        match self {
            Self::Int { position, .. }
            | Self::Float { position, .. }
            | Self::String { position, .. }
            | Self::Symbol { position, .. } => position,
            Self::List(list) => list.position(),
        }
    }

    /// The variant of this element.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Int { .. } => ElementKind::Int,
            Self::Float { .. } => ElementKind::Float,
            Self::String { .. } => ElementKind::String,
            Self::Symbol { .. } => ElementKind::Symbol,
            Self::List(_) => ElementKind::List,
        }
    }

    /// Returns true if this element is of kind `kind`.
    #[inline]
    pub fn is_kind(&self, kind: ElementKind) -> bool {
        self.kind() == kind
    }

    /// Returns true if this element is a list.
    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns true if this element is the symbol `id`.
    #[inline]
    pub fn is_symbol(&self, id: SymbolId) -> bool {
        self.as_symbol() == Some(id)
    }

    /// Try to get the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Try to get the value as a float. Integers are not converted.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Try to get the value as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Try to get the symbol id.
    pub fn as_symbol(&self) -> Option<SymbolId> {
        match self {
            Self::Symbol { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Try to get the element as a list.
    pub fn as_list(&self) -> Option<&ListElement> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Child at `index`; always `None` for scalars.
    pub fn element_at(&self, index: usize) -> Option<&SyntaxElement> {
        self.as_list().and_then(|list| list.element_at(index))
    }

    /// Tests this element against one pattern position.
    pub fn satisfies(&self, pattern: &Pattern) -> bool {
        match pattern {
            Pattern::Kind(kind) => self.is_kind(*kind),
            Pattern::Symbol(id) => self.is_symbol(*id),
        }
    }
}

impl From<ListElement> for SyntaxElement {
    fn from(list: ListElement) -> Self {
        Self::List(list)
    }
}

/// A bracketed list of elements.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ListElement {
    bracket: BracketKind,
    elements: Vec<SyntaxElement>,
    position: Position,
}

impl ListElement {
    pub(crate) fn new(bracket: BracketKind, position: Position) -> Self {
        Self {
            bracket,
            elements: Vec::new(),
            position,
        }
    }

    pub(crate) fn push(&mut self, element: SyntaxElement) {
        self.elements.push(element);
    }

    /// Opening bracket style.
    #[inline]
    pub fn bracket(&self) -> BracketKind {
        self.bracket
    }

    /// Position of the opening bracket.
    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Number of children.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the list has no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Children in source order.
    #[inline]
    pub fn elements(&self) -> &[SyntaxElement] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SyntaxElement> {
        self.elements.iter()
    }

    /// Child at `index`.
    #[inline]
    pub fn element_at(&self, index: usize) -> Option<&SyntaxElement> {
        self.elements.get(index)
    }

    pub fn int_at(&self, index: usize) -> Option<i64> {
        self.element_at(index).and_then(SyntaxElement::as_int)
    }

    pub fn float_at(&self, index: usize) -> Option<f64> {
        self.element_at(index).and_then(SyntaxElement::as_float)
    }

    pub fn str_at(&self, index: usize) -> Option<&str> {
        self.element_at(index).and_then(SyntaxElement::as_str)
    }

    pub fn symbol_at(&self, index: usize) -> Option<SymbolId> {
        self.element_at(index).and_then(SyntaxElement::as_symbol)
    }

    pub fn list_at(&self, index: usize) -> Option<&ListElement> {
        self.element_at(index).and_then(SyntaxElement::as_list)
    }

    /// Returns true if the children match `patterns` one to one.
    ///
    /// # Examples
    ///
    /// ```
    /// use listparser_core::{parse_str, ElementKind, SymbolTable};
    ///
    /// let table = SymbolTable::new();
    /// let event = table.get_symbol_id("event");
    /// let goto = table.get_symbol_id("goto");
    /// let lists = parse_str("doc", &table, "(event test1 goto state1)").unwrap();
    ///
    /// assert!(lists[0].matches(&[
    ///     event.into(),
    ///     ElementKind::Symbol.into(),
    ///     goto.into(),
    ///     ElementKind::Symbol.into(),
    /// ]));
    /// assert!(!lists[0].matches(&[event.into(), ElementKind::Int.into()]));
    /// ```
    pub fn matches(&self, patterns: &[Pattern]) -> bool {
        self.len() == patterns.len() && self.starts_with(patterns)
    }

    /// Returns true if the leading children match `patterns`.
    pub fn starts_with(&self, patterns: &[Pattern]) -> bool {
        self.len() >= patterns.len()
            && self
                .elements
                .iter()
                .zip(patterns)
                .all(|(element, pattern)| element.satisfies(pattern))
    }
}

impl<'a> IntoIterator for &'a ListElement {
    type Item = &'a SyntaxElement;
    type IntoIter = std::slice::Iter<'a, SyntaxElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// One position of a structural match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Any element of this kind.
    Kind(ElementKind),
    /// Exactly this symbol.
    Symbol(SymbolId),
}

impl From<ElementKind> for Pattern {
    fn from(kind: ElementKind) -> Self {
        Self::Kind(kind)
    }
}

impl From<SymbolId> for Pattern {
    fn from(id: SymbolId) -> Self {
        Self::Symbol(id)
    }
}
