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

//! Symbol interning.
//!
//! A [`SymbolTable`] maps symbol text to a small integer [`SymbolId`]. Ids are
//! handed out monotonically starting at [`MIN_SYMBOL_ID`]; the same text always
//! maps to the same id within one table. [`INVALID_SYMBOL_ID`] is reserved and
//! never assigned.
//!
//! The table is passed to every parse call by reference, so callers decide
//! whether independent parses share a namespace or not. Interning takes
//! `&self` and is safe to call from several threads at once.
//!
//! # Examples
//!
//! ```
//! use listparser_core::{SymbolTable, INVALID_SYMBOL_ID};
//!
//! let table = SymbolTable::new();
//! let event = table.get_symbol_id("event");
//! assert_eq!(table.get_symbol_id("event"), event);
//! assert_ne!(table.get_symbol_id("goto"), event);
//! assert_ne!(event, INVALID_SYMBOL_ID);
//! assert_eq!(table.name(event).as_deref(), Some("event"));
//! ```

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Identifier of an interned symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SymbolId(u32);

/// Reserved id meaning "no symbol". Never returned by [`SymbolTable::get_symbol_id`].
pub const INVALID_SYMBOL_ID: SymbolId = SymbolId(0);

/// The first id a table assigns.
pub const MIN_SYMBOL_ID: SymbolId = SymbolId(1);

/// Most symbols any table can hold: every `u32` except [`INVALID_SYMBOL_ID`].
pub const MAX_SYMBOLS: usize = u32::MAX as usize;

impl SymbolId {
    /// Alias for [`INVALID_SYMBOL_ID`].
    pub const INVALID: SymbolId = INVALID_SYMBOL_ID;

    /// Returns the raw integer value.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns `true` unless this is the reserved invalid id.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != INVALID_SYMBOL_ID.0
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Default)]
struct SymbolTableInner {
    ids: HashMap<Arc<str>, SymbolId>,
    // names[i] is the text of SymbolId(i + MIN_SYMBOL_ID)
    names: Vec<Arc<str>>,
}

/// Thread-safe string interner.
#[derive(Debug)]
pub struct SymbolTable {
    inner: RwLock<SymbolTableInner>,
    max_symbols: usize,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::with_max_symbols(MAX_SYMBOLS)
    }
}

impl SymbolTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table that holds at most `max` symbols.
    ///
    /// `max` is capped at [`MAX_SYMBOLS`]. Parsing text that would need a
    /// symbol beyond the cap fails with
    /// [`ParseErrorKind::SymbolTableFull`](crate::ParseErrorKind::SymbolTableFull).
    ///
    /// ```
    /// use listparser_core::{parse_str, ParseErrorKind, SymbolTable};
    ///
    /// let table = SymbolTable::with_max_symbols(1);
    /// assert!(parse_str("t", &table, "(a a 1)").is_ok());
    /// let err = parse_str("t", &table, "(a b)").unwrap_err();
    /// assert_eq!(err.kind, ParseErrorKind::SymbolTableFull { max: 1 });
    /// ```
    pub fn with_max_symbols(max: usize) -> Self {
        Self {
            inner: RwLock::default(),
            max_symbols: max.min(MAX_SYMBOLS),
        }
    }

    /// Capacity set at construction.
    #[inline]
    pub fn max_symbols(&self) -> usize {
        self.max_symbols
    }

    /// Returns the id of `text`, assigning the next free id on first sight.
    ///
    /// When two threads intern the same new text concurrently, exactly one
    /// assignment happens and both observe the same id. New text arriving
    /// once the table is full gets [`INVALID_SYMBOL_ID`].
    pub fn get_symbol_id(&self, text: &str) -> SymbolId {
        if let Some(id) = self.inner.read().ids.get(text) {
            return *id;
        }

        let mut inner = self.inner.write();
        // Another writer may have won the race between the two locks.
        if let Some(id) = inner.ids.get(text) {
            return *id;
        }
        if inner.names.len() >= self.max_symbols {
            return INVALID_SYMBOL_ID;
        }
        let next = u32::try_from(inner.names.len())
            .ok()
            .and_then(|n| n.checked_add(MIN_SYMBOL_ID.0));
        let Some(raw) = next else {
            return INVALID_SYMBOL_ID;
        };
        let id = SymbolId(raw);
        let name: Arc<str> = Arc::from(text);
        inner.names.push(Arc::clone(&name));
        inner.ids.insert(name, id);
        id
    }

    /// Returns the id of `text` if it has already been interned.
    pub fn lookup(&self, text: &str) -> Option<SymbolId> {
        self.inner.read().ids.get(text).copied()
    }

    /// Returns the text of an interned symbol.
    pub fn name(&self, id: SymbolId) -> Option<Arc<str>> {
        let index = id.0.checked_sub(MIN_SYMBOL_ID.0)?;
        self.inner.read().names.get(index as usize).cloned()
    }

    /// Number of interned symbols.
    pub fn len(&self) -> usize {
        self.inner.read().names.len()
    }

    /// Returns `true` if nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.inner.read().names.is_empty()
    }

    /// Snapshot of all interned symbols in id order.
    pub fn symbols(&self) -> Vec<(SymbolId, Arc<str>)> {
        self.inner
            .read()
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| (SymbolId(i as u32 + MIN_SYMBOL_ID.0), Arc::clone(name)))
            .collect()
    }
}
