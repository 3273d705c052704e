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

//! Property-based tests for parsing and canonical output.

use listparser_core::{
    parse_float_literal, parse_int_literal, parse_str, to_source, BracketKind, ElementKind,
    ParseErrorKind, SymbolTable, SyntaxElement,
};
use proptest::prelude::*;

fn bracket() -> impl Strategy<Value = BracketKind> {
    prop_oneof![
        Just(BracketKind::Paren),
        Just(BracketKind::Square),
        Just(BracketKind::Curly),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: Integers survive write and re-parse.
    #[test]
    fn prop_int_roundtrip(value in any::<i64>()) {
        let symbols = SymbolTable::new();
        let lists = parse_str("p", &symbols, &format!("({})", value)).unwrap();
        prop_assert_eq!(lists[0].int_at(0), Some(value));

        let text = to_source(&lists, &symbols).unwrap();
        let again = parse_str("p", &symbols, &text).unwrap();
        prop_assert_eq!(again[0].int_at(0), Some(value));
    }

    /// Property: Finite floats survive write and re-parse bit for bit.
    #[test]
    fn prop_float_roundtrip(value in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let symbols = SymbolTable::new();
        let text = format!("({:?})", value);
        let lists = parse_str("p", &symbols, &text).unwrap();
        prop_assert_eq!(lists[0].element_at(0).map(SyntaxElement::kind), Some(ElementKind::Float));

        let again = parse_str("p", &symbols, &to_source(&lists, &symbols).unwrap()).unwrap();
        let parsed = again[0].float_at(0).unwrap();
        prop_assert_eq!(parsed.to_bits(), value.to_bits());
    }

    /// Property: Any string survives write and re-parse.
    #[test]
    fn prop_string_roundtrip(value in "\\PC*|[\\x00-\\x1f\"\\\\]{0,8}") {
        let symbols = SymbolTable::new();
        let source = format!("({})", listparser_core::writer::quote_string(&value));
        let lists = parse_str("p", &symbols, &source).unwrap();
        prop_assert_eq!(lists[0].str_at(0), Some(value.as_str()));
    }

    /// Property: Symbols keep their id through write and re-parse with one table.
    #[test]
    fn prop_symbol_roundtrip(name in "[a-z][a-z0-9_\\-]{0,12}") {
        prop_assume!(parse_float_literal(&name).is_none());
        let symbols = SymbolTable::new();
        let lists = parse_str("p", &symbols, &format!("({} {})", name, name)).unwrap();
        let id = lists[0].symbol_at(0);
        prop_assert!(id.is_some());
        prop_assert_eq!(lists[0].symbol_at(1), id);

        let again = parse_str("p", &symbols, &to_source(&lists, &symbols).unwrap()).unwrap();
        prop_assert_eq!(again[0].symbol_at(0), id);
        prop_assert_eq!(symbols.len(), 1);
    }

    /// Property: Decimal digit runs are integers, not floats or symbols.
    #[test]
    fn prop_decimal_is_int(value in 1_u32..) {
        let text = value.to_string();
        prop_assert_eq!(parse_int_literal(&text), Some(i64::from(value)));
    }

    /// Property: Plain words are never numeric.
    #[test]
    fn prop_identifiers_are_not_numbers(name in "[g-wyz][a-z]{0,8}") {
        prop_assume!(!["inf", "infinity", "nan"].contains(&name.as_str()));
        prop_assert_eq!(parse_int_literal(&name), None);
        prop_assert_eq!(parse_float_literal(&name), None);
    }

    /// Property: Matched nesting parses and keeps every bracket kind.
    #[test]
    fn prop_nested_brackets(kinds in prop::collection::vec(bracket(), 1..40)) {
        let open: String = kinds.iter().map(|k| k.open_char()).collect();
        let close: String = kinds.iter().rev().map(|k| k.close_char()).collect();
        let symbols = SymbolTable::new();
        let lists = parse_str("p", &symbols, &format!("{}{}", open, close)).unwrap();
        prop_assert_eq!(lists.len(), 1);

        let mut current = &lists[0];
        for (depth, kind) in kinds.iter().enumerate() {
            prop_assert_eq!(current.bracket(), *kind);
            prop_assert_eq!(current.position().column(), depth + 1);
            if depth + 1 < kinds.len() {
                current = current.list_at(0).unwrap();
            }
        }
    }

    /// Property: Dropping the last closing bracket always reports it missing.
    #[test]
    fn prop_unclosed_reports_missing(kinds in prop::collection::vec(bracket(), 1..20)) {
        let open: String = kinds.iter().map(|k| k.open_char()).collect();
        let close: String = kinds
            .iter()
            .rev()
            .take(kinds.len() - 1)
            .map(|k| k.close_char())
            .collect();
        let symbols = SymbolTable::new();
        let err = parse_str("p", &symbols, &format!("{}{}", open, close)).unwrap_err();
        prop_assert_eq!(err.kind, ParseErrorKind::MissingClosingParenthesis);
    }
}
