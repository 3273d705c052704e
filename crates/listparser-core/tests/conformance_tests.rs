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

//! Conformance tests for the list notation.
//!
//! Each section exercises one area of the grammar through the public API.

use listparser_core::{
    parse, parse_str, parse_with_options, to_source, BracketKind, ElementKind, LexError,
    ParseErrorKind, ParseOptions, Pattern, SymbolTable, SyntaxElement, INVALID_SYMBOL_ID,
};
use std::sync::Arc;
use std::thread;

fn parse_one(input: &str) -> (listparser_core::ListElement, SymbolTable) {
    let symbols = SymbolTable::new();
    let mut lists = parse_str("test", &symbols, input).expect("parse should succeed");
    assert_eq!(lists.len(), 1, "expected one root list");
    (lists.remove(0), symbols)
}

// =============================================================================
// 1. Structure
// =============================================================================

/// 1.1: Bracket kinds follow the opening bracket
#[test]
fn test_bracket_kinds_follow_source() {
    let (list, _) = parse_one("([a] {b} (c))");
    assert_eq!(list.bracket(), BracketKind::Paren);
    let kinds: Vec<_> = list
        .iter()
        .filter_map(SyntaxElement::as_list)
        .map(|l| l.bracket())
        .collect();
    assert_eq!(
        kinds,
        vec![BracketKind::Square, BracketKind::Curly, BracketKind::Paren]
    );
}

/// 1.2: Several root lists, empty and nested
#[test]
fn test_multiple_roots() {
    let symbols = SymbolTable::new();
    let lists = parse_str("test", &symbols, "() [x] {(y) [z]}\n(w)").unwrap();
    assert_eq!(lists.len(), 4);
    assert!(lists[0].is_empty());
    assert_eq!(lists[2].len(), 2);
    assert_eq!(lists[3].position().line(), 2);
}

/// 1.3: Empty and comment-only input yield no lists
#[test]
fn test_empty_sources() {
    let symbols = SymbolTable::new();
    assert!(parse_str("test", &symbols, "").unwrap().is_empty());
    assert!(parse_str("test", &symbols, "\n\n   \t\n").unwrap().is_empty());
    assert!(parse_str("test", &symbols, "; nothing here\n").unwrap().is_empty());
}

/// 1.4: Lists span lines; CRLF endings are accepted
#[test]
fn test_lists_span_lines() {
    let (list, _) = parse_one("(a\r\n  b\r\n  (c\r\n   d))\r\n");
    assert_eq!(list.len(), 3);
    let inner = list.list_at(2).unwrap();
    assert_eq!(inner.position().line(), 3);
    assert_eq!(inner.position().column(), 3);
}

// =============================================================================
// 2. Scalars
// =============================================================================

/// 2.1: Integer, float and symbol in order
#[test]
fn test_scalar_classification_order() {
    let (list, symbols) = parse_one("(1 1.5 foo)");
    let kinds: Vec<_> = list.iter().map(SyntaxElement::kind).collect();
    assert_eq!(
        kinds,
        vec![ElementKind::Int, ElementKind::Float, ElementKind::Symbol]
    );
    assert_eq!(list.int_at(0), Some(1));
    assert_eq!(list.float_at(1), Some(1.5));
    assert_eq!(list.symbol_at(2), symbols.lookup("foo"));
}

/// 2.2: A single integer inside a list
#[test]
fn test_single_int() {
    let (list, _) = parse_one("(42)");
    assert_eq!(list.len(), 1);
    assert_eq!(list.element_at(0).unwrap().kind(), ElementKind::Int);
    assert_eq!(list.int_at(0), Some(42));
}

/// 2.3: Integer syntax
#[test]
fn test_integer_forms() {
    let (list, _) = parse_one("(-7 +7 0x1F 0o17 017 0b1010 1_000 9223372036854775807)");
    let values: Vec<_> = list.iter().filter_map(SyntaxElement::as_int).collect();
    assert_eq!(values, vec![-7, 7, 31, 15, 15, 10, 1000, i64::MAX]);
}

/// 2.4: Float syntax, including special values
#[test]
fn test_float_forms() {
    let (list, _) = parse_one("(0.5 -2.0e3 .25 inf -Infinity 9223372036854775808)");
    assert_eq!(list.float_at(0), Some(0.5));
    assert_eq!(list.float_at(1), Some(-2000.0));
    assert_eq!(list.float_at(2), Some(0.25));
    assert_eq!(list.float_at(3), Some(f64::INFINITY));
    assert_eq!(list.float_at(4), Some(f64::NEG_INFINITY));
    // out of i64 range falls through to float
    assert_eq!(list.float_at(5), Some(9.223372036854775808e18));

    let (list, _) = parse_one("(nan)");
    assert!(list.float_at(0).unwrap().is_nan());
}

/// 2.5: Things that look numeric but are symbols
#[test]
fn test_numeric_looking_symbols() {
    let (list, symbols) = parse_one("(1e400 0x 12abc - + 1_ v1.0)");
    assert!(list.iter().all(|e| e.kind() == ElementKind::Symbol));
    assert!(symbols.lookup("1e400").is_some());
    assert!(symbols.lookup("v1.0").is_some());
}

/// 2.6: Symbols end at delimiters, not at quotes
#[test]
fn test_symbol_delimiters() {
    let (list, symbols) = parse_one("(a;c\nb(c)d\"e)");
    assert_eq!(list.symbol_at(0), symbols.lookup("a"));
    assert_eq!(list.symbol_at(1), symbols.lookup("b"));
    assert_eq!(list.list_at(2).map(|l| l.len()), Some(1));
    assert_eq!(list.symbol_at(3), symbols.lookup("d\"e"));
}

/// 2.7: Hexadecimal floats need a binary exponent
#[test]
fn test_hex_float_forms() {
    let (list, symbols) = parse_one("(0x1p-2 0x1.8p1 0x_1p0 0x1.8 0x1p1024)");
    let kinds: Vec<_> = list.iter().map(SyntaxElement::kind).collect();
    assert_eq!(
        kinds,
        vec![
            ElementKind::Float,
            ElementKind::Float,
            ElementKind::Float,
            ElementKind::Symbol,
            ElementKind::Symbol
        ]
    );
    assert_eq!(list.float_at(0), Some(0.25));
    assert_eq!(list.float_at(1), Some(3.0));
    assert_eq!(list.float_at(2), Some(1.0));
    assert!(symbols.lookup("0x1.8").is_some());
}

// =============================================================================
// 3. Strings
// =============================================================================

/// 3.1: Escape sequences
#[test]
fn test_string_escapes() {
    let (list, _) = parse_one(r#"("\n" "\101" "\x41" "\a\b\f\r\t\v" "\\\'\"\?")"#);
    assert_eq!(list.str_at(0), Some("\n"));
    assert_eq!(list.str_at(1), Some("A"));
    assert_eq!(list.str_at(2), Some("A"));
    assert_eq!(list.str_at(3), Some("\x07\x08\x0c\r\t\x0b"));
    assert_eq!(list.str_at(4), Some("\\'\"?"));
}

/// 3.2: Illegal escape is reported at the offending character
#[test]
fn test_illegal_escape() {
    let symbols = SymbolTable::new();
    let err = parse_str("test", &symbols, r#"("\q")"#).unwrap_err();
    match &err.kind {
        ParseErrorKind::Lexing(LexError::IllegalEscapeSequence { ch, .. }) => assert_eq!(*ch, 'q'),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.position.column(), 4);
}

/// 3.3: Unterminated string at end of line
#[test]
fn test_unterminated_string() {
    let symbols = SymbolTable::new();
    let err = parse_str("test", &symbols, "(\"abc\n\")").unwrap_err();
    assert!(matches!(
        err.kind,
        ParseErrorKind::Lexing(LexError::UnexpectedEndOfLine { .. })
    ));
    assert_eq!(err.position.line(), 1);
    assert_eq!(err.position.column(), 6);
}

/// 3.4: Strings are never interned and never classified as numbers
#[test]
fn test_strings_stay_strings() {
    let (list, symbols) = parse_one(r#"("42" "foo")"#);
    assert_eq!(list.str_at(0), Some("42"));
    assert_eq!(list.int_at(0), None);
    assert!(symbols.is_empty());
}

// =============================================================================
// 4. Comments
// =============================================================================

/// 4.1: A comment inside a list is ignored
#[test]
fn test_comment_inside_list() {
    let symbols = SymbolTable::new();
    let with_comment = parse_str("test", &symbols, "(a ; comment\n b)").unwrap();
    let plain = parse_str("test", &symbols, "(a b)").unwrap();
    assert_eq!(to_source(&with_comment, &symbols), to_source(&plain, &symbols));
}

/// 4.2: Brackets inside comments do not count
#[test]
fn test_brackets_in_comment() {
    let (list, _) = parse_one("(a ; ) ] }\n)");
    assert_eq!(list.len(), 1);
}

// =============================================================================
// 5. Structural errors
// =============================================================================

/// 5.1: Mismatched closing bracket
#[test]
fn test_inconsistent_closing_bracket() {
    let symbols = SymbolTable::new();
    let err = parse_str("test", &symbols, "(a]").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::InconsistentClosingBracket {
            open: '(',
            close: ']'
        }
    );
    assert_eq!(err.position.column(), 3);
    assert_eq!(err.to_string(), "test:1:3 inconsistent closing bracket: '(' closed by ']'");
}

/// 5.2: Missing closing bracket at end of input
#[test]
fn test_missing_closing_bracket() {
    let symbols = SymbolTable::new();
    let err = parse_str("test", &symbols, "(a").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingClosingParenthesis);
    assert_eq!(err.position.line(), 1);
    assert_eq!(err.position.column(), 3);
}

/// 5.3: Lone closing bracket
#[test]
fn test_unexpected_closing_bracket() {
    let symbols = SymbolTable::new();
    let err = parse_str("test", &symbols, ")").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedClosingParenthesis);
    assert_eq!(err.position.column(), 1);
}

/// 5.4: Scalars must live inside a list
#[test]
fn test_top_level_scalar() {
    let symbols = SymbolTable::new();
    let err = parse_str("test", &symbols, "42").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::TopLevelElementMustBeAList);
    assert_eq!(err.to_string(), "test:1:1 top-level element must be a list");
}

/// 5.5: Nesting beyond the configured depth
#[test]
fn test_nesting_too_deep() {
    let symbols = SymbolTable::new();
    let opts = ParseOptions::builder().max_depth(3).build();
    let err = parse_with_options("test", &symbols, "((([[x]])))".as_bytes(), &opts).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::NestingTooDeep { depth: 4, max: 3 });
    assert_eq!(err.position.column(), 4);
}

/// 5.6: Without options, depth is only bounded by the input
#[test]
fn test_default_parse_has_no_depth_limit() {
    let depth = 3_000;
    let input = format!("{}x{}", "[".repeat(depth), "]".repeat(depth));
    let symbols = SymbolTable::new();
    let lists = parse_str("test", &symbols, &input).expect("deep input parses");
    assert_eq!(lists.len(), 1);
    assert!(symbols.lookup("x").is_some());
}

/// 5.7: Invalid UTF-8 is a lexing error at the bad bytes
#[test]
fn test_invalid_encoding() {
    let symbols = SymbolTable::new();
    let input: &[u8] = b"(ok)\n(ab\xff)";
    let err = parse("test", &symbols, input).unwrap_err();
    assert!(matches!(
        err.kind,
        ParseErrorKind::Lexing(LexError::IllegalCharacterEncoding { .. })
    ));
    assert_eq!(err.position.line(), 2);
    assert_eq!(err.position.column(), 4);
}

// =============================================================================
// 6. Symbols and patterns
// =============================================================================

/// 6.1: Interning is stable within one table
#[test]
fn test_interning() {
    let (same, symbols) = parse_one("(a a)");
    assert_eq!(same.symbol_at(0), same.symbol_at(1));
    assert_ne!(same.symbol_at(0), Some(INVALID_SYMBOL_ID));

    let different = parse_str("test", &symbols, "(a b)").unwrap();
    assert_ne!(different[0].symbol_at(0), different[0].symbol_at(1));
    assert_eq!(different[0].symbol_at(0), same.symbol_at(0));
}

/// 6.2: Exact match against symbols and kinds
#[test]
fn test_matches_event_goto() {
    let symbols = SymbolTable::new();
    let event = symbols.get_symbol_id("event");
    let goto = symbols.get_symbol_id("goto");
    let lists = parse_str("test", &symbols, "(event test1 goto state1)").unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].len(), 4);

    let shape: [Pattern; 4] = [
        event.into(),
        ElementKind::Symbol.into(),
        goto.into(),
        ElementKind::Symbol.into(),
    ];
    assert!(lists[0].matches(&shape));

    let wrong: [Pattern; 4] = [
        event.into(),
        ElementKind::Int.into(),
        goto.into(),
        ElementKind::Symbol.into(),
    ];
    assert!(!lists[0].matches(&wrong));
}

/// 6.3: Prefix match
#[test]
fn test_starts_with_prefix() {
    let symbols = SymbolTable::new();
    let event = symbols.get_symbol_id("event");
    let lists = parse_str("test", &symbols, "(event test1 goto state1)").unwrap();
    assert!(lists[0].starts_with(&[event.into(), ElementKind::Symbol.into()]));
    assert!(!lists[0].matches(&[event.into(), ElementKind::Symbol.into()]));
    assert!(lists[0].starts_with(&[]));
}

/// 6.4: One table shared by concurrent parses yields one id per text
#[test]
fn test_shared_table_across_threads() {
    let symbols = Arc::new(SymbolTable::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let symbols = Arc::clone(&symbols);
            thread::spawn(move || {
                let input = format!("(shared only{i} (shared))");
                let lists = parse_str(format!("t{i}"), &symbols, &input).unwrap();
                lists[0].symbol_at(0).unwrap()
            })
        })
        .collect();

    let ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(ids.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(symbols.len(), 9);
    assert_eq!(symbols.name(ids[0]).as_deref(), Some("shared"));
}

// =============================================================================
// 7. Positions
// =============================================================================

/// 7.1: Source names and positions are attached to every element
#[test]
fn test_positions_on_elements() {
    let symbols = SymbolTable::new();
    let lists = parse_str("machine.lst", &symbols, "; header\n  (go \"there\" 3)").unwrap();
    let list = &lists[0];
    assert_eq!(list.position().to_string(), "machine.lst:2:3");
    let columns: Vec<_> = list.iter().map(|e| e.position().column()).collect();
    assert_eq!(columns, vec![4, 7, 15]);
}
