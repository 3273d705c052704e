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

//! Scalar inference ladder.
//!
//! Raw symbol tokens are classified by trying, in order:
//!
//! 1. a signed 64-bit integer ([`parse_int_literal`]),
//! 2. a 64-bit float ([`parse_float_literal`]),
//! 3. otherwise an interned symbol.

use crate::element::SyntaxElement;
use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::position::Position;
use crate::symbol::SymbolTable;

/// Parses an integer literal with an optional sign and base prefix.
///
/// Prefixes: `0x`/`0X` (hex), `0o`/`0O` (octal), `0b`/`0B` (binary), and a
/// bare leading `0` followed by more digits (octal). Single underscores may
/// separate digits. Values outside the `i64` range are rejected.
///
/// # Examples
///
/// ```
/// use listparser_core::parse_int_literal;
///
/// assert_eq!(parse_int_literal("42"), Some(42));
/// assert_eq!(parse_int_literal("-0x1F"), Some(-31));
/// assert_eq!(parse_int_literal("017"), Some(15));
/// assert_eq!(parse_int_literal("1_000"), Some(1000));
/// assert_eq!(parse_int_literal("1.5"), None);
/// ```
pub fn parse_int_literal(text: &str) -> Option<i64> {
    let (negative, body) = split_sign(text);
    if body.is_empty() {
        return None;
    }

    let (radix, digits, prefixed) = if let Some(rest) = strip_prefix_ci(body, "0x") {
        (16, rest, true)
    } else if let Some(rest) = strip_prefix_ci(body, "0o") {
        (8, rest, true)
    } else if let Some(rest) = strip_prefix_ci(body, "0b") {
        (2, rest, true)
    } else if body.len() > 1 && body.starts_with('0') {
        (8, &body[1..], true)
    } else {
        (10, body, false)
    };

    if !underscores_ok(digits, prefixed) {
        return None;
    }
    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    // from_str_radix would accept a second sign
    if cleaned.is_empty() || cleaned.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = u64::from_str_radix(&cleaned, radix).ok()?;
    if negative {
        if magnitude == i64::MIN.unsigned_abs() {
            Some(i64::MIN)
        } else {
            i64::try_from(magnitude).ok().map(|v| -v)
        }
    } else {
        i64::try_from(magnitude).ok()
    }
}

/// Parses a floating-point literal.
///
/// Accepts an optional sign, then either a decimal mantissa with optional
/// fraction and `e` exponent, or a `0x` hexadecimal mantissa with a mandatory
/// binary `p` exponent. Single underscores may separate digits. `inf`,
/// `infinity` and `nan` are accepted in any case. Literals that overflow to
/// infinity are rejected, so `1e400` stays a symbol.
///
/// # Examples
///
/// ```
/// use listparser_core::parse_float_literal;
///
/// assert_eq!(parse_float_literal("1.5"), Some(1.5));
/// assert_eq!(parse_float_literal("-2e3"), Some(-2000.0));
/// assert_eq!(parse_float_literal("0x1.8p1"), Some(3.0));
/// assert_eq!(parse_float_literal("Inf"), Some(f64::INFINITY));
/// assert_eq!(parse_float_literal("1e400"), None);
/// assert_eq!(parse_float_literal("foo"), None);
/// ```
pub fn parse_float_literal(text: &str) -> Option<f64> {
    let (negative, body) = split_sign(text);

    if body.eq_ignore_ascii_case("nan") {
        // NaN takes no sign
        return (body.len() == text.len()).then_some(f64::NAN);
    }
    let magnitude = if body.eq_ignore_ascii_case("inf") || body.eq_ignore_ascii_case("infinity") {
        f64::INFINITY
    } else {
        let value = match strip_prefix_ci(body, "0x") {
            Some(rest) => parse_hex_float(rest)?,
            None => parse_decimal_float(body)?,
        };
        if value.is_infinite() {
            return None;
        }
        value
    };
    Some(if negative { -magnitude } else { magnitude })
}

fn parse_decimal_float(body: &str) -> Option<f64> {
    if body.starts_with(['+', '-']) {
        return None;
    }
    if !body.contains('_') {
        return body.parse().ok();
    }
    if !float_underscores_ok(body, false) {
        return None;
    }
    let cleaned: String = body.chars().filter(|c| *c != '_').collect();
    cleaned.parse().ok()
}

/// Parses the part after `0x`: hex digits with at most one `.`, then
/// `p` and a signed decimal exponent.
fn parse_hex_float(rest: &str) -> Option<f64> {
    if !float_underscores_ok(rest, true) {
        return None;
    }
    let split = rest.find(['p', 'P'])?;
    let (mantissa, exponent) = (&rest[..split], &rest[split + 1..]);

    let mut bits: u128 = 0;
    let mut exp: i64 = 0;
    let mut sticky = false;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for c in mantissa.chars() {
        match c {
            '_' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => {
                let digit = c.to_digit(16)?;
                seen_digit = true;
                if bits >> 124 == 0 {
                    bits = bits << 4 | u128::from(digit);
                    if seen_dot {
                        exp -= 4;
                    }
                } else {
                    sticky |= digit != 0;
                    if !seen_dot {
                        exp += 4;
                    }
                }
            }
        }
    }
    if !seen_digit {
        return None;
    }

    let (exp_negative, exp_digits) = split_sign(exponent);
    if !exp_digits.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let mut binary_exp: i64 = 0;
    for c in exp_digits.chars().filter(|c| *c != '_') {
        let digit = c.to_digit(10)?;
        if binary_exp < 100_000 {
            binary_exp = binary_exp * 10 + i64::from(digit);
        }
    }

    if bits == 0 {
        return Some(0.0);
    }
    let exp = exp + if exp_negative { -binary_exp } else { binary_exp };
    Some(round_binary(bits, exp, sticky))
}

/// Rounds `bits * 2^exp` to the nearest `f64`, ties to even. `sticky` marks
/// nonzero digits dropped below `bits`.
fn round_binary(bits: u128, exp: i64, sticky: bool) -> f64 {
    let zeros = bits.leading_zeros();
    let bits = bits << zeros;
    // value lies in [2^top, 2^(top + 1))
    let top = exp + 127 - i64::from(zeros);
    if top > 1023 {
        return f64::INFINITY;
    }
    let keep = if top >= -1022 { 53 } else { 53 + (top + 1022) };
    if keep < 0 {
        return 0.0;
    }

    let shift = 128 - keep as u32;
    let (mut kept, rest) = if shift == 128 {
        (0, bits)
    } else {
        (bits >> shift, bits & ((1u128 << shift) - 1))
    };
    let half = 1u128 << (shift - 1);
    if rest > half || (rest == half && (sticky || kept & 1 == 1)) {
        kept += 1;
    }
    kept as f64 * pow2(top - keep + 1)
}

/// `2^k` for `k` in the `f64` range, subnormals included.
fn pow2(k: i64) -> f64 {
    if k >= -1022 {
        f64::from_bits(((k + 1023) as u64) << 52)
    } else {
        f64::from_bits(1u64 << (k + 1074))
    }
}

/// Classifies a raw symbol token into an element.
pub(crate) fn infer_scalar(
    text: &str,
    symbols: &SymbolTable,
    position: Position,
) -> ParseResult<SyntaxElement> {
    if let Some(value) = parse_int_literal(text) {
        return Ok(SyntaxElement::Int { value, position });
    }
    if let Some(value) = parse_float_literal(text) {
        return Ok(SyntaxElement::Float { value, position });
    }
    let id = symbols.get_symbol_id(text);
    if !id.is_valid() {
        let max = symbols.max_symbols();
        return Err(ParseError::new(ParseErrorKind::SymbolTableFull { max }, position));
    }
    Ok(SyntaxElement::Symbol { id, position })
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &text[prefix.len()..])
}

/// `_` must sit between digits; a base prefix counts as a digit.
fn underscores_ok(digits: &str, prefixed: bool) -> bool {
    let mut prev_digit = prefixed;
    let mut prev_underscore = false;
    for c in digits.chars() {
        if c == '_' {
            if !prev_digit {
                return false;
            }
            prev_digit = false;
            prev_underscore = true;
        } else {
            prev_digit = true;
            prev_underscore = false;
        }
    }
    !prev_underscore
}

/// Float variant of [`underscores_ok`]: `.`, exponent markers and signs end
/// a digit run. With `hex`, the stripped `0x` prefix counts as a digit.
fn float_underscores_ok(body: &str, hex: bool) -> bool {
    let mut prev_digit = hex;
    let mut prev_underscore = false;
    for c in body.chars() {
        if c.is_ascii_digit() || (hex && c.is_ascii_hexdigit()) {
            prev_digit = true;
            prev_underscore = false;
        } else if c == '_' {
            if !prev_digit {
                return false;
            }
            prev_digit = false;
            prev_underscore = true;
        } else {
            if prev_underscore {
                return false;
            }
            prev_digit = false;
        }
    }
    !prev_underscore
}
