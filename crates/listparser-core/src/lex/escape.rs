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

//! String literal escape decoding.
//!
//! [`StringDecoder`] is fed the characters following an opening `"` one at a
//! time and reports when the closing `"` has been seen. Supported escapes:
//!
//! | Escape          | Meaning                                   |
//! |-----------------|-------------------------------------------|
//! | `\a \b \f \n \r \t \v` | C control characters               |
//! | `\\ \' \" \?`   | the character itself                      |
//! | `\ooo`          | exactly three octal digits                |
//! | `\xhh`          | exactly two hex digits, any case          |
//!
//! The decoder knows nothing about lines or positions; the lexer decides
//! what running out of input means.

/// Single-character escapes and the character each one produces.
const SIMPLE_ESCAPES: [(char, char); 11] = [
    ('a', '\x07'),
    ('b', '\x08'),
    ('f', '\x0c'),
    ('n', '\n'),
    ('r', '\r'),
    ('t', '\t'),
    ('v', '\x0b'),
    ('\\', '\\'),
    ('\'', '\''),
    ('"', '"'),
    ('?', '?'),
];

/// Decoder state. `Octal1` means one octal digit has been read, `Hex1`
/// means `\x` has been read and `Hex2` one hex digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeState {
    Normal,
    Escape,
    Octal1,
    Octal2,
    Hex1,
    Hex2,
}

impl EscapeState {
    /// Digit radix accepted in this state, for the numeric escape states.
    const fn radix(self) -> Option<u32> {
        match self {
            EscapeState::Octal1 | EscapeState::Octal2 => Some(8),
            EscapeState::Hex1 | EscapeState::Hex2 => Some(16),
            EscapeState::Normal | EscapeState::Escape => None,
        }
    }
}

/// Outcome of feeding one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The literal is still open.
    Continue,
    /// The closing quote was consumed.
    Finished,
}

/// Why decoding failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeFault {
    /// The character cannot appear at this point of an escape sequence.
    IllegalEscape(char),
    /// A numeric escape produced a value that is not a Unicode scalar value.
    InvalidCodePoint(u32),
}

/// Incremental decoder for the body of a string literal.
///
/// # Examples
///
/// ```
/// use listparser_core::lex::escape::{StringDecoder, Step};
///
/// let mut decoder = StringDecoder::new();
/// for ch in r#"a\x41\101""#.chars() {
///     if decoder.feed(ch).unwrap() == Step::Finished {
///         break;
///     }
/// }
/// assert_eq!(decoder.into_text(), "aAA");
/// ```
#[derive(Debug, Clone)]
pub struct StringDecoder {
    state: EscapeState,
    value: u32,
    text: String,
}

impl Default for StringDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl StringDecoder {
    /// Creates a decoder positioned just after an opening quote.
    pub fn new() -> Self {
        Self {
            state: EscapeState::Normal,
            value: 0,
            text: String::new(),
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> EscapeState {
        self.state
    }

    /// Feeds one character and advances the state machine.
    pub fn feed(&mut self, ch: char) -> Result<Step, DecodeFault> {
        match self.state {
            EscapeState::Normal => match ch {
                '"' => return Ok(Step::Finished),
                '\\' => self.state = EscapeState::Escape,
                c => self.text.push(c),
            },
            EscapeState::Escape => {
                if let Some(&(_, decoded)) = SIMPLE_ESCAPES.iter().find(|(e, _)| *e == ch) {
                    self.text.push(decoded);
                    self.state = EscapeState::Normal;
                } else if let Some(digit) = ch.to_digit(8) {
                    self.value = digit;
                    self.state = EscapeState::Octal1;
                } else if ch == 'x' {
                    self.value = 0;
                    self.state = EscapeState::Hex1;
                } else {
                    return Err(DecodeFault::IllegalEscape(ch));
                }
            }
            state => {
                let radix = state.radix().ok_or(DecodeFault::IllegalEscape(ch))?;
                let digit = ch.to_digit(radix).ok_or(DecodeFault::IllegalEscape(ch))?;
                self.value = self.value * radix + digit;
                self.state = match state {
                    EscapeState::Octal1 => EscapeState::Octal2,
                    EscapeState::Hex1 => EscapeState::Hex2,
                    _ => {
                        let decoded = char::from_u32(self.value)
                            .ok_or(DecodeFault::InvalidCodePoint(self.value))?;
                        self.text.push(decoded);
                        EscapeState::Normal
                    }
                };
            }
        }
        Ok(Step::Continue)
    }

    /// Returns the decoded text accumulated so far.
    pub fn into_text(self) -> String {
        self.text
    }
}
