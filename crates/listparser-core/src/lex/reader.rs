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

//! Line reader for the lexer.
//!
//! Provides buffered line-by-line reading with line number tracking. Lines
//! are decoded eagerly into characters; bytes that are not valid UTF-8 do
//! not fail the read. Instead the line keeps its valid prefix and records
//! where decoding stopped, so the lexer can report the encoding error only
//! when scanning actually reaches it.

use std::io::{self, BufRead, BufReader, Read};

/// One physical line of input without its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    number: usize,
    chars: Vec<char>,
    invalid_at: Option<usize>,
}

impl Line {
    /// 1-based line number.
    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }

    /// Decoded characters of the line (the valid prefix, if the line is malformed).
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Character index at which invalid UTF-8 begins, if any.
    #[inline]
    pub fn invalid_at(&self) -> Option<usize> {
        self.invalid_at
    }
}

/// Buffered line reader with line number tracking.
///
/// Handles LF and CRLF line endings. A final line without a terminator is
/// still returned.
///
/// # Examples
///
/// ```
/// use listparser_core::lex::reader::LineReader;
/// use std::io::Cursor;
///
/// let mut reader = LineReader::new(Cursor::new("(a)\r\n(b)"));
/// let first = reader.next_line().unwrap().unwrap();
/// assert_eq!(first.number(), 1);
/// assert_eq!(first.chars(), &['(', 'a', ')']);
/// assert_eq!(reader.next_line().unwrap().unwrap().number(), 2);
/// assert!(reader.next_line().unwrap().is_none());
/// ```
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: Vec<u8>,
}

impl<R: Read> LineReader<R> {
    /// Create a new line reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: Vec::new(),
        }
    }

    /// Create with a specific buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_number: 0,
            buffer: Vec::new(),
        }
    }

    /// Number of the last line returned (0 before the first read).
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next line, or `None` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<Line>> {
        self.buffer.clear();

        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if self.buffer.ends_with(b"\n") {
            self.buffer.pop();
            if self.buffer.ends_with(b"\r") {
                self.buffer.pop();
            }
        }

        let (chars, invalid_at) = match std::str::from_utf8(&self.buffer) {
            Ok(text) => (text.chars().collect(), None),
            Err(e) => {
                let valid = std::str::from_utf8(&self.buffer[..e.valid_up_to()]).unwrap_or_default();
                let chars: Vec<char> = valid.chars().collect();
                let at = chars.len();
                (chars, Some(at))
            }
        };

        Ok(Some(Line {
            number: self.line_number,
            chars,
            invalid_at,
        }))
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = io::Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
