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

//! Resource limits for parsing.

/// Default maximum list nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Configurable resource limits.
///
/// The parser keeps one stack entry per open list, so memory grows with
/// nesting depth. `max_depth` bounds that growth for untrusted input. The
/// limit applies only through `parse_with_options`; `parse` runs unlimited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum list nesting depth (default: 1000).
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions.
    pub fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }
}
