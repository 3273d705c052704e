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

//! Listparser CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **validate**: Parse one or more files against a shared symbol table
//! - **inspect**: Show the parsed tree, or its JSON serialization
//! - **format**: Rewrite a file in canonical form, or check that it is
//! - **symbols**: List the symbols interned while parsing a set of files
//!
//! # Examples
//!
//! ```no_run
//! use listparser_cli::commands::validate;
//! use listparser_core::ParseOptions;
//!
//! # fn main() -> Result<(), listparser_cli::error::CliError> {
//! let files = vec!["machine.lst".to_string()];
//! validate(&files, false, &ParseOptions::default())?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
