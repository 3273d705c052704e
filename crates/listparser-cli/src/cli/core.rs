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

//! Core commands for validation, inspection and formatting.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use listparser_core::ParseOptions;

/// Core commands.
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Validate list source files
    ///
    /// Parses every file against one shared symbol table and reports each
    /// file as valid or invalid. Fails if any file fails.
    Validate {
        /// Input file paths
        #[arg(value_name = "FILE", required = true)]
        files: Vec<String>,

        /// Parse files in parallel
        #[arg(short, long)]
        parallel: bool,
    },

    /// Print the parsed structure
    ///
    /// Shows the element tree with kinds, positions and symbol names.
    Inspect {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Format a list source file to canonical form
    Format {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Check only (exit 1 if not canonical)
        #[arg(short, long)]
        check: bool,
    },
}

impl CoreCommands {
    /// Execute the core command.
    pub fn execute(self, options: &ParseOptions) -> Result<(), CliError> {
        match self {
            CoreCommands::Validate { files, parallel } => {
                commands::validate(&files, parallel, options)
            }
            CoreCommands::Inspect { file, json } => commands::inspect(&file, json, options),
            CoreCommands::Format {
                file,
                output,
                check,
            } => commands::format(&file, output.as_deref(), check, options),
        }
    }
}
