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

//! Commands that look across files.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use listparser_core::ParseOptions;

/// Analysis commands.
#[derive(Subcommand)]
pub enum AnalysisCommands {
    /// List interned symbols
    ///
    /// Parses the files in order against one symbol table and prints every
    /// symbol with its id.
    Symbols {
        /// Input file paths
        #[arg(value_name = "FILE", required = true)]
        files: Vec<String>,
    },
}

impl AnalysisCommands {
    /// Execute the analysis command.
    pub fn execute(self, options: &ParseOptions) -> Result<(), CliError> {
        match self {
            AnalysisCommands::Symbols { files } => commands::symbols(&files, options),
        }
    }
}
