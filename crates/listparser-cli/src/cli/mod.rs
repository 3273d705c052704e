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

//! CLI command definitions and argument parsing.
//!
//! - [`core`]: per-file commands (validate, inspect, format)
//! - [`analysis`]: commands over the shared symbol table (symbols)

mod analysis;
mod core;

use crate::error::CliError;
use clap::Subcommand;
use listparser_core::ParseOptions;

pub use self::analysis::AnalysisCommands;
pub use self::core::CoreCommands;

/// Top-level CLI commands.
///
/// ```text
/// Commands
/// ├── Core (validate, inspect, format)
/// └── Analysis (symbols)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Core commands - flattened to appear at top level
    #[command(flatten)]
    Core(CoreCommands),

    // Analysis commands - flattened to appear at top level
    #[command(flatten)]
    Analysis(AnalysisCommands),
}

impl Commands {
    /// Execute the command with the given parse options.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a file cannot be read, does not parse, or output
    /// cannot be written.
    pub fn execute(self, options: &ParseOptions) -> Result<(), CliError> {
        match self {
            Commands::Core(cmd) => cmd.execute(options),
            Commands::Analysis(cmd) => cmd.execute(options),
        }
    }
}
