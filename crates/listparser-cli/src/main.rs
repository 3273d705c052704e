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

//! Listparser Command Line Interface

use clap::Parser;
use listparser_cli::cli::Commands;
use listparser_core::{ParseOptions, DEFAULT_MAX_DEPTH};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Log directives used when `RUST_LOG` is not set.
const DEFAULT_LOG_DIRECTIVES: &str = "listparser_core=warn,listparser_cli=warn";

/// Listparser - Bracketed list notation toolkit
///
/// Validates, inspects and formats files written in bracketed list notation.
///
/// # Examples
///
/// ```bash
/// # Validate several files against one symbol table
/// listparser validate machine.lst events.lst --parallel
///
/// # Show the parsed tree as JSON
/// listparser inspect machine.lst --json
///
/// # Rewrite a file in canonical form
/// listparser format machine.lst --output machine.canonical.lst
///
/// # Trace the parser
/// RUST_LOG=listparser_core=trace listparser validate machine.lst
/// ```
#[derive(Parser)]
#[command(name = "listparser")]
#[command(author, version, about = "Listparser - Bracketed list notation toolkit", long_about = None)]
struct Cli {
    /// Maximum list nesting depth
    #[arg(long, global = true, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let options = ParseOptions::builder().max_depth(cli.max_depth).build();

    match cli.command.execute(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
