// Dweve SerBench - Serialization Benchmark Suite
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

//! SerBench Command Line Interface

use clap::Parser;
use serbench_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// SerBench - serialization benchmark result toolkit
///
/// Merges per-run benchmark result files into cross-environment
/// comparison documents, validates them against the schema rules, and
/// manages a store of persisted runs and run sets.
///
/// # Examples
///
/// ```bash
/// # Merge every result file found under two directories
/// serbench merge-results ci-artifacts/ local-runs/ --output merged/
///
/// # Validate a single result file
/// serbench validate results.yaml
///
/// # Persist a run, then build a comparison set
/// serbench save-run results.yaml --platform docker-alpine-arm64-ruby-3.3.8
/// serbench create-set weekly --run docker-alpine-arm64-ruby-3.3.8
/// ```
#[derive(Parser)]
#[command(name = "serbench")]
#[command(author, version, about = "SerBench - serialization benchmark result toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
