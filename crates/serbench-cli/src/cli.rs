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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::Result;
use clap::Subcommand;
use std::path::PathBuf;

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Merge per-run result files into a cross-environment document
    ///
    /// Recursively searches each input directory for result files
    /// (results.yaml, results.yml, results.json), validates them, and
    /// merges the valid ones. Exits non-zero when no result files are
    /// found or every file fails to merge.
    MergeResults {
        /// Directories to search for result files
        #[arg(value_name = "INPUT_DIR", required = true)]
        input_dirs: Vec<PathBuf>,

        /// Directory receiving merged_results.yaml and merged_results.json
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// Schema rules file (defaults to the bundled rules)
        #[arg(long, value_name = "FILE")]
        schema: Option<PathBuf>,
    },

    /// Validate a single result file against the schema rules
    Validate {
        /// Result file (YAML or JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Schema rules file (defaults to the bundled rules)
        #[arg(long, value_name = "FILE")]
        schema: Option<PathBuf>,
    },

    /// Validate and persist a result file as a run in the store
    SaveRun {
        /// Result file (YAML or JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Platform string of the run, e.g. docker-alpine-arm64-ruby-3.3.8
        #[arg(short, long, value_name = "PLATFORM")]
        platform: String,

        /// Benchmark suite name recorded in the run metadata
        #[arg(long, default_value = "serialization")]
        benchmark: String,

        /// Tag to attach (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Store base directory
        #[arg(long, default_value = "results", value_name = "DIR")]
        store: PathBuf,

        /// Schema rules file (defaults to the bundled rules)
        #[arg(long, value_name = "FILE")]
        schema: Option<PathBuf>,
    },

    /// List persisted runs
    ListRuns {
        /// Only runs carrying all of these tags (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Show at most this many runs
        #[arg(long, value_name = "N")]
        limit: Option<usize>,

        /// Store base directory
        #[arg(long, default_value = "results", value_name = "DIR")]
        store: PathBuf,
    },

    /// List persisted run sets
    ListSets {
        /// Only sets carrying all of these tags (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Show at most this many sets
        #[arg(long, value_name = "N")]
        limit: Option<usize>,

        /// Store base directory
        #[arg(long, default_value = "results", value_name = "DIR")]
        store: PathBuf,
    },

    /// Create a run set by merging persisted runs
    CreateSet {
        /// Name of the run set
        #[arg(value_name = "NAME")]
        name: String,

        /// Platform string of a member run (repeatable)
        #[arg(long = "run", value_name = "PLATFORM", required = true)]
        runs: Vec<String>,

        /// Tag to attach (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Store base directory
        #[arg(long, default_value = "results", value_name = "DIR")]
        store: PathBuf,

        /// Schema rules file (defaults to the bundled rules)
        #[arg(long, value_name = "FILE")]
        schema: Option<PathBuf>,
    },

    /// Export a merged document as report.yaml, report.json, report.csv
    Export {
        /// Merged result file (merged_results.yaml or .json)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Directory receiving the report files
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,
    },
}

impl Commands {
    /// Executes the command.
    ///
    /// # Errors
    ///
    /// Returns the underlying crate error when the operation fails;
    /// `main` renders it and exits non-zero.
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::MergeResults {
                input_dirs,
                output,
                schema,
            } => commands::merge_results::merge_results(&input_dirs, &output, schema.as_deref()),
            Commands::Validate { file, schema } => {
                commands::validate::validate(&file, schema.as_deref())
            }
            Commands::SaveRun {
                file,
                platform,
                benchmark,
                tags,
                store,
                schema,
            } => commands::save_run::save_run(
                &file,
                &platform,
                &benchmark,
                tags,
                &store,
                schema.as_deref(),
            ),
            Commands::ListRuns { tags, limit, store } => {
                commands::list_runs::list_runs(&tags, limit, &store)
            }
            Commands::ListSets { tags, limit, store } => {
                commands::list_sets::list_sets(&tags, limit, &store)
            }
            Commands::CreateSet {
                name,
                runs,
                tags,
                store,
                schema,
            } => commands::create_set::create_set(&name, &runs, tags, &store, schema.as_deref()),
            Commands::Export { file, output } => commands::export::export(&file, &output),
        }
    }
}
