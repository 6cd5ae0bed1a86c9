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

//! Create-set command - merge persisted runs into a named run set.

use crate::error::Result;
use colored::Colorize;
use std::path::Path;

/// Creates and persists a run set over the named runs.
///
/// # Errors
///
/// Returns an error when a named run does not exist, the same run is
/// listed twice, or persisting fails.
pub fn create_set(
    name: &str,
    runs: &[String],
    tags: Vec<String>,
    store: &Path,
    schema: Option<&Path>,
) -> Result<()> {
    let store = super::open_store(store, schema)?;
    let set = store.create_run_set(name, runs, tags)?;

    println!(
        "{} created run set '{}'{}",
        "✓".green().bold(),
        set.directory_name(),
        super::tag_suffix(&set.metadata.tags)
    );
    println!("  Runs: {}", set.runs.len());
    println!("  Environments: {}", set.merged.environments.len());
    println!("  Records: {}", set.merged.combined_results.record_count());
    Ok(())
}
