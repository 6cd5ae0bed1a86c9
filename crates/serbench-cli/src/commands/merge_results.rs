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

//! Merge-results command - fold per-run result files into one document.

use crate::error::Result;
use colored::Colorize;
use serbench_merge::{MERGED_JSON, MERGED_YAML};
use std::path::{Path, PathBuf};

/// Discovers, validates, and merges result files from `input_dirs`,
/// writing the merged document into `output`.
///
/// # Errors
///
/// Returns an error when no result files are found, every discovered
/// file fails to merge, or the output cannot be written.
pub fn merge_results(input_dirs: &[PathBuf], output: &Path, schema: Option<&Path>) -> Result<()> {
    let merger = super::merger(schema)?;
    let merged = merger.merge_directories(input_dirs, output)?;

    println!(
        "{} merged {} environment(s), {} record(s)",
        "✓".green().bold(),
        merged.environments.len(),
        merged.combined_results.record_count()
    );
    println!("  Ruby versions: {}", join(&merged.metadata.ruby_versions));
    println!("  Platforms: {}", join(&merged.metadata.platforms));
    println!("  Output: {}", output.join(MERGED_YAML).display());
    println!("          {}", output.join(MERGED_JSON).display());
    Ok(())
}

fn join(set: &std::collections::BTreeSet<String>) -> String {
    set.iter().cloned().collect::<Vec<_>>().join(", ")
}
