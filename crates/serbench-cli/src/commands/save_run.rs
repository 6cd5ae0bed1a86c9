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

//! Save-run command - validate and persist a result file as a run.

use crate::error::Result;
use colored::Colorize;
use serbench_core::Platform;
use serbench_store::{ResultStore, Run};
use std::path::Path;

/// Validates `file` and persists it in the store as a run for
/// `platform`.
///
/// # Errors
///
/// Returns an error when the file cannot be read, fails validation,
/// the platform string does not parse, or persisting fails.
pub fn save_run(
    file: &Path,
    platform: &str,
    benchmark: &str,
    tags: Vec<String>,
    store: &Path,
    schema: Option<&Path>,
) -> Result<()> {
    let merger = super::merger(schema)?;
    let document = merger.load_document(file)?;
    let platform = Platform::parse(platform)?;

    let mut run = Run::new(platform, document, benchmark);
    run.metadata.tags = tags;

    let store = ResultStore::new(store, merger);
    let saved = store.save_run(&run)?;

    println!(
        "{} saved run '{}'{}",
        "✓".green().bold(),
        saved.platform_string(),
        super::tag_suffix(&saved.metadata.tags)
    );
    println!("  Records: {}", saved.document.record_count());
    Ok(())
}
