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

//! List-sets command - show persisted run sets.

use crate::error::Result;
use colored::Colorize;
use std::path::Path;

/// Lists persisted run sets, optionally filtered by tags and limited.
pub fn list_sets(tags: &[String], limit: Option<usize>, store: &Path) -> Result<()> {
    let store = super::open_store(store, None)?;
    let filter = (!tags.is_empty()).then_some(tags);
    let sets = store.find_run_sets(filter, limit)?;

    if sets.is_empty() {
        println!("No run sets found.");
        return Ok(());
    }

    for set in &sets {
        println!(
            "{}  {} run(s), {} environment(s){}",
            set.directory_name().bold(),
            set.runs.len(),
            set.merged.environments.len(),
            super::tag_suffix(&set.metadata.tags)
        );
    }
    println!("{} run set(s)", sets.len());
    Ok(())
}
