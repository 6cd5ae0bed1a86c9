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

//! List-runs command - show persisted runs.

use crate::error::Result;
use colored::Colorize;
use std::path::Path;

/// Lists persisted runs, optionally filtered by tags and limited.
pub fn list_runs(tags: &[String], limit: Option<usize>, store: &Path) -> Result<()> {
    let store = super::open_store(store, None)?;
    let filter = (!tags.is_empty()).then_some(tags);
    let runs = store.find_runs(filter, limit)?;

    if runs.is_empty() {
        println!("No runs found.");
        return Ok(());
    }

    for run in &runs {
        println!(
            "{}  ruby {} ({})  {} record(s){}",
            run.platform_string().bold(),
            run.document.ruby_version,
            run.document.ruby_platform,
            run.document.record_count(),
            super::tag_suffix(&run.metadata.tags)
        );
    }
    println!("{} run(s)", runs.len());
    Ok(())
}
