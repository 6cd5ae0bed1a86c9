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

//! Command implementations, one module per subcommand.

pub mod create_set;
pub mod export;
pub mod list_runs;
pub mod list_sets;
pub mod merge_results;
pub mod save_run;
pub mod validate;

use crate::error::Result;
use serbench_merge::ResultMerger;
use serbench_schema::SchemaValidator;
use serbench_store::ResultStore;
use std::path::Path;

/// Builds a merge engine with the given schema rules, or the bundled
/// default rules when none is given.
pub(crate) fn merger(schema: Option<&Path>) -> Result<ResultMerger> {
    let validator = match schema {
        Some(path) => SchemaValidator::from_file(path)?,
        None => SchemaValidator::from_default_path()?,
    };
    Ok(ResultMerger::new(validator))
}

/// Opens the result store at `base`.
pub(crate) fn open_store(base: &Path, schema: Option<&Path>) -> Result<ResultStore> {
    Ok(ResultStore::new(base, merger(schema)?))
}

/// Formats a tag list for display, empty when there are no tags.
pub(crate) fn tag_suffix(tags: &[String]) -> String {
    if tags.is_empty() {
        String::new()
    } else {
        format!("  [{}]", tags.join(", "))
    }
}
