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

//! Validate command - check a result file against the schema rules.

use crate::error::{CliError, Result};
use colored::Colorize;
use std::path::Path;

/// Validates a single result file, printing every violation found.
///
/// # Errors
///
/// Returns [`CliError::ValidationFailed`] when the document violates
/// the schema; parse and I/O failures surface as merge errors.
pub fn validate(file: &Path, schema: Option<&Path>) -> Result<()> {
    let merger = super::merger(schema)?;
    // Parse without validating so an invalid document reaches the
    // violation report below instead of erroring out on load.
    let document = merger.parse_document(file)?;

    match merger.validator().validate_single(&document) {
        Ok(()) => {
            println!("{} {}", "✓".green().bold(), file.display());
            println!("  Ruby: {} ({})", document.ruby_version, document.ruby_platform);
            println!("  Records: {}", document.record_count());
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file.display());
            for violation in e.violations() {
                println!("  - {}", violation);
            }
            Err(CliError::ValidationFailed {
                count: e.violations().len(),
            })
        }
    }
}
