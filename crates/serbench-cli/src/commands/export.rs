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

//! Export command - emit report files from a merged document.

use crate::error::{CliError, Result};
use colored::Colorize;
use serbench_core::MergedBenchmarkResult;
use serbench_report::default_emitters;
use std::fs;
use std::path::Path;

/// Reads a merged result file and writes the report files into
/// `output`.
///
/// # Errors
///
/// Returns an error when the merged file cannot be read or parsed, or
/// when an emitter fails.
pub fn export(file: &Path, output: &Path) -> Result<()> {
    let merged = load_merged(file)?;

    for emitter in default_emitters() {
        let path = emitter.write_report(&merged, output)?;
        println!("{} wrote {}", "✓".green().bold(), path.display());
    }
    Ok(())
}

fn load_merged(file: &Path) -> Result<MergedBenchmarkResult> {
    let input_err = |message: String| CliError::Input {
        path: file.to_path_buf(),
        message,
    };

    let contents = fs::read_to_string(file).map_err(|e| input_err(e.to_string()))?;
    if file.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&contents).map_err(|e| input_err(e.to_string()))
    } else {
        serde_yaml::from_str(&contents).map_err(|e| input_err(e.to_string()))
    }
}
