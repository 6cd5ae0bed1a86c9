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

//! Error types for merge operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for merge operations.
pub type Result<T> = std::result::Result<T, MergeError>;

/// Errors produced by the merge engine.
///
/// Per-file load failures inside a multi-file merge are soft: they are
/// logged and skipped, and only surface as [`MergeError::NoSuccessfulMerges`]
/// when every input fails.
#[derive(Debug, Error)]
pub enum MergeError {
    /// No result file was located under any of the searched directories.
    #[error("no result files found under: {}", format_paths(.searched))]
    NoResultsFound {
        /// Directories that were searched.
        searched: Vec<PathBuf>,
    },

    /// Result files were located but every one failed to load or
    /// validate.
    #[error("no successful merges: all {attempted} discovered result file(s) failed to load")]
    NoSuccessfulMerges {
        /// How many files were attempted.
        attempted: usize,
    },

    /// An I/O failure reading an input or writing the merged output.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path involved.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },

    /// A result file could not be parsed as YAML or JSON.
    #[error("cannot parse result file '{path}': {message}")]
    Parse {
        /// The offending file.
        path: PathBuf,
        /// Parser error message.
        message: String,
    },

    /// A result file parsed but failed schema validation.
    #[error("invalid result file '{path}': {message}")]
    Invalid {
        /// The offending file.
        path: PathBuf,
        /// The full violation list.
        message: String,
    },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_results_found_names_directories() {
        let err = MergeError::NoResultsFound {
            searched: vec![PathBuf::from("runs/a"), PathBuf::from("runs/b")],
        };
        let msg = err.to_string();
        assert!(msg.contains("runs/a"));
        assert!(msg.contains("runs/b"));
    }
}
