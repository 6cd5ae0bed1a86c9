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

//! Error types for the result store.

use serbench_merge::MergeError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors produced by the run and run-set repository.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Adding a run to a run set would duplicate an existing entry.
    /// A duplicate is the identical
    /// (platform string, created_at, benchmark_name) triple.
    #[error(
        "duplicate result: run '{platform_string}' created at '{created_at}' for benchmark '{benchmark_name}' already present in run set"
    )]
    DuplicateResult {
        /// Platform string of the duplicate run.
        platform_string: String,
        /// Creation timestamp of the duplicate run.
        created_at: String,
        /// Benchmark name of the duplicate run.
        benchmark_name: String,
    },

    /// No persisted run exists under the given platform string.
    #[error("run not found: '{platform_string}'")]
    RunNotFound {
        /// The missing run's platform string.
        platform_string: String,
    },

    /// A platform string failed to parse.
    #[error(transparent)]
    Platform(#[from] serbench_core::CoreError),

    /// An I/O failure against the store's directory tree.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path involved.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },

    /// A persisted file could not be parsed.
    #[error("cannot parse '{path}': {message}")]
    Parse {
        /// The offending file.
        path: PathBuf,
        /// Parser error message.
        message: String,
    },

    /// A file could not be serialized for writing.
    #[error("cannot serialize '{path}': {message}")]
    Serialize {
        /// The destination file.
        path: PathBuf,
        /// Serializer error message.
        message: String,
    },

    /// The merge engine failed while building a run set.
    #[error(transparent)]
    Merge(#[from] MergeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_result_names_triple() {
        let err = StoreError::DuplicateResult {
            platform_string: "docker-alpine-arm64-ruby-3.3".to_string(),
            created_at: "2025-06-01T12:00:00+00:00".to_string(),
            benchmark_name: "serialization".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("docker-alpine-arm64-ruby-3.3"));
        assert!(msg.contains("2025-06-01T12:00:00+00:00"));
        assert!(msg.contains("serialization"));
    }
}
