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

//! Structured error types for the SerBench CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI command execution.
pub type Result<T> = std::result::Result<T, CliError>;

/// All error conditions a CLI command can surface.
#[derive(Debug, Error)]
pub enum CliError {
    /// Schema rules failed to load or a document failed validation.
    #[error(transparent)]
    Schema(#[from] serbench_schema::SchemaError),

    /// The merge engine failed.
    #[error(transparent)]
    Merge(#[from] serbench_merge::MergeError),

    /// The result store failed.
    #[error(transparent)]
    Store(#[from] serbench_store::StoreError),

    /// Report emission failed.
    #[error(transparent)]
    Report(#[from] serbench_report::ReportError),

    /// A platform string or result key failed to parse.
    #[error(transparent)]
    Core(#[from] serbench_core::CoreError),

    /// A file handed to a command failed validation; the violations
    /// were already printed.
    #[error("validation failed with {count} violation(s)")]
    ValidationFailed {
        /// Number of violations reported.
        count: usize,
    },

    /// A file could not be read or parsed.
    #[error("cannot read '{path}': {message}")]
    Input {
        /// The offending file.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },
}
