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

//! Error types for report emission.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors produced while emitting reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing the report file failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path involved.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },

    /// The merged document could not be serialized.
    #[error("serialization failed: {message}")]
    Serialize {
        /// Serializer error message.
        message: String,
    },

    /// Writing to the output stream failed.
    #[error("write failed: {message}")]
    Write {
        /// Underlying error message.
        message: String,
    },

    /// The CSV writer failed.
    #[error("CSV emission failed: {message}")]
    Csv {
        /// Writer error message.
        message: String,
    },
}
