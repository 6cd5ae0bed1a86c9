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

//! Error types for schema validation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors produced while loading rules or validating documents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The rules file was missing, unreadable, or malformed. Fatal at
    /// validator construction; validation itself never raises this.
    #[error("configuration error loading schema rules from '{path}': {message}")]
    Configuration {
        /// Path to the rules file.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },

    /// One or more schema or invariant violations. Always carries the
    /// complete list, never just the first.
    #[error("validation failed with {} violation(s):\n  - {}", .violations.len(), .violations.join("\n  - "))]
    Validation {
        /// Every violation found, in document order.
        violations: Vec<String>,
    },
}

impl SchemaError {
    /// Returns the violation list, empty for configuration errors.
    pub fn violations(&self) -> &[String] {
        match self {
            SchemaError::Validation { violations } => violations,
            SchemaError::Configuration { .. } => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_lists_every_violation() {
        let err = SchemaError::Validation {
            violations: vec![
                "missing required field: timestamp".to_string(),
                "ruby_version '3.x' does not match version pattern".to_string(),
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("2 violation(s)"));
        assert!(msg.contains("timestamp"));
        assert!(msg.contains("3.x"));
        assert_eq!(err.violations().len(), 2);
    }
}
