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

//! Error types for the SerBench data model.

use thiserror::Error;

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors produced while constructing or parsing model values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A platform string did not match the
    /// `{kind}-{variant}-{arch}-ruby-{version}` grammar.
    #[error("invalid platform string '{value}': {reason}")]
    InvalidPlatformString {
        /// The offending platform string.
        value: String,
        /// Why it failed to parse.
        reason: String,
    },

    /// An unrecognized platform kind token.
    #[error("unknown platform kind '{0}', expected one of: docker, local, asdf")]
    UnknownPlatformKind(String),

    /// An unrecognized serialization format token.
    #[error("unknown format '{0}', expected one of: xml, json, yaml, toml")]
    UnknownFormat(String),

    /// An unrecognized data size token.
    #[error("unknown data size '{0}', expected one of: small, medium, large")]
    UnknownDataSize(String),

    /// An unrecognized operation token.
    #[error("unknown operation '{0}', expected one of: parsing, generation, streaming, memory")]
    UnknownOperation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_context() {
        let err = CoreError::InvalidPlatformString {
            value: "docker-alpine".to_string(),
            reason: "missing 'ruby' token".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("docker-alpine"));
        assert!(msg.contains("missing 'ruby' token"));
    }

    #[test]
    fn test_unknown_kind_lists_alternatives() {
        let msg = CoreError::UnknownPlatformKind("podman".to_string()).to_string();
        assert!(msg.contains("podman"));
        assert!(msg.contains("docker"));
    }
}
