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

//! Closed key enums for the nested result structure.
//!
//! Result documents nest records by operation, data size, and format.
//! These are closed, finite sets, so they are modeled as enums with
//! exhaustive matching rather than free-form strings. Serializer names
//! and environment ids remain open string keys.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Serialization format under benchmark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Xml,
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// All supported formats, in canonical order.
    pub const ALL: [Format; 4] = [Format::Xml, Format::Json, Format::Yaml, Format::Toml];

    /// Returns the lowercase token used in documents and file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Xml => "xml",
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Toml => "toml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xml" => Ok(Format::Xml),
            "json" => Ok(Format::Json),
            "yaml" => Ok(Format::Yaml),
            "toml" => Ok(Format::Toml),
            other => Err(CoreError::UnknownFormat(other.to_string())),
        }
    }
}

/// Benchmark payload size class.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DataSize {
    Small,
    Medium,
    Large,
}

impl DataSize {
    /// All size classes, smallest first.
    pub const ALL: [DataSize; 3] = [DataSize::Small, DataSize::Medium, DataSize::Large];

    /// Returns the lowercase token used in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSize::Small => "small",
            DataSize::Medium => "medium",
            DataSize::Large => "large",
        }
    }
}

impl fmt::Display for DataSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataSize {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(DataSize::Small),
            "medium" => Ok(DataSize::Medium),
            "large" => Ok(DataSize::Large),
            other => Err(CoreError::UnknownDataSize(other.to_string())),
        }
    }
}

/// Benchmarked operation.
///
/// `Memory` carries [`MemoryRecord`](crate::MemoryRecord) leaves; the
/// other three carry [`PerformanceRecord`](crate::PerformanceRecord)
/// leaves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Parsing,
    Generation,
    Streaming,
    Memory,
}

impl Operation {
    /// The three timing-based operations, in document order.
    pub const TIMED: [Operation; 3] =
        [Operation::Parsing, Operation::Generation, Operation::Streaming];

    /// Returns the lowercase token used in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Parsing => "parsing",
            Operation::Generation => "generation",
            Operation::Streaming => "streaming",
            Operation::Memory => "memory",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parsing" => Ok(Operation::Parsing),
            "generation" => Ok(Operation::Generation),
            "streaming" => Ok(Operation::Streaming),
            "memory" => Ok(Operation::Memory),
            other => Err(CoreError::UnknownOperation(other.to_string())),
        }
    }
}
