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

//! SerBench data model.
//!
//! Canonical types for serialization-benchmark results: the atomic
//! [`PerformanceRecord`]/[`MemoryRecord`] measurements, the per-run
//! [`BenchmarkResultDocument`], the cross-environment
//! [`MergedBenchmarkResult`], and the [`Platform`] descriptor with its
//! directory-naming string codec.
//!
//! Everything here is a plain serde value type. Validation lives in
//! `serbench-schema`, merging in `serbench-merge`, persistence in
//! `serbench-store`.

pub mod document;
pub mod error;
pub mod keys;
pub mod merged;
pub mod platform;
pub mod record;

pub use document::{environment_id, BenchmarkResultDocument, EnvironmentInfo, SectionResults};
pub use error::{CoreError, Result};
pub use keys::{DataSize, Format, Operation};
pub use merged::{
    CombinedResults, CombinedSection, EnvironmentRecord, MergeMetadata, MergedBenchmarkResult,
};
pub use platform::{Platform, PlatformKind};
pub use record::{MemoryRecord, PerformanceRecord, SerializerInfo};
