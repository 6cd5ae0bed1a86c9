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

//! Atomic measurement records.
//!
//! A [`PerformanceRecord`] holds the timing figures for one
//! serializer x format x size x operation cell; a [`MemoryRecord`] holds
//! the allocation figures for the memory operation. Both are pure value
//! types: they are produced by execution drivers and verified, never
//! recomputed, by the merge pipeline.

use crate::keys::Format;
use serde::{Deserialize, Serialize};

/// Timing figures for a single benchmark cell.
///
/// Invariants (verified by the schema validator, not enforced here):
/// `iterations_per_second ~= 1 / time_per_iteration` within 0.01 and
/// `time_per_iteration ~= time_per_iterations / iterations_count` within
/// 1e-6. All figures are non-negative and `iterations_count >= 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    /// Wall-clock seconds for the whole iteration batch.
    pub time_per_iterations: f64,
    /// Wall-clock seconds for one iteration.
    pub time_per_iteration: f64,
    /// Derived throughput, iterations per second.
    pub iterations_per_second: f64,
    /// Number of iterations in the batch.
    pub iterations_count: u64,
}

impl PerformanceRecord {
    /// Creates a record, deriving the throughput fields from the batch
    /// time and iteration count.
    ///
    /// Execution drivers normally produce records directly; this
    /// constructor exists for fixtures and tests.
    pub fn from_batch(time_per_iterations: f64, iterations_count: u64) -> Self {
        let time_per_iteration = if iterations_count > 0 {
            time_per_iterations / iterations_count as f64
        } else {
            0.0
        };
        let iterations_per_second = if time_per_iteration > 0.0 {
            1.0 / time_per_iteration
        } else {
            0.0
        };
        Self {
            time_per_iterations,
            time_per_iteration,
            iterations_per_second,
            iterations_count,
        }
    }
}

/// Allocation figures for a single memory-benchmark cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRecord {
    /// Total objects allocated during the run.
    pub total_allocated: u64,
    /// Objects still retained after the run.
    pub total_retained: u64,
    /// Bytes allocated during the run.
    pub allocated_memory: u64,
    /// Bytes retained after the run.
    pub retained_memory: u64,
}

/// Identity of one serializer library as reported by a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializerInfo {
    /// Format the library serves.
    pub format: Format,
    /// Library name, e.g. `oj` or `nokogiri`.
    pub name: String,
    /// Library version string.
    pub version: String,
}
