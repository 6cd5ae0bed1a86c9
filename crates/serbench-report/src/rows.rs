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

//! Tabular flattening of merged results.
//!
//! One [`ReportRow`] per operation/size/format/serializer/environment
//! leaf. Timed leaves fill the timing columns and leave the memory
//! columns empty; memory leaves do the opposite. Rows come out in the
//! deterministic order of the underlying maps.

use serbench_core::{CombinedSection, MemoryRecord, MergedBenchmarkResult};
use serde::Serialize;

/// One flattened measurement, the unit of CSV output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// Operation name: parsing, generation, streaming, or memory.
    pub operation: String,
    /// Data size bucket.
    pub data_size: String,
    /// Serialization format.
    pub format: String,
    /// Serializer (adapter) name.
    pub serializer: String,
    /// Environment id of the contributing run.
    pub environment_id: String,
    /// Ruby version from the environment registry, empty when the id
    /// has no registry entry.
    pub ruby_version: String,
    /// Ruby platform from the environment registry, empty when the id
    /// has no registry entry.
    pub ruby_platform: String,
    /// Seconds per iteration, timed operations only.
    pub time_per_iteration: Option<f64>,
    /// Iterations per second, timed operations only.
    pub iterations_per_second: Option<f64>,
    /// Measured iteration count, timed operations only.
    pub iterations_count: Option<u64>,
    /// Total allocated objects, memory operation only.
    pub total_allocated: Option<u64>,
    /// Objects retained after the run, memory operation only.
    pub total_retained: Option<u64>,
    /// Allocated bytes, memory operation only.
    pub allocated_memory: Option<u64>,
    /// Retained bytes, memory operation only.
    pub retained_memory: Option<u64>,
}

impl ReportRow {
    /// Column names, in field order. Kept in sync with the struct so
    /// the CSV header can be written even when there are no rows.
    pub const COLUMNS: [&'static str; 14] = [
        "operation",
        "data_size",
        "format",
        "serializer",
        "environment_id",
        "ruby_version",
        "ruby_platform",
        "time_per_iteration",
        "iterations_per_second",
        "iterations_count",
        "total_allocated",
        "total_retained",
        "allocated_memory",
        "retained_memory",
    ];
}

/// Flattens a merged document into rows, one per leaf record.
pub fn flatten(merged: &MergedBenchmarkResult) -> Vec<ReportRow> {
    let mut rows = Vec::with_capacity(merged.combined_results.record_count());

    let timed = [
        ("parsing", &merged.combined_results.parsing),
        ("generation", &merged.combined_results.generation),
        ("streaming", &merged.combined_results.streaming),
    ];
    for (operation, section) in timed {
        walk(section, |size, format, serializer, env_id, record| {
            rows.push(ReportRow {
                time_per_iteration: Some(record.time_per_iteration),
                iterations_per_second: Some(record.iterations_per_second),
                iterations_count: Some(record.iterations_count),
                total_allocated: None,
                total_retained: None,
                allocated_memory: None,
                retained_memory: None,
                ..base_row(merged, operation, size, format, serializer, env_id)
            });
        });
    }

    walk(
        &merged.combined_results.memory,
        |size, format, serializer, env_id, record: &MemoryRecord| {
            rows.push(ReportRow {
                time_per_iteration: None,
                iterations_per_second: None,
                iterations_count: None,
                total_allocated: Some(record.total_allocated),
                total_retained: Some(record.total_retained),
                allocated_memory: Some(record.allocated_memory),
                retained_memory: Some(record.retained_memory),
                ..base_row(merged, "memory", size, format, serializer, env_id)
            });
        },
    );

    rows
}

fn base_row(
    merged: &MergedBenchmarkResult,
    operation: &str,
    data_size: &str,
    format: &str,
    serializer: &str,
    environment_id: &str,
) -> ReportRow {
    let registry = merged.environments.get(environment_id);
    ReportRow {
        operation: operation.to_string(),
        data_size: data_size.to_string(),
        format: format.to_string(),
        serializer: serializer.to_string(),
        environment_id: environment_id.to_string(),
        ruby_version: registry.map(|e| e.ruby_version.clone()).unwrap_or_default(),
        ruby_platform: registry
            .map(|e| e.ruby_platform.clone())
            .unwrap_or_default(),
        time_per_iteration: None,
        iterations_per_second: None,
        iterations_count: None,
        total_allocated: None,
        total_retained: None,
        allocated_memory: None,
        retained_memory: None,
    }
}

fn walk<R>(section: &CombinedSection<R>, mut visit: impl FnMut(&str, &str, &str, &str, &R)) {
    for (size, formats) in section {
        for (format, serializers) in formats {
            for (serializer, environments) in serializers {
                for (env_id, record) in environments {
                    visit(size.as_str(), format.as_str(), serializer, env_id, record);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serbench_core::{DataSize, Format, Operation, PerformanceRecord};

    fn merged() -> MergedBenchmarkResult {
        let mut merged = MergedBenchmarkResult::new();
        merged.combined_results.insert_timed(
            Operation::Parsing,
            DataSize::Small,
            Format::Json,
            "oj",
            "3_2_4_aarch64_linux",
            PerformanceRecord::from_batch(0.02, 20),
        );
        merged.combined_results.insert_memory(
            DataSize::Large,
            Format::Yaml,
            "psych",
            "3_2_4_aarch64_linux",
            MemoryRecord {
                total_allocated: 100,
                total_retained: 5,
                allocated_memory: 8192,
                retained_memory: 1024,
            },
        );
        merged
    }

    #[test]
    fn test_flatten_emits_one_row_per_leaf() {
        let rows = flatten(&merged());
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_timed_row_leaves_memory_columns_empty() {
        let rows = flatten(&merged());
        let timed = rows.iter().find(|r| r.operation == "parsing").unwrap();
        assert_eq!(timed.format, "json");
        assert_eq!(timed.data_size, "small");
        assert_eq!(timed.serializer, "oj");
        assert_eq!(timed.iterations_count, Some(20));
        assert!(timed.total_allocated.is_none());
    }

    #[test]
    fn test_memory_row_leaves_timing_columns_empty() {
        let rows = flatten(&merged());
        let memory = rows.iter().find(|r| r.operation == "memory").unwrap();
        assert_eq!(memory.allocated_memory, Some(8192));
        assert!(memory.time_per_iteration.is_none());
    }

    #[test]
    fn test_unregistered_environment_gets_empty_provenance() {
        let rows = flatten(&merged());
        // No registry entry was inserted for the environment id.
        assert!(rows.iter().all(|r| r.ruby_version.is_empty()));
    }
}
