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

//! Merged, cross-environment result documents.
//!
//! A [`MergedBenchmarkResult`] is the output of merging N single-run
//! documents: the same operation/size/format/serializer nesting, with one
//! extra environment-id layer at the leaves, plus an environment registry
//! and merge metadata. The structure grows monotonically during a merge
//! session; nothing here removes entries.

use crate::document::EnvironmentInfo;
use crate::keys::{DataSize, Format, Operation};
use crate::record::{MemoryRecord, PerformanceRecord};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One operation's merged records, nested
/// size -> format -> serializer -> environment id.
pub type CombinedSection<R> =
    BTreeMap<DataSize, BTreeMap<Format, BTreeMap<String, BTreeMap<String, R>>>>;

/// Registry entry recording which run produced an environment's numbers.
///
/// Metadata here is last-write-wins: re-merging the same logical
/// environment overwrites the record while its measurement leaves stay
/// keyed under the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentRecord {
    /// Ruby interpreter version.
    pub ruby_version: String,
    /// Ruby platform tag.
    pub ruby_platform: String,
    /// Label of the source document, usually its file path.
    pub source_file: String,
    /// Timestamp of the source run, ISO-8601.
    pub timestamp: String,
    /// Full provenance carried over from the source document.
    pub environment: EnvironmentInfo,
}

/// Summary metadata for a merged document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MergeMetadata {
    /// When the merge ran, ISO-8601.
    pub merged_at: String,
    /// Union of interpreter versions across merged runs.
    pub ruby_versions: BTreeSet<String>,
    /// Union of platform tags across merged runs.
    pub platforms: BTreeSet<String>,
}

/// The merged measurement body, keyed by environment id at the leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CombinedResults {
    /// Parse benchmarks across environments.
    #[serde(default)]
    pub parsing: CombinedSection<PerformanceRecord>,
    /// Generation benchmarks across environments.
    #[serde(default)]
    pub generation: CombinedSection<PerformanceRecord>,
    /// Streaming benchmarks across environments.
    #[serde(default)]
    pub streaming: CombinedSection<PerformanceRecord>,
    /// Memory benchmarks across environments.
    #[serde(default)]
    pub memory: CombinedSection<MemoryRecord>,
}

impl CombinedResults {
    /// Inserts a timed record at its full key path, returning the value
    /// it displaced if the cell was already populated.
    ///
    /// Keyed insert (not append) is what makes re-merging the same
    /// document idempotent.
    ///
    /// # Panics
    ///
    /// Panics if `op` is `Operation::Memory`; memory leaves go through
    /// [`CombinedResults::insert_memory`].
    pub fn insert_timed(
        &mut self,
        op: Operation,
        size: DataSize,
        format: Format,
        serializer: &str,
        environment_id: &str,
        record: PerformanceRecord,
    ) -> Option<PerformanceRecord> {
        let section = match op {
            Operation::Parsing => &mut self.parsing,
            Operation::Generation => &mut self.generation,
            Operation::Streaming => &mut self.streaming,
            Operation::Memory => unreachable!("memory records use insert_memory"),
        };
        section
            .entry(size)
            .or_default()
            .entry(format)
            .or_default()
            .entry(serializer.to_string())
            .or_default()
            .insert(environment_id.to_string(), record)
    }

    /// Inserts a memory record at its full key path, returning any
    /// displaced value.
    pub fn insert_memory(
        &mut self,
        size: DataSize,
        format: Format,
        serializer: &str,
        environment_id: &str,
        record: MemoryRecord,
    ) -> Option<MemoryRecord> {
        self.memory
            .entry(size)
            .or_default()
            .entry(format)
            .or_default()
            .entry(serializer.to_string())
            .or_default()
            .insert(environment_id.to_string(), record)
    }

    /// Collects every environment id referenced by any leaf.
    ///
    /// Used for referential-integrity validation against the environment
    /// registry.
    pub fn environment_ids(&self) -> BTreeSet<String> {
        let mut ids = BTreeSet::new();
        for section in [&self.parsing, &self.generation, &self.streaming] {
            collect_ids(section, &mut ids);
        }
        collect_ids(&self.memory, &mut ids);
        ids
    }

    /// Counts the leaf records across all sections.
    pub fn record_count(&self) -> usize {
        section_len(&self.parsing)
            + section_len(&self.generation)
            + section_len(&self.streaming)
            + section_len(&self.memory)
    }

    /// True when no section holds any record.
    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}

fn collect_ids<R>(section: &CombinedSection<R>, ids: &mut BTreeSet<String>) {
    for formats in section.values() {
        for serializers in formats.values() {
            for environments in serializers.values() {
                ids.extend(environments.keys().cloned());
            }
        }
    }
}

fn section_len<R>(section: &CombinedSection<R>) -> usize {
    section
        .values()
        .flat_map(|formats| formats.values())
        .flat_map(|serializers| serializers.values())
        .map(|environments| environments.len())
        .sum()
}

/// The merged comparison document, canonical on-disk form
/// `merged_results.yaml` / `merged_results.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MergedBenchmarkResult {
    /// Environment registry, keyed by environment id.
    pub environments: BTreeMap<String, EnvironmentRecord>,
    /// Merged measurement body.
    pub combined_results: CombinedResults,
    /// Merge metadata.
    pub metadata: MergeMetadata,
}

impl MergedBenchmarkResult {
    /// Creates an empty merged document stamped with the current time.
    pub fn new() -> Self {
        Self {
            environments: BTreeMap::new(),
            combined_results: CombinedResults::default(),
            metadata: MergeMetadata {
                merged_at: Utc::now().to_rfc3339(),
                ruby_versions: BTreeSet::new(),
                platforms: BTreeSet::new(),
            },
        }
    }

    /// Upserts an environment registry entry and unions its version and
    /// platform into the metadata sets.
    pub fn upsert_environment(&mut self, environment_id: String, record: EnvironmentRecord) {
        self.metadata
            .ruby_versions
            .insert(record.ruby_version.clone());
        self.metadata.platforms.insert(record.ruby_platform.clone());
        self.environments.insert(environment_id, record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(secs: f64) -> PerformanceRecord {
        PerformanceRecord::from_batch(secs, 10)
    }

    #[test]
    fn test_insert_timed_overwrites_same_key() {
        let mut combined = CombinedResults::default();
        let displaced = combined.insert_timed(
            Operation::Parsing,
            DataSize::Small,
            Format::Json,
            "oj",
            "env_a",
            record(0.1),
        );
        assert!(displaced.is_none());

        let displaced = combined.insert_timed(
            Operation::Parsing,
            DataSize::Small,
            Format::Json,
            "oj",
            "env_a",
            record(0.2),
        );
        assert!(displaced.is_some());
        assert_eq!(combined.record_count(), 1);
    }

    #[test]
    fn test_environment_ids_cover_all_sections() {
        let mut combined = CombinedResults::default();
        combined.insert_timed(
            Operation::Generation,
            DataSize::Large,
            Format::Yaml,
            "psych",
            "env_a",
            record(0.1),
        );
        combined.insert_memory(
            DataSize::Small,
            Format::Xml,
            "ox",
            "env_b",
            MemoryRecord {
                total_allocated: 10,
                total_retained: 1,
                allocated_memory: 4096,
                retained_memory: 512,
            },
        );

        let ids = combined.environment_ids();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("env_a"));
        assert!(ids.contains("env_b"));
    }

    #[test]
    fn test_upsert_environment_unions_metadata() {
        let mut merged = MergedBenchmarkResult::new();
        for (version, platform) in [("3.2.4", "aarch64-linux"), ("3.3.8", "aarch64-linux")] {
            let id = crate::environment_id(version, platform);
            merged.upsert_environment(
                id,
                EnvironmentRecord {
                    ruby_version: version.to_string(),
                    ruby_platform: platform.to_string(),
                    source_file: "results.yaml".to_string(),
                    timestamp: "2025-06-01T12:00:00+00:00".to_string(),
                    environment: EnvironmentInfo::default(),
                },
            );
        }

        assert_eq!(merged.environments.len(), 2);
        assert_eq!(merged.metadata.ruby_versions.len(), 2);
        assert_eq!(merged.metadata.platforms.len(), 1);
    }

    #[test]
    fn test_merged_roundtrip() {
        let mut merged = MergedBenchmarkResult::new();
        merged.combined_results.insert_timed(
            Operation::Parsing,
            DataSize::Small,
            Format::Json,
            "oj",
            "3_2_4_aarch64_linux",
            record(0.02),
        );

        let yaml = serde_yaml::to_string(&merged).unwrap();
        let from_yaml: MergedBenchmarkResult = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(from_yaml, merged);

        let json = serde_json::to_string(&merged).unwrap();
        let from_json: MergedBenchmarkResult = serde_json::from_str(&json).unwrap();
        assert_eq!(from_json, merged);
    }
}
