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

//! Single-run benchmark result documents.
//!
//! A [`BenchmarkResultDocument`] is the canonical on-disk form of one
//! execution run (`results.yaml` / `results.json`): every record the run
//! produced, organized by operation, size, format, and serializer, plus
//! the provenance metadata identifying the environment that produced it.
//! Documents are immutable once written; only the merge engine and report
//! emitters consume them.

use crate::keys::{DataSize, Format, Operation};
use crate::record::{MemoryRecord, PerformanceRecord, SerializerInfo};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One operation's records, nested size -> format -> serializer name.
///
/// `BTreeMap` keeps serialized output deterministic so re-saving an
/// unchanged document is byte-stable.
pub type SectionResults<R> = BTreeMap<DataSize, BTreeMap<Format, BTreeMap<String, R>>>;

/// Provenance of one run: the interpreter and library versions that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EnvironmentInfo {
    /// Ruby interpreter version, e.g. `3.3.8`.
    #[serde(default)]
    pub ruby_version: String,
    /// Ruby platform tag, e.g. `aarch64-linux`.
    #[serde(default)]
    pub ruby_platform: String,
    /// Serializer library versions present during the run.
    #[serde(default)]
    pub serializer_versions: BTreeMap<String, String>,
    /// When the run completed, ISO-8601.
    #[serde(default)]
    pub timestamp: String,
}

/// Full result document for one benchmark run.
///
/// Sections are `Option` so that a branch absent from the source file is
/// distinguishable from a present-but-empty one: the merge engine skips
/// absent branches rather than zero-filling them, and the validator
/// reports a missing `parsing` section as a defect. Fields that the
/// schema requires are plain defaults here; presence is a validation
/// concern, not a parse-time one, so a defective document can still be
/// loaded and fully diagnosed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BenchmarkResultDocument {
    /// Serializer libraries exercised by this run.
    #[serde(default)]
    pub serializers: Vec<SerializerInfo>,
    /// Parse benchmarks. Required by the schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsing: Option<SectionResults<PerformanceRecord>>,
    /// Generation benchmarks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<SectionResults<PerformanceRecord>>,
    /// Streaming benchmarks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streaming: Option<SectionResults<PerformanceRecord>>,
    /// Memory benchmarks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<SectionResults<MemoryRecord>>,
    /// Ruby interpreter version, duplicated from `environment` for
    /// top-level grepping. Must match `environment.ruby_version`.
    #[serde(default)]
    pub ruby_version: String,
    /// Ruby platform tag. Must match `environment.ruby_platform`.
    #[serde(default)]
    pub ruby_platform: String,
    /// When the run completed, ISO-8601.
    #[serde(default)]
    pub timestamp: String,
    /// Full provenance record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentInfo>,
}

impl BenchmarkResultDocument {
    /// Returns the section for a timed operation, if present in the
    /// document.
    ///
    /// `Operation::Memory` has a different leaf type; use
    /// [`BenchmarkResultDocument::memory`] directly for it.
    pub fn timed_section(&self, op: Operation) -> Option<&SectionResults<PerformanceRecord>> {
        match op {
            Operation::Parsing => self.parsing.as_ref(),
            Operation::Generation => self.generation.as_ref(),
            Operation::Streaming => self.streaming.as_ref(),
            Operation::Memory => None,
        }
    }

    /// Derives the environment id for this document.
    pub fn environment_id(&self) -> String {
        environment_id(&self.ruby_version, &self.ruby_platform)
    }

    /// Counts the leaf records across all sections.
    pub fn record_count(&self) -> usize {
        let timed: usize = Operation::TIMED
            .iter()
            .filter_map(|&op| self.timed_section(op))
            .map(section_len)
            .sum();
        timed + self.memory.as_ref().map(section_len).unwrap_or(0)
    }
}

fn section_len<R>(section: &SectionResults<R>) -> usize {
    section
        .values()
        .flat_map(|formats| formats.values())
        .map(|serializers| serializers.len())
        .sum()
}

/// Derives the deterministic environment id for a (version, platform)
/// pair.
///
/// The id is `ruby_version + "_" + ruby_platform` with every
/// non-alphanumeric character replaced by `_`, so it is stable across
/// merges and safe as a directory or map key. Two documents sharing a
/// (version, platform) pair always collapse to the same id.
///
/// # Example
///
/// ```
/// use serbench_core::environment_id;
///
/// assert_eq!(environment_id("3.2.4", "aarch64-linux"), "3_2_4_aarch64_linux");
/// ```
pub fn environment_id(ruby_version: &str, ruby_platform: &str) -> String {
    sanitize(&format!("{}_{}", ruby_version, ruby_platform))
}

fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> PerformanceRecord {
        PerformanceRecord::from_batch(0.02, 20)
    }

    fn sample_document() -> BenchmarkResultDocument {
        let mut parsing: SectionResults<PerformanceRecord> = BTreeMap::new();
        parsing
            .entry(DataSize::Small)
            .or_default()
            .entry(Format::Json)
            .or_default()
            .insert("oj".to_string(), sample_record());

        BenchmarkResultDocument {
            serializers: vec![SerializerInfo {
                format: Format::Json,
                name: "oj".to_string(),
                version: "3.16.1".to_string(),
            }],
            parsing: Some(parsing),
            ruby_version: "3.2.4".to_string(),
            ruby_platform: "aarch64-linux".to_string(),
            timestamp: "2025-06-01T12:00:00+00:00".to_string(),
            environment: Some(EnvironmentInfo {
                ruby_version: "3.2.4".to_string(),
                ruby_platform: "aarch64-linux".to_string(),
                serializer_versions: BTreeMap::from([(
                    "oj".to_string(),
                    "3.16.1".to_string(),
                )]),
                timestamp: "2025-06-01T12:00:00+00:00".to_string(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_environment_id_sanitizes_non_alphanumerics() {
        assert_eq!(
            environment_id("3.2.4", "aarch64-linux"),
            "3_2_4_aarch64_linux"
        );
        assert_eq!(environment_id("3.3", "arm64-darwin23"), "3_3_arm64_darwin23");
    }

    #[test]
    fn test_environment_id_stable_for_same_pair() {
        let a = environment_id("3.3.8", "x86_64-linux");
        let b = environment_id("3.3.8", "x86_64-linux");
        assert_eq!(a, b);
    }

    #[test]
    fn test_record_count() {
        let doc = sample_document();
        assert_eq!(doc.record_count(), 1);
        assert_eq!(BenchmarkResultDocument::default().record_count(), 0);
    }

    #[test]
    fn test_absent_sections_stay_absent_through_serde() {
        let doc = sample_document();
        let yaml = serde_yaml::to_string(&doc).unwrap();
        assert!(!yaml.contains("streaming"));

        let back: BenchmarkResultDocument = serde_yaml::from_str(&yaml).unwrap();
        assert!(back.streaming.is_none());
        assert_eq!(back, doc);
    }

    #[test]
    fn test_document_yaml_json_roundtrip() {
        let doc = sample_document();

        let yaml = serde_yaml::to_string(&doc).unwrap();
        let from_yaml: BenchmarkResultDocument = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(from_yaml, doc);

        let json = serde_json::to_string_pretty(&doc).unwrap();
        let from_json: BenchmarkResultDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(from_json, doc);
    }

    #[test]
    fn test_timed_section_dispatch() {
        let doc = sample_document();
        assert!(doc.timed_section(Operation::Parsing).is_some());
        assert!(doc.timed_section(Operation::Generation).is_none());
        assert!(doc.timed_section(Operation::Memory).is_none());
    }
}
