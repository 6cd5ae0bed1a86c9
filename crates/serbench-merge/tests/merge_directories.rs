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

//! End-to-end tests for directory merging.

use serbench_core::{
    BenchmarkResultDocument, DataSize, EnvironmentInfo, Format, MergedBenchmarkResult,
    PerformanceRecord, SectionResults, SerializerInfo,
};
use serbench_merge::{MergeError, ResultMerger, MERGED_JSON, MERGED_YAML};
use serbench_schema::SchemaValidator;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

fn merger() -> ResultMerger {
    ResultMerger::new(SchemaValidator::from_default_path().unwrap())
}

fn document(version: &str, platform: &str) -> BenchmarkResultDocument {
    let mut parsing: SectionResults<PerformanceRecord> = BTreeMap::new();
    parsing
        .entry(DataSize::Small)
        .or_default()
        .entry(Format::Json)
        .or_default()
        .insert("oj".to_string(), PerformanceRecord::from_batch(0.02, 20));

    BenchmarkResultDocument {
        serializers: vec![SerializerInfo {
            format: Format::Json,
            name: "oj".to_string(),
            version: "3.16.1".to_string(),
        }],
        parsing: Some(parsing),
        ruby_version: version.to_string(),
        ruby_platform: platform.to_string(),
        timestamp: "2025-06-01T12:00:00+00:00".to_string(),
        environment: Some(EnvironmentInfo {
            ruby_version: version.to_string(),
            ruby_platform: platform.to_string(),
            serializer_versions: BTreeMap::new(),
            timestamp: "2025-06-01T12:00:00+00:00".to_string(),
        }),
        ..Default::default()
    }
}

fn write_run(dir: &Path, doc: &BenchmarkResultDocument) {
    fs::create_dir_all(dir).unwrap();
    fs::write(
        dir.join("results.yaml"),
        serde_yaml::to_string(doc).unwrap(),
    )
    .unwrap();
}

#[test]
fn merges_runs_from_multiple_directories() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_run(&input.path().join("run-a"), &document("3.2.4", "aarch64-linux"));
    write_run(&input.path().join("run-b"), &document("3.3.8", "aarch64-linux"));

    let merged = merger()
        .merge_directories(&[input.path().to_path_buf()], output.path())
        .unwrap();

    assert_eq!(merged.environments.len(), 2);
    assert_eq!(merged.combined_results.record_count(), 2);
    assert_eq!(merged.metadata.ruby_versions.len(), 2);
}

#[test]
fn writes_both_yaml_and_json_outputs() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_run(&input.path().join("run-a"), &document("3.2.4", "aarch64-linux"));

    let merged = merger()
        .merge_directories(&[input.path().to_path_buf()], output.path())
        .unwrap();

    let yaml = fs::read_to_string(output.path().join(MERGED_YAML)).unwrap();
    let from_yaml: MergedBenchmarkResult = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(from_yaml, merged);

    let json = fs::read_to_string(output.path().join(MERGED_JSON)).unwrap();
    let from_json: MergedBenchmarkResult = serde_json::from_str(&json).unwrap();
    assert_eq!(from_json, merged);
}

#[test]
fn corrupt_file_is_skipped_with_survivors_merged() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_run(&input.path().join("good"), &document("3.2.4", "aarch64-linux"));
    fs::create_dir_all(input.path().join("bad")).unwrap();
    fs::write(input.path().join("bad/results.yaml"), "{{{ not yaml").unwrap();

    let merged = merger()
        .merge_directories(&[input.path().to_path_buf()], output.path())
        .unwrap();

    assert_eq!(merged.environments.len(), 1);
}

#[test]
fn invalid_document_is_skipped() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_run(&input.path().join("good"), &document("3.2.4", "aarch64-linux"));

    // Parses fine but fails validation: no timestamp, no environment.
    let mut invalid = document("3.3.8", "aarch64-linux");
    invalid.timestamp = String::new();
    invalid.environment = None;
    write_run(&input.path().join("invalid"), &invalid);

    let merged = merger()
        .merge_directories(&[input.path().to_path_buf()], output.path())
        .unwrap();

    assert_eq!(merged.environments.len(), 1);
    assert!(merged.environments.contains_key("3_2_4_aarch64_linux"));
}

#[test]
fn zero_files_is_no_results_found() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let err = merger()
        .merge_directories(&[input.path().to_path_buf()], output.path())
        .unwrap_err();
    assert!(matches!(err, MergeError::NoResultsFound { .. }));
}

#[test]
fn all_files_failing_is_no_successful_merges() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("results.yaml"), ": not: valid: yaml: [").unwrap();

    let err = merger()
        .merge_directories(&[input.path().to_path_buf()], output.path())
        .unwrap_err();
    assert!(matches!(err, MergeError::NoSuccessfulMerges { attempted: 1 }));
}

#[test]
fn merged_output_validates_and_roundtrips() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_run(&input.path().join("a"), &document("3.2.4", "aarch64-linux"));
    write_run(&input.path().join("b"), &document("3.3.8", "arm64-darwin"));

    let merged = merger()
        .merge_directories(&[input.path().to_path_buf()], output.path())
        .unwrap();

    SchemaValidator::from_default_path()
        .unwrap()
        .validate_merged(&merged)
        .unwrap();
}
