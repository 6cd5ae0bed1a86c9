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

//! End-to-end tests for report emission into a directory.

use serbench_core::{DataSize, Format, MergedBenchmarkResult, Operation, PerformanceRecord};
use serbench_report::{default_emitters, CsvEmitter, JsonEmitter, ReportEmitter, YamlEmitter};
use std::fs;

fn merged() -> MergedBenchmarkResult {
    let mut merged = MergedBenchmarkResult::new();
    merged.combined_results.insert_timed(
        Operation::Generation,
        DataSize::Medium,
        Format::Yaml,
        "psych",
        "3_3_8_arm64_darwin",
        PerformanceRecord::from_batch(0.5, 10),
    );
    merged
}

#[test]
fn emitters_write_their_named_files() {
    let dir = tempfile::tempdir().unwrap();
    let merged = merged();

    for emitter in default_emitters() {
        let path = emitter.write_report(&merged, dir.path()).unwrap();
        assert_eq!(path, dir.path().join(emitter.file_name()));
        assert!(path.is_file());
    }

    assert!(dir.path().join("report.yaml").is_file());
    assert!(dir.path().join("report.json").is_file());
    assert!(dir.path().join("report.csv").is_file());
}

#[test]
fn yaml_and_json_reports_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let merged = merged();

    YamlEmitter.write_report(&merged, dir.path()).unwrap();
    JsonEmitter.write_report(&merged, dir.path()).unwrap();

    let yaml = fs::read_to_string(dir.path().join("report.yaml")).unwrap();
    let from_yaml: MergedBenchmarkResult = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(from_yaml, merged);

    let json = fs::read_to_string(dir.path().join("report.json")).unwrap();
    let from_json: MergedBenchmarkResult = serde_json::from_str(&json).unwrap();
    assert_eq!(from_json, merged);
}

#[test]
fn csv_report_flattens_the_leaf() {
    let dir = tempfile::tempdir().unwrap();
    CsvEmitter.write_report(&merged(), dir.path()).unwrap();

    let csv = fs::read_to_string(dir.path().join("report.csv")).unwrap();
    let data_line = csv.lines().nth(1).unwrap();
    assert!(data_line.starts_with("generation,medium,yaml,psych,3_3_8_arm64_darwin"));
}
