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

//! Behavioral tests for the `serbench` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serbench_core::{
    BenchmarkResultDocument, DataSize, EnvironmentInfo, Format, PerformanceRecord, SectionResults,
    SerializerInfo,
};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

fn serbench() -> Command {
    Command::cargo_bin("serbench").unwrap()
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

fn write_result(dir: &Path, doc: &BenchmarkResultDocument) {
    fs::create_dir_all(dir).unwrap();
    fs::write(
        dir.join("results.yaml"),
        serde_yaml::to_string(doc).unwrap(),
    )
    .unwrap();
}

#[test]
fn merge_results_merges_and_reports() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_result(&input.path().join("run-a"), &document("3.2.4", "aarch64-linux"));
    write_result(&input.path().join("run-b"), &document("3.3.8", "arm64-darwin"));

    serbench()
        .arg("merge-results")
        .arg(input.path())
        .arg("--output")
        .arg(output.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("merged 2 environment(s)"));

    assert!(output.path().join("merged_results.yaml").is_file());
    assert!(output.path().join("merged_results.json").is_file());
}

#[test]
fn merge_results_fails_when_nothing_found() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    serbench()
        .arg("merge-results")
        .arg(input.path())
        .arg("--output")
        .arg(output.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no result files found"));
}

#[test]
fn validate_accepts_a_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    write_result(dir.path(), &document("3.2.4", "aarch64-linux"));

    serbench()
        .arg("validate")
        .arg(dir.path().join("results.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Ruby: 3.2.4"));
}

#[test]
fn validate_lists_violations_and_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = document("3.2.4", "aarch64-linux");
    doc.timestamp = String::new();
    write_result(dir.path(), &doc);

    serbench()
        .arg("validate")
        .arg(dir.path().join("results.yaml"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("timestamp"))
        .stderr(predicate::str::contains("validation failed"));
}

#[test]
fn save_list_and_set_lifecycle() {
    let work = tempfile::tempdir().unwrap();
    let store = work.path().join("store");
    write_result(work.path(), &document("3.3.8", "aarch64-linux"));

    serbench()
        .arg("save-run")
        .arg(work.path().join("results.yaml"))
        .args(["--platform", "docker-alpine-arm64-ruby-3.3.8"])
        .args(["--tag", "nightly"])
        .arg("--store")
        .arg(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("docker-alpine-arm64-ruby-3.3.8"));

    serbench()
        .arg("list-runs")
        .arg("--store")
        .arg(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 run(s)"));

    serbench()
        .arg("list-runs")
        .args(["--tag", "release"])
        .arg("--store")
        .arg(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("No runs found."));

    serbench()
        .arg("create-set")
        .arg("weekly")
        .args(["--run", "docker-alpine-arm64-ruby-3.3.8"])
        .arg("--store")
        .arg(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("created run set 'weekly-"));

    serbench()
        .arg("list-sets")
        .arg("--store")
        .arg(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 run set(s)"));
}

#[test]
fn save_run_rejects_bad_platform_string() {
    let work = tempfile::tempdir().unwrap();
    write_result(work.path(), &document("3.3.8", "aarch64-linux"));

    serbench()
        .arg("save-run")
        .arg(work.path().join("results.yaml"))
        .args(["--platform", "docker-alpine-arm64"])
        .arg("--store")
        .arg(work.path().join("store"))
        .assert()
        .failure();
}

#[test]
fn save_run_rejects_invalid_document() {
    let work = tempfile::tempdir().unwrap();
    let mut doc = document("3.3.8", "aarch64-linux");
    doc.timestamp = String::new();
    write_result(work.path(), &doc);

    serbench()
        .arg("save-run")
        .arg(work.path().join("results.yaml"))
        .args(["--platform", "docker-alpine-arm64-ruby-3.3.8"])
        .arg("--store")
        .arg(work.path().join("store"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid result file"));
}

#[test]
fn export_writes_report_files() {
    let input = tempfile::tempdir().unwrap();
    let merged_dir = tempfile::tempdir().unwrap();
    let report_dir = tempfile::tempdir().unwrap();
    write_result(&input.path().join("run-a"), &document("3.2.4", "aarch64-linux"));

    serbench()
        .arg("merge-results")
        .arg(input.path())
        .arg("--output")
        .arg(merged_dir.path())
        .assert()
        .success();

    serbench()
        .arg("export")
        .arg(merged_dir.path().join("merged_results.yaml"))
        .arg("--output")
        .arg(report_dir.path())
        .assert()
        .success();

    assert!(report_dir.path().join("report.yaml").is_file());
    assert!(report_dir.path().join("report.json").is_file());
    assert!(report_dir.path().join("report.csv").is_file());
}
