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

//! The result merge engine.
//!
//! Folds N single-run documents into one [`MergedBenchmarkResult`]:
//! environments are upserted into a registry under a deterministic id,
//! metadata version/platform sets grow by union, and each record lands
//! at `combined_results.<op>.<size>.<format>.<serializer>.<env_id>` by
//! keyed insert. Re-merging the same document overwrites rather than
//! duplicates, so a merge may be safely re-run. When two distinct
//! source documents collide on the same cell the later one wins and a
//! warning is logged; no statistical combination is attempted.

use crate::discovery::discover_result_files;
use crate::error::{MergeError, Result};
use serbench_core::{
    BenchmarkResultDocument, EnvironmentRecord, MergedBenchmarkResult, Operation,
};
use serbench_schema::SchemaValidator;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File name of the canonical merged output.
pub const MERGED_YAML: &str = "merged_results.yaml";
/// File name of the secondary merged output.
pub const MERGED_JSON: &str = "merged_results.json";

/// Merges benchmark result documents across environments.
pub struct ResultMerger {
    validator: SchemaValidator,
}

impl ResultMerger {
    /// Creates a merger that validates inputs with the given validator.
    pub fn new(validator: SchemaValidator) -> Self {
        Self { validator }
    }

    /// Returns the validator this merger checks inputs with.
    pub fn validator(&self) -> &SchemaValidator {
        &self.validator
    }

    /// Merges documents, in the order supplied, into a fresh merged
    /// document.
    ///
    /// This is a pure in-memory fold; inputs are assumed validated.
    /// Each pair carries a source label (usually the file path) recorded
    /// in the environment registry.
    pub fn merge(&self, documents: &[(BenchmarkResultDocument, String)]) -> MergedBenchmarkResult {
        let mut merged = MergedBenchmarkResult::new();
        for (document, source_label) in documents {
            self.merge_into(&mut merged, document, source_label);
        }
        merged
    }

    /// Folds one document into an existing merged result.
    pub fn merge_into(
        &self,
        merged: &mut MergedBenchmarkResult,
        document: &BenchmarkResultDocument,
        source_label: &str,
    ) {
        let env_id = document.environment_id();

        merged.upsert_environment(
            env_id.clone(),
            EnvironmentRecord {
                ruby_version: document.ruby_version.clone(),
                ruby_platform: document.ruby_platform.clone(),
                source_file: source_label.to_string(),
                timestamp: document.timestamp.clone(),
                environment: document.environment.clone().unwrap_or_default(),
            },
        );

        for op in Operation::TIMED {
            let Some(section) = document.timed_section(op) else {
                continue;
            };
            for (&size, formats) in section {
                for (&format, serializers) in formats {
                    for (name, record) in serializers {
                        let displaced = merged.combined_results.insert_timed(
                            op,
                            size,
                            format,
                            name,
                            &env_id,
                            record.clone(),
                        );
                        if displaced.is_some_and(|prev| prev != *record) {
                            warn!(
                                cell = %format_args!("{}.{}.{}.{}", op, size, format, name),
                                environment = %env_id,
                                source = source_label,
                                "overwriting earlier measurement for this environment"
                            );
                        }
                    }
                }
            }
        }

        if let Some(memory) = &document.memory {
            for (&size, formats) in memory {
                for (&format, serializers) in formats {
                    for (name, record) in serializers {
                        let displaced = merged.combined_results.insert_memory(
                            size,
                            format,
                            name,
                            &env_id,
                            record.clone(),
                        );
                        if displaced.is_some_and(|prev| prev != *record) {
                            warn!(
                                cell = %format_args!("memory.{}.{}.{}", size, format, name),
                                environment = %env_id,
                                source = source_label,
                                "overwriting earlier measurement for this environment"
                            );
                        }
                    }
                }
            }
        }
    }

    /// Discovers, loads, validates, and merges every result file under
    /// the input directories, then writes `merged_results.yaml` and
    /// `merged_results.json` to the output directory.
    ///
    /// Files that fail to load or validate are skipped with a warning;
    /// the merge proceeds with the remainder.
    ///
    /// # Errors
    ///
    /// - [`MergeError::NoResultsFound`] when zero files are discovered.
    /// - [`MergeError::NoSuccessfulMerges`] when every discovered file
    ///   fails to load.
    /// - [`MergeError::Io`] when the merged output cannot be written.
    pub fn merge_directories(
        &self,
        input_dirs: &[PathBuf],
        output_dir: &Path,
    ) -> Result<MergedBenchmarkResult> {
        let files = discover_result_files(input_dirs);
        if files.is_empty() {
            return Err(MergeError::NoResultsFound {
                searched: input_dirs.to_vec(),
            });
        }

        let mut documents = Vec::new();
        for file in &files {
            match self.load_document(file) {
                Ok(document) => documents.push((document, file.display().to_string())),
                Err(reason) => {
                    warn!(file = %file.display(), %reason, "skipping result file");
                }
            }
        }
        if documents.is_empty() {
            return Err(MergeError::NoSuccessfulMerges {
                attempted: files.len(),
            });
        }

        let merged = self.merge(&documents);
        info!(
            documents = documents.len(),
            environments = merged.environments.len(),
            records = merged.combined_results.record_count(),
            "merged result documents"
        );

        write_merged(&merged, output_dir)?;
        Ok(merged)
    }

    /// Loads and validates a single result file.
    pub fn load_document(&self, path: &Path) -> Result<BenchmarkResultDocument> {
        let document = self.parse_document(path)?;

        self.validator
            .validate_single(&document)
            .map_err(|e| MergeError::Invalid {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(document)
    }

    /// Parses a single result file without validating it.
    ///
    /// Callers that want to report the full violation list themselves
    /// (rather than receive a [`MergeError::Invalid`]) parse here and
    /// run the validator on the result.
    pub fn parse_document(&self, path: &Path) -> Result<BenchmarkResultDocument> {
        let contents = fs::read_to_string(path).map_err(|e| MergeError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let is_json = path.extension().is_some_and(|ext| ext == "json");
        if is_json {
            serde_json::from_str(&contents).map_err(|e| MergeError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        } else {
            serde_yaml::from_str(&contents).map_err(|e| MergeError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
    }
}

/// Writes both serializations of a merged document. YAML is canonical;
/// JSON is produced for consumers without a YAML parser.
pub fn write_merged(merged: &MergedBenchmarkResult, output_dir: &Path) -> Result<()> {
    let io_err = |path: &Path, e: String| MergeError::Io {
        path: path.to_path_buf(),
        message: e,
    };

    fs::create_dir_all(output_dir).map_err(|e| io_err(output_dir, e.to_string()))?;

    let yaml_path = output_dir.join(MERGED_YAML);
    let yaml = serde_yaml::to_string(merged).map_err(|e| io_err(&yaml_path, e.to_string()))?;
    fs::write(&yaml_path, yaml).map_err(|e| io_err(&yaml_path, e.to_string()))?;

    let json_path = output_dir.join(MERGED_JSON);
    let json =
        serde_json::to_string_pretty(merged).map_err(|e| io_err(&json_path, e.to_string()))?;
    fs::write(&json_path, json).map_err(|e| io_err(&json_path, e.to_string()))?;

    Ok(())
}
