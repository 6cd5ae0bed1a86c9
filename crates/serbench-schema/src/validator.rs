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

//! Document validation.
//!
//! The validator is read-only: it never mutates or repairs a document,
//! and it always collects the complete violation list before failing so
//! a caller sees every defect at once. Required numeric fields are
//! enforced structurally by the typed model at parse time; everything
//! else (presence, patterns, ranges, cross-field consistency,
//! referential integrity) is checked here.

use crate::error::{Result, SchemaError};
use crate::rules::{default_rules_path, SchemaRules, Tolerances};
use chrono::DateTime;
use serbench_core::{
    BenchmarkResultDocument, CombinedSection, MergedBenchmarkResult, Operation,
    PerformanceRecord,
};
use std::path::Path;

/// Validates result documents against the loaded schema rules.
pub struct SchemaValidator {
    rules: SchemaRules,
}

impl SchemaValidator {
    /// Loads rules from the given file and builds a validator.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Configuration`] if the rules file cannot
    /// be loaded. This is the only fatal, non-validation failure mode.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self {
            rules: SchemaRules::load(path)?,
        })
    }

    /// Builds a validator from the default rules path (the
    /// `SERBENCH_SCHEMA` environment variable, or the shipped file).
    pub fn from_default_path() -> Result<Self> {
        Self::from_file(&default_rules_path())
    }

    /// Returns the loaded rules.
    pub fn rules(&self) -> &SchemaRules {
        &self.rules
    }

    /// Validates a single-run document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Validation`] carrying every violation
    /// found: missing required fields, pattern mismatches, an
    /// unparseable timestamp, top-level/environment inconsistency, and
    /// numeric or derived-value defects in any record.
    pub fn validate_single(&self, doc: &BenchmarkResultDocument) -> Result<()> {
        let mut violations = Vec::new();

        for field in &self.rules.single.required {
            let present = match field.as_str() {
                "environment" => doc.environment.is_some(),
                "parsing" => doc.parsing.is_some(),
                "generation" => doc.generation.is_some(),
                "streaming" => doc.streaming.is_some(),
                "memory" => doc.memory.is_some(),
                "serializers" => !doc.serializers.is_empty(),
                "ruby_version" => !doc.ruby_version.is_empty(),
                "ruby_platform" => !doc.ruby_platform.is_empty(),
                "timestamp" => !doc.timestamp.is_empty(),
                other => {
                    violations.push(format!(
                        "schema rules reference unknown single-document field '{}'",
                        other
                    ));
                    continue;
                }
            };
            if !present {
                violations.push(format!("missing required field: {}", field));
            }
        }

        if !doc.ruby_version.is_empty() && !self.rules.ruby_version.is_match(&doc.ruby_version) {
            violations.push(format!(
                "ruby_version '{}' does not match pattern '{}'",
                doc.ruby_version,
                self.rules.ruby_version.as_str()
            ));
        }
        if !doc.ruby_platform.is_empty() && !self.rules.platform_tags.contains(&doc.ruby_platform)
        {
            violations.push(format!(
                "ruby_platform '{}' is not a recognized platform tag",
                doc.ruby_platform
            ));
        }
        if !doc.timestamp.is_empty() {
            check_timestamp("timestamp", &doc.timestamp, &mut violations);
        }

        if let Some(env) = &doc.environment {
            if !doc.ruby_version.is_empty() && doc.ruby_version != env.ruby_version {
                violations.push(format!(
                    "ruby_version '{}' does not match environment.ruby_version '{}'",
                    doc.ruby_version, env.ruby_version
                ));
            }
            if !doc.ruby_platform.is_empty() && doc.ruby_platform != env.ruby_platform {
                violations.push(format!(
                    "ruby_platform '{}' does not match environment.ruby_platform '{}'",
                    doc.ruby_platform, env.ruby_platform
                ));
            }
        }

        for op in Operation::TIMED {
            if let Some(section) = doc.timed_section(op) {
                for (size, formats) in section {
                    for (format, serializers) in formats {
                        for (name, record) in serializers {
                            let path = format!("{}.{}.{}.{}", op, size, format, name);
                            check_performance_record(
                                &path,
                                record,
                                self.rules.tolerances,
                                &mut violations,
                            );
                        }
                    }
                }
            }
        }

        finish(violations)
    }

    /// Validates a merged document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Validation`] carrying every violation:
    /// missing required sections, malformed environment ids, dangling
    /// environment references inside `combined_results`, defective
    /// registry entries, and numeric defects in any leaf record.
    pub fn validate_merged(&self, merged: &MergedBenchmarkResult) -> Result<()> {
        let mut violations = Vec::new();

        for field in &self.rules.merged.required {
            let present = match field.as_str() {
                "combined_results" => !merged.combined_results.is_empty(),
                "environments" => !merged.environments.is_empty(),
                "metadata" => !merged.metadata.merged_at.is_empty(),
                other => {
                    violations.push(format!(
                        "schema rules reference unknown merged-document field '{}'",
                        other
                    ));
                    continue;
                }
            };
            if !present {
                violations.push(format!("missing required field: {}", field));
            }
        }

        if !merged.metadata.merged_at.is_empty() {
            check_timestamp("metadata.merged_at", &merged.metadata.merged_at, &mut violations);
        }

        for (id, record) in &merged.environments {
            if !self.rules.environment_id.is_match(id) {
                violations.push(format!(
                    "environment id '{}' does not match pattern '{}'",
                    id,
                    self.rules.environment_id.as_str()
                ));
            }
            if !self.rules.ruby_version.is_match(&record.ruby_version) {
                violations.push(format!(
                    "environments.{}: ruby_version '{}' does not match pattern '{}'",
                    id,
                    record.ruby_version,
                    self.rules.ruby_version.as_str()
                ));
            }
            if !self.rules.platform_tags.contains(&record.ruby_platform) {
                violations.push(format!(
                    "environments.{}: ruby_platform '{}' is not a recognized platform tag",
                    id, record.ruby_platform
                ));
            }
            if !record.timestamp.is_empty() {
                check_timestamp(
                    &format!("environments.{}.timestamp", id),
                    &record.timestamp,
                    &mut violations,
                );
            }
        }

        for id in merged.combined_results.environment_ids() {
            if !merged.environments.contains_key(&id) {
                violations.push(format!(
                    "dangling environment id '{}': referenced in combined_results but absent from environments",
                    id
                ));
            }
        }

        let combined = &merged.combined_results;
        for (op, section) in [
            (Operation::Parsing, &combined.parsing),
            (Operation::Generation, &combined.generation),
            (Operation::Streaming, &combined.streaming),
        ] {
            self.check_combined_section(op, section, &mut violations);
        }

        finish(violations)
    }

    fn check_combined_section(
        &self,
        op: Operation,
        section: &CombinedSection<PerformanceRecord>,
        violations: &mut Vec<String>,
    ) {
        for (size, formats) in section {
            for (format, serializers) in formats {
                for (name, environments) in serializers {
                    for (env_id, record) in environments {
                        let path = format!("{}.{}.{}.{}.{}", op, size, format, name, env_id);
                        check_performance_record(&path, record, self.rules.tolerances, violations);
                    }
                }
            }
        }
    }
}

fn finish(violations: Vec<String>) -> Result<()> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::Validation { violations })
    }
}

fn check_timestamp(label: &str, value: &str, violations: &mut Vec<String>) {
    if DateTime::parse_from_rfc3339(value).is_err() {
        violations.push(format!("{} '{}' is not a valid ISO-8601 timestamp", label, value));
    }
}

/// Verifies one performance record: non-negative finite figures, a
/// positive iteration count, and the two derived-value invariants
/// within the configured tolerances. The record is trusted but
/// verified; nothing is recomputed or repaired.
fn check_performance_record(
    path: &str,
    record: &PerformanceRecord,
    tolerances: Tolerances,
    violations: &mut Vec<String>,
) {
    for (field, value) in [
        ("time_per_iterations", record.time_per_iterations),
        ("time_per_iteration", record.time_per_iteration),
        ("iterations_per_second", record.iterations_per_second),
    ] {
        if !value.is_finite() || value < 0.0 {
            violations.push(format!(
                "record {}: {} must be a non-negative number, got {}",
                path, field, value
            ));
        }
    }
    if record.iterations_count < 1 {
        violations.push(format!(
            "record {}: iterations_count must be >= 1, got {}",
            path, record.iterations_count
        ));
        return;
    }

    if record.time_per_iteration > 0.0 {
        let derived_ips = 1.0 / record.time_per_iteration;
        if (derived_ips - record.iterations_per_second).abs() > tolerances.iterations_per_second {
            violations.push(format!(
                "record {}: iterations_per_second {} inconsistent with 1/time_per_iteration {} (tolerance {})",
                path, record.iterations_per_second, derived_ips, tolerances.iterations_per_second
            ));
        }
    } else if record.iterations_per_second > 0.0 {
        violations.push(format!(
            "record {}: iterations_per_second {} reported with zero time_per_iteration",
            path, record.iterations_per_second
        ));
    }

    let derived_tpi = record.time_per_iterations / record.iterations_count as f64;
    if (derived_tpi - record.time_per_iteration).abs() > tolerances.time_per_iteration {
        violations.push(format!(
            "record {}: time_per_iteration {} inconsistent with time_per_iterations/iterations_count {} (tolerance {})",
            path, record.time_per_iteration, derived_tpi, tolerances.time_per_iteration
        ));
    }
}
