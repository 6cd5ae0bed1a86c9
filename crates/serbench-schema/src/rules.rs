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

//! Schema rule definitions.
//!
//! Rules are loaded from an external YAML description
//! (`rules/result_schema.yaml` by default) so the required-field lists,
//! platform-tag set, and tolerances can evolve without a rebuild.
//! Patterns are compiled once at load; a bad pattern is a configuration
//! error, not a per-document one.

use crate::error::{Result, SchemaError};
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the rules file location.
pub const SCHEMA_PATH_ENV: &str = "SERBENCH_SCHEMA";

/// Returns the rules file path: the `SERBENCH_SCHEMA` environment
/// variable if set, otherwise the file shipped with this crate.
pub fn default_rules_path() -> PathBuf {
    std::env::var_os(SCHEMA_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            Path::new(env!("CARGO_MANIFEST_DIR")).join("rules/result_schema.yaml")
        })
}

/// Required top-level fields for one document shape.
#[derive(Debug, Clone, Deserialize)]
pub struct RequiredFields {
    /// Field names that must be present and non-empty.
    pub required: Vec<String>,
}

/// Numeric tolerances for derived-value consistency checks.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Tolerances {
    /// Allowed deviation of `iterations_per_second` from
    /// `1 / time_per_iteration`.
    pub iterations_per_second: f64,
    /// Allowed deviation of `time_per_iteration` from
    /// `time_per_iterations / iterations_count`.
    pub time_per_iteration: f64,
}

#[derive(Debug, Deserialize)]
struct RawRules {
    single: RequiredFields,
    merged: RequiredFields,
    ruby_version_pattern: String,
    environment_id_pattern: String,
    platform_tags: Vec<String>,
    tolerances: Tolerances,
}

/// Compiled schema rules.
#[derive(Debug, Clone)]
pub struct SchemaRules {
    /// Required fields for single-run documents.
    pub single: RequiredFields,
    /// Required fields for merged documents.
    pub merged: RequiredFields,
    /// Compiled `ruby_version` pattern.
    pub ruby_version: Regex,
    /// Compiled environment-id pattern.
    pub environment_id: Regex,
    /// Accepted `ruby_platform` tags.
    pub platform_tags: BTreeSet<String>,
    /// Derived-value tolerances.
    pub tolerances: Tolerances,
}

impl SchemaRules {
    /// Loads and compiles rules from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Configuration`] if the file is missing,
    /// unreadable, malformed, or contains an invalid pattern.
    pub fn load(path: &Path) -> Result<Self> {
        let config = |message: String| SchemaError::Configuration {
            path: path.to_path_buf(),
            message,
        };

        let contents = fs::read_to_string(path)
            .map_err(|e| config(format!("cannot read rules file: {}", e)))?;
        let raw: RawRules = serde_yaml::from_str(&contents)
            .map_err(|e| config(format!("cannot parse rules file: {}", e)))?;

        let ruby_version = Regex::new(&raw.ruby_version_pattern)
            .map_err(|e| config(format!("bad ruby_version_pattern: {}", e)))?;
        let environment_id = Regex::new(&raw.environment_id_pattern)
            .map_err(|e| config(format!("bad environment_id_pattern: {}", e)))?;

        Ok(Self {
            single: raw.single,
            merged: raw.merged,
            ruby_version,
            environment_id,
            platform_tags: raw.platform_tags.into_iter().collect(),
            tolerances: raw.tolerances,
        })
    }
}
