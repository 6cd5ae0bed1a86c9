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

//! The result store.
//!
//! Owns the on-disk layout exclusively:
//!
//! ```text
//! <base>/runs/<platform_string>/
//!     data/results.yaml
//!     data/results.json
//!     metadata.yaml
//!     platform.yaml
//! <base>/sets/<name>-<timestamp>/
//!     merged_results.yaml
//!     merged_results.json
//!     metadata.yaml
//!     runs/summary.yaml
//! ```
//!
//! Every query reloads from disk; there is no in-memory cache, so
//! changes made by other processes are visible immediately at the cost
//! of re-parsing. The store performs no locking: concurrent writers to
//! the same platform string or run-set directory can race. This is an
//! accepted limitation of a single-operator batch tool; callers that
//! run merges concurrently must serialize writes to the same logical
//! run or run set themselves.

use crate::error::{Result, StoreError};
use crate::run::{Run, RunMetadata, RunSummary};
use crate::run_set::{RunSet, RunSetMetadata};
use serbench_core::{BenchmarkResultDocument, MergedBenchmarkResult, Platform};
use serbench_merge::{write_merged, ResultMerger, MERGED_YAML};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Repository for persisted runs and run sets.
///
/// Constructed explicitly and passed down by callers; tests point one
/// at a temporary directory.
pub struct ResultStore {
    base: PathBuf,
    merger: ResultMerger,
}

impl ResultStore {
    /// Creates a store rooted at `base`. Nothing is created on disk
    /// until the first write.
    pub fn new(base: impl Into<PathBuf>, merger: ResultMerger) -> Self {
        Self {
            base: base.into(),
            merger,
        }
    }

    /// The store's base directory.
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn runs_dir(&self) -> PathBuf {
        self.base.join("runs")
    }

    fn sets_dir(&self) -> PathBuf {
        self.base.join("sets")
    }

    fn run_dir(&self, platform_string: &str) -> PathBuf {
        self.runs_dir().join(platform_string)
    }

    // ---- runs ----

    /// True when a run is persisted under the given platform string.
    pub fn run_exists(&self, platform_string: &str) -> bool {
        self.run_dir(platform_string)
            .join("data/results.yaml")
            .is_file()
    }

    /// Persists a run, overwriting any previous run with the same
    /// platform string, and returns it reloaded from disk.
    pub fn save_run(&self, run: &Run) -> Result<Run> {
        let dir = self.run_dir(&run.platform_string());
        let data_dir = dir.join("data");
        fs::create_dir_all(&data_dir).map_err(|e| io_error(&data_dir, e))?;

        write_yaml(&data_dir.join("results.yaml"), &run.document)?;
        write_json(&data_dir.join("results.json"), &run.document)?;
        write_yaml(&dir.join("metadata.yaml"), &run.metadata)?;
        write_yaml(&dir.join("platform.yaml"), &run.platform)?;

        info!(platform = %run.platform_string(), "saved run");
        self.load_run(&run.platform_string())
    }

    /// Loads a run by platform string.
    ///
    /// # Errors
    ///
    /// [`StoreError::RunNotFound`] when nothing is persisted under that
    /// platform string.
    pub fn load_run(&self, platform_string: &str) -> Result<Run> {
        let dir = self.run_dir(platform_string);
        if !dir.is_dir() {
            return Err(StoreError::RunNotFound {
                platform_string: platform_string.to_string(),
            });
        }

        let platform: Platform = read_yaml(&dir.join("platform.yaml"))?;
        let metadata: RunMetadata = read_yaml(&dir.join("metadata.yaml"))?;
        let document: BenchmarkResultDocument = read_yaml(&dir.join("data/results.yaml"))?;

        Ok(Run {
            platform,
            document,
            metadata,
        })
    }

    /// Deletes a persisted run.
    pub fn delete_run(&self, platform_string: &str) -> Result<()> {
        let dir = self.run_dir(platform_string);
        if !dir.is_dir() {
            return Err(StoreError::RunNotFound {
                platform_string: platform_string.to_string(),
            });
        }
        fs::remove_dir_all(&dir).map_err(|e| io_error(&dir, e))?;
        info!(platform = platform_string, "deleted run");
        Ok(())
    }

    /// Lists persisted runs, optionally filtered to those carrying all
    /// of the given tags and truncated to a limit. Unloadable entries
    /// are skipped with a warning.
    pub fn find_runs(&self, tags: Option<&[String]>, limit: Option<usize>) -> Result<Vec<Run>> {
        let mut runs = Vec::new();
        for name in sorted_subdirs(&self.runs_dir())? {
            match self.load_run(&name) {
                Ok(run) => {
                    if tags.map_or(true, |t| run.has_tags(t)) {
                        runs.push(run);
                    }
                }
                Err(e) => warn!(run = %name, error = %e, "skipping unloadable run"),
            }
        }
        if let Some(limit) = limit {
            runs.truncate(limit);
        }
        Ok(runs)
    }

    // ---- run sets ----

    /// Creates, persists, and returns a run set over the named runs.
    ///
    /// Each platform string is loaded from the store in order and its
    /// document folded into the set's merged result. Listing the same
    /// run twice is a [`StoreError::DuplicateResult`].
    pub fn create_run_set(
        &self,
        name: &str,
        run_platform_strings: &[String],
        tags: Vec<String>,
    ) -> Result<RunSet> {
        let mut set = RunSet::new(name, tags);
        for platform_string in run_platform_strings {
            let run = self.load_run(platform_string)?;
            self.fold_into_set(&mut set, &run)?;
        }
        self.persist_run_set(&set)?;
        info!(
            set = %set.directory_name(),
            runs = set.runs.len(),
            "created run set"
        );
        self.load_run_set(&set.directory_name())
    }

    /// Adds a run to an existing set and re-persists it.
    ///
    /// # Errors
    ///
    /// [`StoreError::DuplicateResult`] when the set already contains a
    /// run with the identical (platform string, created_at,
    /// benchmark_name) triple; the set is left unchanged.
    pub fn add_result(&self, set: &mut RunSet, run: &Run) -> Result<()> {
        self.fold_into_set(set, run)?;
        self.persist_run_set(set)
    }

    fn fold_into_set(&self, set: &mut RunSet, run: &Run) -> Result<()> {
        let summary = RunSummary::from(run);
        if set.contains(summary.identity()) {
            return Err(StoreError::DuplicateResult {
                platform_string: summary.platform_string,
                created_at: summary.created_at,
                benchmark_name: summary.benchmark_name,
            });
        }
        self.merger
            .merge_into(&mut set.merged, &run.document, &run.platform_string());
        set.runs.push(summary);
        Ok(())
    }

    /// Loads a run set by directory name (`{name}-{timestamp}`).
    pub fn load_run_set(&self, directory_name: &str) -> Result<RunSet> {
        let dir = self.sets_dir().join(directory_name);
        let metadata: RunSetMetadata = read_yaml(&dir.join("metadata.yaml"))?;
        let runs: Vec<RunSummary> = read_yaml(&dir.join("runs/summary.yaml"))?;
        let merged: MergedBenchmarkResult = read_yaml(&dir.join(MERGED_YAML))?;
        Ok(RunSet {
            metadata,
            runs,
            merged,
        })
    }

    /// Lists persisted run sets, optionally filtered by tags and
    /// truncated to a limit.
    pub fn find_run_sets(
        &self,
        tags: Option<&[String]>,
        limit: Option<usize>,
    ) -> Result<Vec<RunSet>> {
        let mut sets = Vec::new();
        for name in sorted_subdirs(&self.sets_dir())? {
            match self.load_run_set(&name) {
                Ok(set) => {
                    if tags.map_or(true, |t| set.has_tags(t)) {
                        sets.push(set);
                    }
                }
                Err(e) => warn!(set = %name, error = %e, "skipping unloadable run set"),
            }
        }
        if let Some(limit) = limit {
            sets.truncate(limit);
        }
        Ok(sets)
    }

    fn persist_run_set(&self, set: &RunSet) -> Result<()> {
        let dir = self.sets_dir().join(set.directory_name());
        let runs_dir = dir.join("runs");
        fs::create_dir_all(&runs_dir).map_err(|e| io_error(&runs_dir, e))?;

        write_merged(&set.merged, &dir)?;
        write_yaml(&dir.join("metadata.yaml"), &set.metadata)?;
        write_yaml(&runs_dir.join("summary.yaml"), &set.runs)?;
        Ok(())
    }

    // ---- structure validation ----

    /// Walks every persisted run and run set, re-validating each, and
    /// returns all defects found. Never halts on the first problem.
    pub fn validate_structure(&self) -> Vec<String> {
        let mut defects = Vec::new();
        let validator = self.merger.validator();

        let run_names = match sorted_subdirs(&self.runs_dir()) {
            Ok(names) => names,
            Err(e) => {
                defects.push(format!("runs: {}", e));
                Vec::new()
            }
        };
        for name in run_names {
            match self.load_run(&name) {
                Ok(run) => {
                    if run.platform_string() != name {
                        defects.push(format!(
                            "runs/{}: platform.yaml encodes '{}', directory disagrees",
                            name,
                            run.platform_string()
                        ));
                    }
                    if let Err(e) = validator.validate_single(&run.document) {
                        for violation in e.violations() {
                            defects.push(format!("runs/{}: {}", name, violation));
                        }
                    }
                }
                Err(e) => defects.push(format!("runs/{}: {}", name, e)),
            }
        }

        let set_names = match sorted_subdirs(&self.sets_dir()) {
            Ok(names) => names,
            Err(e) => {
                defects.push(format!("sets: {}", e));
                Vec::new()
            }
        };
        for name in set_names {
            match self.load_run_set(&name) {
                Ok(set) => {
                    if let Err(e) = validator.validate_merged(&set.merged) {
                        for violation in e.violations() {
                            defects.push(format!("sets/{}: {}", name, violation));
                        }
                    }
                    for summary in &set.runs {
                        if Platform::parse(&summary.platform_string).is_err() {
                            defects.push(format!(
                                "sets/{}: summary references unparseable platform string '{}'",
                                name, summary.platform_string
                            ));
                        }
                    }
                }
                Err(e) => defects.push(format!("sets/{}: {}", name, e)),
            }
        }

        defects
    }
}

fn io_error(path: &Path, e: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

fn sorted_subdirs(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let entries = fs::read_dir(dir).map_err(|e| io_error(dir, e))?;
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();
    Ok(names)
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    serde_yaml::from_str(&contents).map_err(|e| StoreError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn write_yaml<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let yaml = serde_yaml::to_string(value).map_err(|e| StoreError::Serialize {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    fs::write(path, yaml).map_err(|e| io_error(path, e))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| StoreError::Serialize {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    fs::write(path, json).map_err(|e| io_error(path, e))
}
