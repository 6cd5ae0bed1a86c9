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

//! Persisted run sets.
//!
//! A [`RunSet`] is a named, timestamped collection of runs together
//! with their merged comparison document. It is addressed on disk by
//! `{name}-{timestamp}` where the timestamp is ISO-8601 basic format
//! (`%Y%m%dT%H%M%SZ`), which stays filesystem-safe on every platform.

use crate::run::RunSummary;
use chrono::Utc;
use serbench_core::MergedBenchmarkResult;
use serde::{Deserialize, Serialize};

/// Timestamp format used in run-set directory names.
pub const SET_STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Metadata for a run set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSetMetadata {
    /// Operator-chosen name.
    pub name: String,
    /// Directory-name timestamp, ISO-8601 basic format.
    pub stamp: String,
    /// When the set was created, ISO-8601.
    pub created_at: String,
    /// Operator-assigned tags for lookup.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A named collection of runs plus their merged comparison document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSet {
    /// Set metadata.
    pub metadata: RunSetMetadata,
    /// Summaries of the member runs, in merge order.
    pub runs: Vec<RunSummary>,
    /// The merged document over all member runs.
    pub merged: MergedBenchmarkResult,
}

impl RunSet {
    /// Creates an empty run set stamped with the current time.
    pub fn new(name: impl Into<String>, tags: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            metadata: RunSetMetadata {
                name: name.into(),
                stamp: now.format(SET_STAMP_FORMAT).to_string(),
                created_at: now.to_rfc3339(),
                tags,
            },
            runs: Vec::new(),
            merged: MergedBenchmarkResult::new(),
        }
    }

    /// The set's directory name, `{name}-{stamp}`.
    pub fn directory_name(&self) -> String {
        format!("{}-{}", self.metadata.name, self.metadata.stamp)
    }

    /// True when a run with this identity triple is already a member.
    pub fn contains(&self, identity: (&str, &str, &str)) -> bool {
        self.runs.iter().any(|r| r.identity() == identity)
    }

    /// True when the set carries every one of the given tags.
    pub fn has_tags(&self, tags: &[String]) -> bool {
        tags.iter().all(|t| self.metadata.tags.contains(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_name_is_name_dash_stamp() {
        let set = RunSet::new("weekly", Vec::new());
        let dir = set.directory_name();
        assert!(dir.starts_with("weekly-"));
        assert_eq!(dir, format!("weekly-{}", set.metadata.stamp));
        // Basic-format stamp carries no filesystem-hostile characters.
        assert!(!dir.contains(':'));
    }

    #[test]
    fn test_contains_matches_identity_triple() {
        let mut set = RunSet::new("weekly", Vec::new());
        set.runs.push(RunSummary {
            platform_string: "asdf-linux-x64-ruby-3.2.4".to_string(),
            ruby_version: "3.2.4".to_string(),
            ruby_platform: "x86_64-linux".to_string(),
            created_at: "2025-06-01T12:00:00+00:00".to_string(),
            benchmark_name: "serialization".to_string(),
            record_count: 12,
        });

        assert!(set.contains((
            "asdf-linux-x64-ruby-3.2.4",
            "2025-06-01T12:00:00+00:00",
            "serialization"
        )));
        assert!(!set.contains((
            "asdf-linux-x64-ruby-3.2.4",
            "2025-06-02T12:00:00+00:00",
            "serialization"
        )));
    }
}
