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

//! Persisted runs.
//!
//! A [`Run`] wraps one benchmark result document with its platform
//! descriptor and free-form metadata. Runs are value objects: the store
//! reloads them from disk on every access, so holding one does not
//! track later on-disk changes.

use chrono::Utc;
use serbench_core::{BenchmarkResultDocument, Platform};
use serde::{Deserialize, Serialize};

/// Free-form metadata attached to a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetadata {
    /// When the run was recorded, ISO-8601.
    pub created_at: String,
    /// Name of the benchmark suite that produced the run.
    pub benchmark_name: String,
    /// Operator-assigned tags for lookup.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One completed benchmark execution for one environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Where the run executed.
    pub platform: Platform,
    /// The run's full result document.
    pub document: BenchmarkResultDocument,
    /// Run metadata.
    pub metadata: RunMetadata,
}

impl Run {
    /// Creates a run stamped with the current time.
    pub fn new(
        platform: Platform,
        document: BenchmarkResultDocument,
        benchmark_name: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            document,
            metadata: RunMetadata {
                created_at: Utc::now().to_rfc3339(),
                benchmark_name: benchmark_name.into(),
                tags: Vec::new(),
            },
        }
    }

    /// Adds a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.metadata.tags.push(tag.into());
        self
    }

    /// Returns the run's platform string, its identity in the store.
    pub fn platform_string(&self) -> String {
        self.platform.to_platform_string()
    }

    /// True when the run carries every one of the given tags.
    pub fn has_tags(&self, tags: &[String]) -> bool {
        tags.iter().all(|t| self.metadata.tags.contains(t))
    }
}

/// Compact description of a run, persisted inside run sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// The run's platform string.
    pub platform_string: String,
    /// Ruby version of the run's document.
    pub ruby_version: String,
    /// Ruby platform tag of the run's document.
    pub ruby_platform: String,
    /// When the run was recorded.
    pub created_at: String,
    /// Benchmark suite name.
    pub benchmark_name: String,
    /// Leaf record count in the run's document.
    pub record_count: usize,
}

impl From<&Run> for RunSummary {
    fn from(run: &Run) -> Self {
        Self {
            platform_string: run.platform_string(),
            ruby_version: run.document.ruby_version.clone(),
            ruby_platform: run.document.ruby_platform.clone(),
            created_at: run.metadata.created_at.clone(),
            benchmark_name: run.metadata.benchmark_name.clone(),
            record_count: run.document.record_count(),
        }
    }
}

impl RunSummary {
    /// The duplicate-detection identity of this entry.
    pub fn identity(&self) -> (&str, &str, &str) {
        (
            &self.platform_string,
            &self.created_at,
            &self.benchmark_name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serbench_core::PlatformKind;

    fn run() -> Run {
        Run::new(
            Platform::new(PlatformKind::Docker, "alpine", "arm64", "3.3"),
            BenchmarkResultDocument::default(),
            "serialization",
        )
    }

    #[test]
    fn test_platform_string_identity() {
        assert_eq!(run().platform_string(), "docker-alpine-arm64-ruby-3.3");
    }

    #[test]
    fn test_tag_matching() {
        let tagged = run().with_tag("nightly").with_tag("arm");
        assert!(tagged.has_tags(&["nightly".to_string()]));
        assert!(tagged.has_tags(&["nightly".to_string(), "arm".to_string()]));
        assert!(!tagged.has_tags(&["release".to_string()]));
        assert!(run().has_tags(&[]));
    }

    #[test]
    fn test_summary_identity_triple() {
        let run = run();
        let summary = RunSummary::from(&run);
        assert_eq!(
            summary.identity(),
            (
                "docker-alpine-arm64-ruby-3.3",
                run.metadata.created_at.as_str(),
                "serialization"
            )
        );
    }
}
