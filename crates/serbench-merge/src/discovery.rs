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

//! Result-file discovery.
//!
//! For each input directory the candidate names are tried in priority
//! order: `results.yaml` anywhere below the directory, then
//! `results.yml`, then `results.json`. The first name with any matches
//! wins for that directory; matches are sorted for deterministic input
//! order. Directories contribute their files in the order the caller
//! supplied the directories.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Candidate result-file names, highest priority first.
const CANDIDATE_NAMES: [&str; 3] = ["results.yaml", "results.yml", "results.json"];

/// Collects result files across all input directories into one ordered
/// list. Returns an empty list when nothing matches anywhere.
pub fn discover_result_files(input_dirs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for dir in input_dirs {
        files.extend(discover_in_directory(dir));
    }
    files
}

fn discover_in_directory(dir: &Path) -> Vec<PathBuf> {
    let mut by_name: Vec<Vec<PathBuf>> = vec![Vec::new(); CANDIDATE_NAMES.len()];

    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if let Some(rank) = CANDIDATE_NAMES.iter().position(|c| *c == name) {
            by_name[rank].push(entry.into_path());
        }
    }

    for (rank, mut matches) in by_name.into_iter().enumerate() {
        if !matches.is_empty() {
            matches.sort();
            debug!(
                dir = %dir.display(),
                name = CANDIDATE_NAMES[rank],
                count = matches.len(),
                "discovered result files"
            );
            return matches;
        }
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_prefers_yaml_over_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("run1")).unwrap();
        fs::write(dir.path().join("run1/results.yaml"), "a: 1").unwrap();
        fs::write(dir.path().join("run1/results.json"), "{}").unwrap();

        let files = discover_result_files(&[dir.path().to_path_buf()]);
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("run1/results.yaml"));
    }

    #[test]
    fn test_falls_back_to_json_in_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("results.json"), "{}").unwrap();

        let files = discover_result_files(&[dir.path().to_path_buf()]);
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("results.json"));
    }

    #[test]
    fn test_collects_across_directories_in_order() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        fs::write(dir_a.path().join("results.yaml"), "a: 1").unwrap();
        fs::write(dir_b.path().join("results.yml"), "b: 2").unwrap();

        let files = discover_result_files(&[
            dir_b.path().to_path_buf(),
            dir_a.path().to_path_buf(),
        ]);
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("results.yml"));
        assert!(files[1].ends_with("results.yaml"));
    }

    #[test]
    fn test_empty_when_nothing_matches() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "not a result").unwrap();
        assert!(discover_result_files(&[dir.path().to_path_buf()]).is_empty());
    }
}
