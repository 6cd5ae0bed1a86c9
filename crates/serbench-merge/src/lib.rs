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

//! Result merge engine for SerBench.
//!
//! Ingests per-run benchmark result documents, builds an environment
//! registry, and folds every record into a combined cross-environment
//! structure. See [`ResultMerger`] for the fold semantics and
//! [`discovery`] for how result files are located on disk.

pub mod discovery;
pub mod error;
pub mod merger;

pub use discovery::discover_result_files;
pub use error::{MergeError, Result};
pub use merger::{write_merged, ResultMerger, MERGED_JSON, MERGED_YAML};
