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

//! Run and run-set repository for SerBench results.
//!
//! [`ResultStore`] owns a directory tree of persisted benchmark runs
//! and named run sets, reloading from disk on every query. Runs are
//! addressed by platform string, run sets by `{name}-{timestamp}`.

pub mod error;
pub mod run;
pub mod run_set;
pub mod store;

pub use error::{Result, StoreError};
pub use run::{Run, RunMetadata, RunSummary};
pub use run_set::{RunSet, RunSetMetadata, SET_STAMP_FORMAT};
pub use store::ResultStore;
