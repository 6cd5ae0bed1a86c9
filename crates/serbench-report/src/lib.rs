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

//! Report emitters for merged SerBench results.
//!
//! Machine-readable exports of a [`serbench_core::MergedBenchmarkResult`]
//! behind the [`ReportEmitter`] seam:
//!
//! - [`JsonEmitter`]: the full merged document, pretty-printed JSON
//! - [`YamlEmitter`]: the full merged document, YAML
//! - [`CsvEmitter`]: one row per measurement leaf, for spreadsheets and
//!   plotting scripts

pub mod csv;
pub mod emitter;
pub mod error;
pub mod json;
pub mod rows;
pub mod yaml;

pub use self::csv::CsvEmitter;
pub use emitter::ReportEmitter;
pub use error::{ReportError, Result};
pub use json::JsonEmitter;
pub use rows::{flatten, ReportRow};
pub use yaml::YamlEmitter;

/// All emitters in canonical output order.
pub fn default_emitters() -> Vec<Box<dyn ReportEmitter>> {
    vec![
        Box::new(YamlEmitter),
        Box::new(JsonEmitter),
        Box::new(CsvEmitter),
    ]
}
