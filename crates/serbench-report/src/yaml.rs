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

//! YAML report export.

use crate::emitter::ReportEmitter;
use crate::error::{ReportError, Result};
use serbench_core::MergedBenchmarkResult;
use std::io::Write;

/// Emits the full merged document as YAML, the canonical on-disk form.
pub struct YamlEmitter;

impl ReportEmitter for YamlEmitter {
    fn file_name(&self) -> &'static str {
        "report.yaml"
    }

    fn emit(&self, merged: &MergedBenchmarkResult, writer: &mut dyn Write) -> Result<()> {
        let yaml = serde_yaml::to_string(merged).map_err(|e| ReportError::Serialize {
            message: e.to_string(),
        })?;
        writer
            .write_all(yaml.as_bytes())
            .map_err(|e| ReportError::Write {
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_report_parses_back() {
        let merged = MergedBenchmarkResult::new();
        let mut buf = Vec::new();
        YamlEmitter.emit(&merged, &mut buf).unwrap();

        let parsed: MergedBenchmarkResult = serde_yaml::from_slice(&buf).unwrap();
        assert_eq!(parsed, merged);
    }
}
