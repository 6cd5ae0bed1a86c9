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

//! CSV report export.

use crate::emitter::ReportEmitter;
use crate::error::{ReportError, Result};
use crate::rows::{flatten, ReportRow};
use serbench_core::MergedBenchmarkResult;
use std::io::Write;

/// Emits the merged document flattened to one CSV row per leaf record.
///
/// Header order follows [`crate::rows::ReportRow`] field order; spread
/// tools and plotting scripts rely on the column names staying put.
pub struct CsvEmitter;

impl ReportEmitter for CsvEmitter {
    fn file_name(&self) -> &'static str {
        "report.csv"
    }

    fn emit(&self, merged: &MergedBenchmarkResult, writer: &mut dyn Write) -> Result<()> {
        let csv_err = |e: csv::Error| ReportError::Csv {
            message: e.to_string(),
        };

        // The header is written explicitly so an empty document still
        // produces a well-formed file. Auto-headers stay off, otherwise
        // serialize would emit a second header row.
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv_writer.write_record(ReportRow::COLUMNS).map_err(csv_err)?;
        for row in flatten(merged) {
            csv_writer.serialize(row).map_err(csv_err)?;
        }
        csv_writer
            .flush()
            .map_err(|e| ReportError::Write {
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serbench_core::{DataSize, Format, Operation, PerformanceRecord};

    fn merged() -> MergedBenchmarkResult {
        let mut merged = MergedBenchmarkResult::new();
        merged.combined_results.insert_timed(
            Operation::Parsing,
            DataSize::Small,
            Format::Json,
            "oj",
            "3_2_4_aarch64_linux",
            PerformanceRecord::from_batch(0.02, 20),
        );
        merged.combined_results.insert_timed(
            Operation::Parsing,
            DataSize::Small,
            Format::Json,
            "rapidjson",
            "3_2_4_aarch64_linux",
            PerformanceRecord::from_batch(0.04, 20),
        );
        merged
    }

    #[test]
    fn test_csv_has_header_and_one_row_per_leaf() {
        let mut buf = Vec::new();
        CsvEmitter.emit(&merged(), &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("operation,data_size,format,serializer,environment_id"));
        assert!(lines[1].contains("oj"));
        assert!(lines[2].contains("rapidjson"));
    }

    #[test]
    fn test_empty_merged_document_yields_header_only() {
        let mut buf = Vec::new();
        CsvEmitter
            .emit(&MergedBenchmarkResult::new(), &mut buf)
            .unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, [ReportRow::COLUMNS.join(",").as_str()]);
    }

    #[test]
    fn test_header_matches_row_field_order() {
        let mut buf = Vec::new();
        CsvEmitter.emit(&merged(), &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let headers: Vec<&str> = reader.headers().unwrap().iter().collect();
        assert_eq!(headers, ReportRow::COLUMNS);
    }
}
