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

//! The report emitter seam.

use crate::error::{ReportError, Result};
use serbench_core::MergedBenchmarkResult;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A writer of one report format.
///
/// Emitters are stateless; renderers pick the set they want and point
/// them all at the same output directory.
pub trait ReportEmitter {
    /// File name this emitter writes inside the output directory.
    fn file_name(&self) -> &'static str;

    /// Emits the report for `merged` into `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the underlying writer
    /// fails.
    fn emit(&self, merged: &MergedBenchmarkResult, writer: &mut dyn Write) -> Result<()>;

    /// Emits the report into `output_dir` under [`file_name`], creating
    /// the directory if needed, and returns the written path.
    ///
    /// [`file_name`]: ReportEmitter::file_name
    fn write_report(&self, merged: &MergedBenchmarkResult, output_dir: &Path) -> Result<PathBuf> {
        let io_err = |path: &Path, e: std::io::Error| ReportError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        fs::create_dir_all(output_dir).map_err(|e| io_err(output_dir, e))?;
        let path = output_dir.join(self.file_name());
        let mut file = fs::File::create(&path).map_err(|e| io_err(&path, e))?;
        self.emit(merged, &mut file)?;
        file.flush().map_err(|e| io_err(&path, e))?;
        Ok(path)
    }
}
