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

//! Schema validation for SerBench result documents.
//!
//! Rule definitions (required fields, patterns, platform tags,
//! tolerances) live in an external YAML file loaded once at validator
//! construction; see [`rules::default_rules_path`]. Validation collects
//! every violation before failing and never mutates a document.

pub mod error;
pub mod rules;
pub mod validator;

pub use error::{Result, SchemaError};
pub use rules::{default_rules_path, SchemaRules, Tolerances, SCHEMA_PATH_ENV};
pub use validator::SchemaValidator;
