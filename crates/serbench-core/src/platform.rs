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

//! Platform descriptors and the platform-string codec.
//!
//! A platform string is both the stable identifier of a run and the
//! directory name it is persisted under:
//! `{docker|local|asdf}-{variant|os}-{arch}-ruby-{version}`, e.g.
//! `docker-alpine-arm64-ruby-3.3` or `local-macos-arm64-ruby-3.3.8`.
//! The codec round-trips: `Platform::parse(p.to_platform_string()) == p`.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a run's environment was provisioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    /// Containerized run, variant names the image flavor.
    Docker,
    /// Run on the operator's machine, variant names the OS.
    Local,
    /// Run under the asdf version manager, variant names the OS.
    Asdf,
}

impl PlatformKind {
    /// Returns the lowercase token used in platform strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformKind::Docker => "docker",
            PlatformKind::Local => "local",
            PlatformKind::Asdf => "asdf",
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "docker" => Ok(PlatformKind::Docker),
            "local" => Ok(PlatformKind::Local),
            "asdf" => Ok(PlatformKind::Asdf),
            other => Err(CoreError::UnknownPlatformKind(other.to_string())),
        }
    }
}

/// Execution platform of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// Provisioning kind.
    pub kind: PlatformKind,
    /// Image variant or operating system, e.g. `alpine` or `macos`.
    /// May itself contain hyphens (`ubuntu-22.04`).
    pub variant: String,
    /// CPU architecture, e.g. `arm64` or `x64`.
    pub arch: String,
    /// Ruby version the run used, e.g. `3.3` or `3.3.8`.
    pub ruby_version: String,
}

impl Platform {
    /// Creates a platform descriptor.
    pub fn new(
        kind: PlatformKind,
        variant: impl Into<String>,
        arch: impl Into<String>,
        ruby_version: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            variant: variant.into(),
            arch: arch.into(),
            ruby_version: ruby_version.into(),
        }
    }

    /// Encodes this platform as its directory-name string.
    pub fn to_platform_string(&self) -> String {
        format!(
            "{}-{}-{}-ruby-{}",
            self.kind, self.variant, self.arch, self.ruby_version
        )
    }

    /// Parses a platform string.
    ///
    /// The parser anchors on the rightmost literal `ruby` token: the
    /// token before it is the arch, everything between the kind and the
    /// arch is the variant, everything after it is the version. This
    /// keeps multi-token variants like `ubuntu-22.04` parseable.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPlatformString`] when the grammar
    /// does not hold, or [`CoreError::UnknownPlatformKind`] for an
    /// unrecognized leading token.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = |reason: &str| CoreError::InvalidPlatformString {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = s.split('-').collect();
        let ruby_idx = parts
            .iter()
            .rposition(|part| *part == "ruby")
            .ok_or_else(|| invalid("missing 'ruby' token"))?;

        if ruby_idx < 3 {
            return Err(invalid("expected {kind}-{variant}-{arch} before 'ruby'"));
        }
        if ruby_idx + 1 >= parts.len() {
            return Err(invalid("missing version after 'ruby'"));
        }

        let kind = parts[0].parse::<PlatformKind>()?;
        let variant = parts[1..ruby_idx - 1].join("-");
        let arch = parts[ruby_idx - 1].to_string();
        let ruby_version = parts[ruby_idx + 1..].join("-");
        if ruby_version.is_empty() {
            return Err(invalid("missing version after 'ruby'"));
        }

        Ok(Self {
            kind,
            variant,
            arch,
            ruby_version,
        })
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_platform_string())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
