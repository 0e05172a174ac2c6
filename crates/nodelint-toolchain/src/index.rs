//! The Node.js release index (`https://nodejs.org/dist/index.json`).

use std::path::Path;

use nodelint_util::errors::LintError;
use serde::{Deserialize, Serialize};

use crate::download;

pub const NODE_INDEX_URL: &str = "https://nodejs.org/dist/index.json";

/// One entry of the release index. Only `version` takes part in
/// resolution; the rest is carried along for callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseCandidate {
    pub version: String,
    #[serde(default)]
    pub npm: Option<String>,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub lts: Lts,
}

/// The `lts` field is `false` for current releases and a codename for LTS lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lts {
    Flag(bool),
    Codename(String),
}

impl Default for Lts {
    fn default() -> Self {
        Lts::Flag(false)
    }
}

impl ReleaseCandidate {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            npm: None,
            files: Vec::new(),
            date: None,
            lts: Lts::default(),
        }
    }

    pub fn is_lts(&self) -> bool {
        !matches!(self.lts, Lts::Flag(false))
    }

    pub fn lts_codename(&self) -> Option<&str> {
        match &self.lts {
            Lts::Codename(name) => Some(name),
            Lts::Flag(_) => None,
        }
    }

    /// Whether this release ships an archive for `platform`
    /// (`linux-x64`, `darwin-arm64`, ...).
    pub fn supports(&self, platform: &str) -> bool {
        let key = index_file_key(platform);
        self.files.iter().any(|f| *f == key)
    }
}

/// The release index uses `osx-<arch>-tar` where archive names use `darwin-<arch>`.
fn index_file_key(platform: &str) -> String {
    match platform.strip_prefix("darwin-") {
        Some(arch) => format!("osx-{arch}-tar"),
        None => platform.to_string(),
    }
}

/// The candidate list as published, newest release first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseIndex {
    releases: Vec<ReleaseCandidate>,
}

impl ReleaseIndex {
    pub fn new(releases: Vec<ReleaseCandidate>) -> Self {
        Self { releases }
    }

    pub fn from_json(json: &str) -> Result<Self, LintError> {
        let releases = serde_json::from_str(json).map_err(|e| LintError::Toolchain {
            message: format!("Failed to decode release index: {e}"),
        })?;
        Ok(Self { releases })
    }

    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LintError::Toolchain {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Ok(Self::from_json(&content)?)
    }

    /// Download and decode the index at `url`.
    pub fn fetch(url: &str) -> miette::Result<Self> {
        tracing::info!("Fetching release index from {url}");
        let body = download::fetch_text(url).inspect_err(|e| {
            tracing::error!(error = %e, "failed to retrieve release index");
        })?;
        Ok(Self::from_json(&body).inspect_err(|e| {
            tracing::error!(error = %e, "failed to decode release index");
        })?)
    }

    /// Keep only releases that ship an archive for `platform`, preserving order.
    pub fn for_platform(self, platform: &str) -> Self {
        Self {
            releases: self
                .releases
                .into_iter()
                .filter(|r| r.supports(platform))
                .collect(),
        }
    }

    pub fn releases(&self) -> &[ReleaseCandidate] {
        &self.releases
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darwin_maps_to_osx_tar_key() {
        assert_eq!(index_file_key("darwin-arm64"), "osx-arm64-tar");
        assert_eq!(index_file_key("linux-x64"), "linux-x64");
    }
}
