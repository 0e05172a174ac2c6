//! Node.js version parsing.

use std::fmt;
use std::str::FromStr;

use semver::Version;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A parsed Node.js release version backed by semver.
///
/// Parsing is lenient in the two ways release indexes and manifests need:
/// a leading `v` is accepted, and missing minor/patch segments default to
/// zero (`v9` is `9.0.0`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeVersion(Version);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("empty version string")]
    Empty,

    #[error("invalid version segment '{0}'")]
    Segment(String),

    #[error("too many version segments in '{0}'")]
    TooManySegments(String),

    #[error("invalid version '{input}': {reason}")]
    Semver { input: String, reason: String },
}

impl NodeVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(Version::new(major, minor, patch))
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    pub fn as_semver(&self) -> &Version {
        &self.0
    }

    /// The version as it appears in release URLs: `v20.11.1`.
    pub fn tag(&self) -> String {
        format!("v{}", self.0)
    }
}

impl fmt::Display for NodeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('v')
            .or_else(|| s.strip_prefix('V'))
            .unwrap_or(s);
        if s.is_empty() {
            return Err(VersionError::Empty);
        }

        let split = s.find(['-', '+']).unwrap_or(s.len());
        let (core, rest) = s.split_at(split);

        let segments: Vec<&str> = core.split('.').collect();
        if segments.len() > 3 {
            return Err(VersionError::TooManySegments(s.to_string()));
        }
        for segment in &segments {
            if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                return Err(VersionError::Segment(segment.to_string()));
            }
        }

        let mut full = segments.join(".");
        for _ in segments.len()..3 {
            full.push_str(".0");
        }
        full.push_str(rest);

        Version::parse(&full)
            .map(Self)
            .map_err(|e| VersionError::Semver {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl From<Version> for NodeVersion {
    fn from(v: Version) -> Self {
        Self(v)
    }
}

impl AsRef<Version> for NodeVersion {
    fn as_ref(&self) -> &Version {
        &self.0
    }
}
